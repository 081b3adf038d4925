//! src/config.rs
//!
//! Ajustes de arranque leídos de variables de entorno (y de `.env` en desarrollo).

use std::path::PathBuf;

use crate::data::normalize_category_id;

pub const DEFAULT_CATEGORY: &str = "football";
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    /// Categoría que se arranca al abrir el widget.
    pub default_category: String,
    /// YAML externo que sustituye al banco embebido.
    pub bank_path: Option<PathBuf>,
    pub player_name: Option<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            bank_path: None,
            player_name: None,
        }
    }
}

impl QuizConfig {
    /// Lee `QUIZ_DEFAULT_CATEGORY`, `QUIZ_BANK_PATH` y `QUIZ_PLAYER_NAME`.
    pub fn from_env() -> Result<Self, ConfigError> {
        // En tests no se carga .env
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default_category = match lookup("QUIZ_DEFAULT_CATEGORY") {
            Some(raw) => {
                let id = normalize_category_id(&raw);
                if id.is_empty() {
                    return Err(ConfigError::InvalidValue(
                        "QUIZ_DEFAULT_CATEGORY".to_string(),
                        "category must not be empty".to_string(),
                    ));
                }
                id
            }
            None => DEFAULT_CATEGORY.to_string(),
        };

        let bank_path = lookup("QUIZ_BANK_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let player_name = lookup("QUIZ_PLAYER_NAME")
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self {
            default_category,
            bank_path,
            player_name,
        })
    }
}

/// Nombre que se usa en los mensajes: "Anonymous" si está vacío.
pub fn display_name(name: &str) -> &str {
    let trimmed = name.trim();
    if trimmed.is_empty() { ANONYMOUS } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = QuizConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn reads_and_normalizes_values() {
        let config = QuizConfig::from_lookup(lookup(&[
            ("QUIZ_DEFAULT_CATEGORY", " Science "),
            ("QUIZ_BANK_PATH", "/tmp/bank.yaml"),
            ("QUIZ_PLAYER_NAME", "  Aoife "),
        ]))
        .unwrap();
        assert_eq!(config.default_category, "science");
        assert_eq!(config.bank_path, Some(PathBuf::from("/tmp/bank.yaml")));
        assert_eq!(config.player_name.as_deref(), Some("Aoife"));
    }

    #[test]
    fn blank_default_category_is_rejected() {
        let err = QuizConfig::from_lookup(lookup(&[("QUIZ_DEFAULT_CATEGORY", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(var, _) if var == "QUIZ_DEFAULT_CATEGORY"));
    }

    #[test]
    fn empty_name_is_anonymous() {
        assert_eq!(display_name(""), "Anonymous");
        assert_eq!(display_name("  "), "Anonymous");
        assert_eq!(display_name(" Sean "), "Sean");
    }
}
