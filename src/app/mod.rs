use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::{QuizConfig, display_name};
use crate::data::QuestionBank;
use crate::session::QuizSession;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{CategoryInfo, Controls};

/// Preferencias que eframe guarda entre ejecuciones. Los marcadores no se guardan.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub player_name: String,
    pub dark_mode: bool,
}

/// Controlador de la capa de presentación. Es dueño de la sesión; la UI sólo
/// guarda la opción marcada en los radio buttons y el mensaje de feedback.
pub struct QuizApp {
    pub session: QuizSession,
    pub prefs: Preferences,
    pub selected_choice: Option<String>,
    pub message: String,
}

impl QuizApp {
    /// Arranca la categoría por defecto. Si el banco no la tiene se usa la
    /// primera disponible; con un banco vacío la sesión queda en `Idle`.
    pub fn new(bank: Arc<QuestionBank>, config: &QuizConfig) -> Self {
        let mut prefs = Preferences::default();
        if let Some(name) = &config.player_name {
            prefs.player_name = name.clone();
        }

        let mut app = Self {
            session: QuizSession::new(bank),
            prefs,
            selected_choice: None,
            message: String::new(),
        };

        let first = app
            .session
            .bank()
            .list_categories()
            .first()
            .map(|id| id.to_string());
        let start = if app.session.bank().contains(&config.default_category) {
            Some(config.default_category.clone())
        } else {
            warn!(
                "default category {} not in question bank, falling back to {:?}",
                config.default_category, first
            );
            first
        };
        if let Some(id) = start {
            app.select_category(&id);
        }
        app
    }

    /// Nombre del jugador para los mensajes ("Anonymous" si está vacío).
    pub fn player_name(&self) -> &str {
        display_name(&self.prefs.player_name)
    }
}
