// src/data.rs

use std::path::Path;

use log::{debug, info};

use crate::error::{BankError, QuizError};
use crate::model::{Category, Question};

/// YAML embebido con el banco por defecto.
const EMBEDDED_BANK: &str = include_str!("data/quiz_questions.yaml");

/// Normaliza un identificador de categoría: sin espacios alrededor y en minúsculas.
/// Tanto el banco como las búsquedas usan esta forma.
pub fn normalize_category_id(id: &str) -> String {
    id.trim().to_lowercase()
}

/// Banco de preguntas de sólo lectura. Las categorías mantienen el orden en que
/// se definieron.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    categories: Vec<Category>,
}

impl QuestionBank {
    /// Carga el banco de preguntas desde el YAML embebido
    pub fn embedded() -> Result<Self, BankError> {
        Self::from_yaml_str(EMBEDDED_BANK)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, BankError> {
        let categories: Vec<Category> = serde_yaml::from_str(content)?;
        Self::from_categories(categories)
    }

    /// Banco externo (ver `QUIZ_BANK_PATH`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loading question bank from {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// Valida y normaliza las categorías.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, BankError> {
        let mut normalized: Vec<Category> = Vec::with_capacity(categories.len());
        for mut category in categories {
            category.id = normalize_category_id(&category.id);
            if category.id.is_empty() {
                return Err(BankError::EmptyCategoryId);
            }
            if normalized.iter().any(|c| c.id == category.id) {
                return Err(BankError::DuplicateCategory(category.id));
            }
            for (index, question) in category.questions.iter().enumerate() {
                question
                    .check()
                    .map_err(|reason| BankError::InvalidQuestion {
                        category: category.id.clone(),
                        index,
                        reason,
                    })?;
            }
            debug!(
                "category {} loaded with {} questions",
                category.id,
                category.questions.len()
            );
            normalized.push(category);
        }
        Ok(Self {
            categories: normalized,
        })
    }

    /// Identificadores de categoría en orden del banco.
    pub fn list_categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn contains(&self, category_id: &str) -> bool {
        self.find(category_id).is_some()
    }

    pub fn get_questions(&self, category_id: &str) -> Result<&[Question], QuizError> {
        self.find(category_id)
            .map(|c| c.questions.as_slice())
            .ok_or_else(|| QuizError::UnknownCategory(category_id.to_string()))
    }

    pub fn get_question(&self, category_id: &str, index: usize) -> Result<&Question, QuizError> {
        let questions = self.get_questions(category_id)?;
        questions.get(index).ok_or_else(|| QuizError::IndexOutOfRange {
            category: normalize_category_id(category_id),
            index,
            len: questions.len(),
        })
    }

    fn find(&self, category_id: &str) -> Option<&Category> {
        let wanted = normalize_category_id(category_id);
        self.categories.iter().find(|c| c.id == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bank_has_the_four_default_categories() {
        let bank = QuestionBank::embedded().expect("embedded bank parses");
        assert_eq!(
            bank.list_categories(),
            vec!["football", "history", "literature", "science"]
        );
    }

    #[test]
    fn every_seed_question_has_its_answer_among_three_options() {
        let bank = QuestionBank::embedded().unwrap();
        for id in bank.list_categories() {
            let questions = bank.get_questions(id).unwrap();
            assert_eq!(questions.len(), 5, "category {id}");
            for q in questions {
                assert_eq!(q.options().len(), crate::model::DEFAULT_OPTION_COUNT);
                assert!(q.options().iter().any(|o| o == q.correct_answer()));
            }
        }
    }

    #[test]
    fn lookups_are_normalized_to_lower_case() {
        let bank = QuestionBank::embedded().unwrap();
        let q = bank.get_question(" Football ", 0).unwrap();
        assert_eq!(q.prompt(), "Paul McGrath played for which club in 1990?");
        assert!(bank.contains("SCIENCE"));
    }

    #[test]
    fn unknown_category_and_out_of_range_index_fail() {
        let bank = QuestionBank::embedded().unwrap();
        assert_eq!(
            bank.get_questions("geography"),
            Err(QuizError::UnknownCategory("geography".into()))
        );
        assert_eq!(
            bank.get_question("history", 5),
            Err(QuizError::IndexOutOfRange {
                category: "history".into(),
                index: 5,
                len: 5,
            })
        );
    }

    #[test]
    fn duplicate_categories_are_rejected_after_normalization() {
        let yaml = r#"
- id: Music
  questions: []
- id: music
  questions: []
"#;
        let err = QuestionBank::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, BankError::DuplicateCategory(id) if id == "music"));
    }

    #[test]
    fn invalid_question_reports_category_and_index() {
        let yaml = r#"
- id: art
  questions:
    - prompt: "Who painted Guernica?"
      options: ["Picasso", "Dali", "Miro"]
      correct_answer: "Picasso"
    - prompt: "Who painted The Scream?"
      options: ["Munch", "Klimt", "Schiele"]
      correct_answer: "Monet"
"#;
        match QuestionBank::from_yaml_str(yaml) {
            Err(BankError::InvalidQuestion {
                category, index, ..
            }) => {
                assert_eq!(category, "art");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = QuestionBank::from_yaml_str("- id: [unclosed").unwrap_err();
        assert!(matches!(err, BankError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = QuestionBank::from_path("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, BankError::Io { .. }));
    }
}
