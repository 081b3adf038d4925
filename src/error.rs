// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

use crate::model::SessionState;

/// Errores de la sesión y de las consultas al banco de preguntas.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("question {index} is out of range for category {category} ({len} questions)")]
    IndexOutOfRange {
        category: String,
        index: usize,
        len: usize,
    },

    #[error("{operation} is not allowed while the quiz is {state}")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },
}

/// Problemas al construir el banco de preguntas (YAML embebido o externo).
#[derive(Debug, Error)]
pub enum BankError {
    #[error("could not parse question bank: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("could not read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("category {0} is defined more than once")]
    DuplicateCategory(String),

    #[error("category identifier must not be empty")]
    EmptyCategoryId,

    #[error("question {index} in category {category} is invalid: {reason}")]
    InvalidQuestion {
        category: String,
        index: usize,
        reason: String,
    },
}
