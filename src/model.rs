use std::fmt;

use serde::{Deserialize, Serialize};

/// Número de opciones que usan las preguntas del banco por defecto.
pub const DEFAULT_OPTION_COUNT: usize = 3;

/// Pregunta de opción múltiple. Inmutable una vez validada.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    /// Construye una pregunta comprobando sus invariantes.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, String> {
        let question = Self {
            prompt: prompt.into(),
            options,
            correct_answer: correct_answer.into(),
        };
        question.check()?;
        Ok(question)
    }

    /// Comprueba: enunciado no vacío, al menos dos opciones distintas y la
    /// respuesta correcta presente exactamente una vez entre las opciones.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt is empty".into());
        }
        if self.options.len() < 2 {
            return Err(format!(
                "needs at least 2 options, found {}",
                self.options.len()
            ));
        }
        for (i, opt) in self.options.iter().enumerate() {
            if self.options[..i].contains(opt) {
                return Err(format!("option \"{opt}\" is repeated"));
            }
        }
        if !self.options.contains(&self.correct_answer) {
            return Err(format!(
                "correct answer \"{}\" is not one of the options",
                self.correct_answer
            ));
        }
        Ok(())
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Igualdad exacta de cadenas, sin normalizar.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

/// Categoría con nombre y sus preguntas en orden de presentación.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub id: String,
    pub questions: Vec<Question>,
}

/// Estados de la sesión de quiz.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingAnswer,
    Answered,
    Exhausted,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::AwaitingAnswer => "awaiting an answer",
            SessionState::Answered => "answered",
            SessionState::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// Marcadores de la categoría actual y acumulados de toda la sesión.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub category_correct: u32,
    pub category_incorrect: u32,
    pub total_correct: u32,
    pub total_incorrect: u32,
}

/// Resultado de `submit_answer`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
    pub scores: ScoreSnapshot,
}

/// Pregunta lista para mostrar: categoría, número 1-based y total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub category: String,
    pub number: usize,
    pub total: usize,
    pub question: Question,
}

/// Resultado de avanzar (o de empezar una categoría).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    Question(QuestionView),
    Exhausted,
}

impl Advance {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Advance::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn question_rejects_answer_outside_options() {
        let err = Question::new("Q?", opts(&["a", "b", "c"]), "d").unwrap_err();
        assert!(err.contains("not one of the options"));
    }

    #[test]
    fn question_rejects_repeated_options_and_too_few() {
        assert!(Question::new("Q?", opts(&["a", "a", "b"]), "a").is_err());
        assert!(Question::new("Q?", opts(&["a"]), "a").is_err());
        assert!(Question::new("  ", opts(&["a", "b"]), "a").is_err());
    }

    #[test]
    fn two_option_question_is_allowed() {
        let q = Question::new("True or false?", opts(&["True", "False"]), "False").unwrap();
        assert!(q.is_correct("False"));
        assert!(!q.is_correct("false"));
    }

    #[test]
    fn state_display_is_readable() {
        assert_eq!(SessionState::AwaitingAnswer.to_string(), "awaiting an answer");
    }
}
