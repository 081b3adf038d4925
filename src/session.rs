// src/session.rs

use std::sync::Arc;

use log::{debug, info};

use crate::data::{QuestionBank, normalize_category_id};
use crate::error::QuizError;
use crate::model::{Advance, AnswerOutcome, Question, QuestionView, ScoreSnapshot, SessionState};

/// Sesión de quiz: categoría activa, posición y marcadores.
///
/// La sesión no hace nada por sí misma; la capa de presentación llama a
/// `start_category`, `submit_answer` y `advance` en respuesta al usuario.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    state: SessionState,
    active_category: Option<String>,
    current_index: Option<usize>,
    scores: ScoreSnapshot,
}

impl QuizSession {
    /// Sesión en estado `Idle`, sin categoría.
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            state: SessionState::Idle,
            active_category: None,
            current_index: None,
            scores: ScoreSnapshot::default(),
        }
    }

    /// Crea la sesión y arranca directamente `category_id`.
    pub fn with_category(bank: Arc<QuestionBank>, category_id: &str) -> Result<Self, QuizError> {
        let mut session = Self::new(bank);
        session.start_category(category_id)?;
        Ok(session)
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    /// Número "humano" (1, 2, 3…) de la última pregunta mostrada; 0 antes de la primera.
    pub fn question_number(&self) -> usize {
        self.current_index.map(|i| i + 1).unwrap_or(0)
    }

    /// Cantidad de preguntas de la categoría activa.
    pub fn category_len(&self) -> usize {
        self.active_category
            .as_deref()
            .and_then(|id| self.bank.get_questions(id).ok())
            .map(<[Question]>::len)
            .unwrap_or(0)
    }

    /// (Re)inicia una categoría: pone a cero el marcador de la categoría y
    /// muestra su primera pregunta. Si la categoría no existe, la sesión no cambia.
    pub fn start_category(&mut self, category_id: &str) -> Result<Advance, QuizError> {
        self.bank.get_questions(category_id)?;
        let id = normalize_category_id(category_id);
        info!("starting category {id}");

        self.active_category = Some(id);
        self.current_index = None;
        self.scores.category_correct = 0;
        self.scores.category_incorrect = 0;
        self.load_next()
    }

    /// Corrige la respuesta de la pregunta actual. Sólo válido en `AwaitingAnswer`;
    /// una segunda llamada sin `advance` falla, así no se cuenta dos veces.
    pub fn submit_answer(&mut self, choice: &str) -> Result<AnswerOutcome, QuizError> {
        self.require(SessionState::AwaitingAnswer, "submit_answer")?;
        let question = self.question_at_cursor()?;
        let correct = question.is_correct(choice);
        let correct_answer = question.correct_answer().to_string();

        if correct {
            self.scores.category_correct += 1;
            self.scores.total_correct += 1;
        } else {
            self.scores.category_incorrect += 1;
            self.scores.total_incorrect += 1;
        }
        self.state = SessionState::Answered;
        debug!(
            "answer {:?} for question {} is {}",
            choice,
            self.question_number(),
            if correct { "correct" } else { "incorrect" }
        );

        Ok(AnswerOutcome {
            correct,
            correct_answer,
            scores: self.scores,
        })
    }

    /// Pasa a la siguiente pregunta, o a `Exhausted` si no quedan.
    /// Sólo válido en `Answered`; en `Exhausted` también falla.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        self.require(SessionState::Answered, "advance")?;
        self.load_next()
    }

    /// La pregunta en pantalla, si la hay.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::AwaitingAnswer | SessionState::Answered => {
                self.question_at_cursor().ok()
            }
            SessionState::Idle | SessionState::Exhausted => None,
        }
    }

    pub fn current_view(&self) -> Option<QuestionView> {
        let question = self.current_question()?;
        Some(QuestionView {
            category: self.active_category.clone()?,
            number: self.question_number(),
            total: self.category_len(),
            question: question.clone(),
        })
    }

    pub fn score_snapshot(&self) -> ScoreSnapshot {
        self.scores
    }

    fn require(&self, expected: SessionState, operation: &'static str) -> Result<(), QuizError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(QuizError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    fn question_at_cursor(&self) -> Result<&Question, QuizError> {
        match (&self.active_category, self.current_index) {
            (Some(id), Some(index)) => self.bank.get_question(id, index),
            _ => Err(QuizError::InvalidState {
                operation: "current_question",
                state: self.state,
            }),
        }
    }

    // Transición interna compartida por `start_category` y `advance`.
    fn load_next(&mut self) -> Result<Advance, QuizError> {
        let next = self.current_index.map(|i| i + 1).unwrap_or(0);
        if next < self.category_len() {
            self.current_index = Some(next);
            self.state = SessionState::AwaitingAnswer;
            let view = self
                .current_view()
                .ok_or(QuizError::InvalidState {
                    operation: "advance",
                    state: self.state,
                })?;
            Ok(Advance::Question(view))
        } else {
            // current_index se queda en la última pregunta mostrada
            self.state = SessionState::Exhausted;
            info!(
                "category {} exhausted",
                self.active_category.as_deref().unwrap_or_default()
            );
            Ok(Advance::Exhausted)
        }
    }
}
