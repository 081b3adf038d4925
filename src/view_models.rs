// src/view_models.rs

use crate::model::SessionState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: String,
    pub active: bool,
}

impl CategoryInfo {
    /// Etiqueta del botón: "Football", "History"…
    pub fn label(&self) -> String {
        capitalize(&self.id)
    }
}

/// Qué controles están habilitados. Se deriva siempre del estado de la sesión.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub options_enabled: bool,
    pub submit_enabled: bool,
    pub next_enabled: bool,
}

impl Controls {
    pub fn derive(state: SessionState, has_choice: bool) -> Self {
        let awaiting = state == SessionState::AwaitingAnswer;
        Self {
            options_enabled: awaiting,
            submit_enabled: awaiting && has_choice,
            next_enabled: state == SessionState::Answered,
        }
    }
}

pub fn quiz_heading(category: Option<&str>) -> String {
    match category {
        Some(id) => format!("The {id} Quiz"),
        None => "Pick a quiz".to_string(),
    }
}

pub fn question_label(number: usize) -> String {
    format!("Question {number}")
}

pub fn correct_message(name: &str) -> String {
    format!("That's correct, {name}!")
}

pub fn incorrect_message(name: &str, correct_answer: &str) -> String {
    format!("I'm afraid not, {name} - the correct answer is \"{correct_answer}\".")
}

pub fn exhausted_message(name: &str) -> String {
    format!(
        "Sorry, {name}! There are no more questions in this quiz. Why not try another category?"
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_follow_state() {
        let idle = Controls::derive(SessionState::Idle, true);
        assert!(!idle.options_enabled && !idle.submit_enabled && !idle.next_enabled);

        let waiting = Controls::derive(SessionState::AwaitingAnswer, false);
        assert!(waiting.options_enabled);
        assert!(!waiting.submit_enabled);
        assert!(Controls::derive(SessionState::AwaitingAnswer, true).submit_enabled);

        let answered = Controls::derive(SessionState::Answered, true);
        assert!(!answered.options_enabled && !answered.submit_enabled);
        assert!(answered.next_enabled);

        let done = Controls::derive(SessionState::Exhausted, true);
        assert_eq!(
            done,
            Controls {
                options_enabled: false,
                submit_enabled: false,
                next_enabled: false,
            }
        );
    }

    #[test]
    fn feedback_texts() {
        assert_eq!(correct_message("Anonymous"), "That's correct, Anonymous!");
        assert_eq!(
            incorrect_message("Mary", "Aston Villa"),
            "I'm afraid not, Mary - the correct answer is \"Aston Villa\"."
        );
        assert!(exhausted_message("Mary").starts_with("Sorry, Mary! There are no more questions"));
    }

    #[test]
    fn headings_and_labels() {
        assert_eq!(quiz_heading(Some("football")), "The football Quiz");
        assert_eq!(question_label(3), "Question 3");
        let info = CategoryInfo {
            id: "literature".into(),
            active: false,
        };
        assert_eq!(info.label(), "Literature");
    }
}
