use log::warn;

use super::*;
use crate::view_models::{correct_message, incorrect_message};

impl QuizApp {
    /// Radio button marcado. Sólo tiene efecto mientras se espera respuesta.
    pub fn choose(&mut self, option: &str) {
        if self.controls().options_enabled {
            self.selected_choice = Some(option.to_string());
        }
    }

    /// Botón "Submit Answer".
    pub fn submit_selected(&mut self) {
        let Some(choice) = self.selected_choice.clone() else {
            self.message = "Choose an answer before submitting.".into();
            return;
        };

        match self.session.submit_answer(&choice) {
            Ok(outcome) => {
                let name = self.player_name();
                self.message = if outcome.correct {
                    correct_message(name)
                } else {
                    incorrect_message(name, &outcome.correct_answer)
                };
            }
            Err(e) => {
                warn!("answer rejected: {e}");
                self.message = e.to_string();
            }
        }
    }
}
