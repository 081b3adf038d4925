use log::warn;

use super::*;
use crate::model::Advance;
use crate::view_models::exhausted_message;

impl QuizApp {
    /// Botón de categoría. Volver a pulsar la misma categoría la reinicia desde
    /// la pregunta 1.
    pub fn select_category(&mut self, category_id: &str) {
        match self.session.start_category(category_id) {
            Ok(Advance::Question(_)) => {
                self.selected_choice = None;
                self.message.clear();
            }
            Ok(Advance::Exhausted) => {
                self.selected_choice = None;
                self.message = exhausted_message(self.player_name());
            }
            Err(e) => {
                warn!("could not start category {category_id}: {e}");
                self.message = e.to_string();
            }
        }
    }

    /// Botón "Next Question".
    pub fn next_question(&mut self) {
        match self.session.advance() {
            Ok(Advance::Question(_)) => {
                self.selected_choice = None;
                self.message.clear();
            }
            Ok(Advance::Exhausted) => {
                self.selected_choice = None;
                self.message = exhausted_message(self.player_name());
            }
            Err(e) => {
                warn!("next question rejected: {e}");
                self.message = e.to_string();
            }
        }
    }
}
