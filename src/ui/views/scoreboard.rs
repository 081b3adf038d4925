use egui::{Grid, Ui};

use crate::model::ScoreSnapshot;

/// Marcador: categoría actual y total de la sesión.
pub fn scoreboard(ui: &mut Ui, scores: &ScoreSnapshot) {
    Grid::new("scoreboard_grid")
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label("");
            ui.label("Correct");
            ui.label("Incorrect");
            ui.end_row();

            ui.label("This quiz");
            ui.label(scores.category_correct.to_string());
            ui.label(scores.category_incorrect.to_string());
            ui.end_row();

            ui.label("All quizzes");
            ui.label(scores.total_correct.to_string());
            ui.label(scores.total_incorrect.to_string());
            ui.end_row();
        });
}
