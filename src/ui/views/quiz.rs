use egui::{CentralPanel, Context, RichText};

use crate::QuizApp;
use crate::ui::layout::two_button_row;
use crate::view_models::{question_label, quiz_heading};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 560.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 320.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 2.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(quiz_heading(app.session.active_category()));
                    ui.label(question_label(app.session.question_number()));
                    ui.add_space(10.0);
                });

                let controls = app.controls();

                // Pregunta y opciones (bloqueadas una vez respondida)
                if let Some(question) = app.session.current_question().cloned() {
                    ui.label(RichText::new(question.prompt()).size(18.0));
                    ui.add_space(6.0);

                    let mut picked = None;
                    ui.add_enabled_ui(controls.options_enabled, |ui| {
                        for option in question.options() {
                            let checked = app.selected_choice.as_deref() == Some(option.as_str());
                            if ui.radio(checked, option).clicked() {
                                picked = Some(option.clone());
                            }
                        }
                    });
                    if let Some(option) = picked {
                        app.choose(&option);
                    }
                }

                ui.add_space(12.0);
                let (submit, next) = two_button_row(
                    ui,
                    panel_width,
                    ("Submit Answer", controls.submit_enabled),
                    ("Next Question", controls.next_enabled),
                );
                if submit {
                    app.submit_selected();
                }
                if next {
                    app.next_question();
                }

                ui.add_space(8.0);
                if !app.message.is_empty() {
                    ui.label(&app.message);
                }
            });

        ui.add_space(extra_space / 2.0);
    });
}
