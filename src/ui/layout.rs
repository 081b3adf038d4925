use egui::{Button, Context, Ui, Visuals};

use super::helpers::category_button;
use super::views::scoreboard::scoreboard;
use crate::QuizApp;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("category_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label("Choose a quiz:");
            let mut clicked = None;
            for info in app.category_infos() {
                if category_button(ui, info.label(), info.active) {
                    clicked = Some(info.id);
                }
            }
            if let Some(id) = clicked {
                app.select_category(&id);
                ctx.request_repaint();
            }

            ui.separator();
            ui.label("Your name:");
            ui.add(
                egui::TextEdit::singleline(&mut app.prefs.player_name)
                    .hint_text("Anonymous")
                    .desired_width(140.0),
            );
        });
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        scoreboard(ui, &app.scores());

        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                    app.prefs.dark_mode = true;
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                    app.prefs.dark_mode = false;
                }
            },
        );
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Cada uno con su propio `enabled`. Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_enabled_ui(left.1, |ui| {
                ui.add_sized([btn_w, 36.0], Button::new(left.0)).clicked()
            })
            .inner;
        clicked_right = ui
            .add_enabled_ui(right.1, |ui| {
                ui.add_sized([btn_w, 36.0], Button::new(right.0)).clicked()
            })
            .inner;
    });
    (clicked_left, clicked_right)
}
