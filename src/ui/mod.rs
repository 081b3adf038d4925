mod helpers;
pub mod layout;
pub mod views;

use crate::app::{Preferences, QuizApp};
use eframe::{APP_KEY, App, CreationContext, Frame, get_value, set_value};
use egui::{Context, Visuals};
use layout::{bottom_panel, top_panel};

impl QuizApp {
    /// Recupera nombre y tema guardados por eframe (si los hay).
    pub fn restore_preferences(&mut self, cc: &CreationContext<'_>) {
        if let Some(storage) = cc.storage {
            if let Some(prefs) = get_value::<Preferences>(storage, APP_KEY) {
                // El nombre de QUIZ_PLAYER_NAME tiene prioridad
                if self.prefs.player_name.is_empty() {
                    self.prefs.player_name = prefs.player_name;
                }
                self.prefs.dark_mode = prefs.dark_mode;
            }
        }
        cc.egui_ctx.set_visuals(if self.prefs.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });
    }
}

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTONES DE CATEGORÍA
        top_panel(self, ctx);

        // MARCADOR Y TEMA
        bottom_panel(self, ctx);

        views::quiz::ui_quiz(self, ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
