// src/ui/helpers.rs
use egui::{Button, RichText, Ui};

/// Botón de categoría; la activa se marca en negrita.
pub fn category_button(ui: &mut Ui, label: String, active: bool) -> bool {
    let text = if active {
        RichText::new(label).strong()
    } else {
        RichText::new(label)
    };
    ui.add(Button::new(text).selected(active)).clicked()
}
