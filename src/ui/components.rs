// Reusable UI components
// Provides common UI elements for the demo page

use eframe::egui;

/// Fill of the selected anchor-position button (blue)
pub const POSITION_ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
/// Fill of the selected submenu-side button (green)
pub const SIDE_ACCENT: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);

/// Render a button that is one choice out of a set
/// The selected choice is filled with `accent` and uses white text
pub fn choice_button(ui: &mut egui::Ui, text: &str, selected: bool, accent: egui::Color32) -> egui::Response {
    let button = if selected {
        egui::Button::new(egui::RichText::new(text).color(egui::Color32::WHITE)).fill(accent)
    } else {
        egui::Button::new(text)
    };
    ui.add(button.min_size(egui::vec2(0.0, 32.0)))
}

/// Render a section heading centered above a group of controls
pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(18.0).strong());
}
