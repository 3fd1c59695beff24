// Main application layout
// Handles the menu bar and the demo page: position controls, the dropdown, the repo link

use eframe::egui;

use crate::state::{AnchorPosition, AppState, SubmenuSide};
use crate::ui::components::*;
use crate::ui::dropdown::Dropdown;

/// Link shown at the bottom of the page
const REPO_URL: &str = "https://github.com/";

/// Render the main application layout
pub fn render_app_layout(ctx: &egui::Context, state: &mut AppState) {
    render_menu_bar(ctx);

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(egui::RichText::new("Multilabel DropDown").size(32.0).strong());
            ui.add_space(8.0);
            ui.label(egui::RichText::new("🦀 Rust + egui").size(20.0));
            ui.add_space(32.0);

            render_position_controls(ui, state);
            ui.add_space(20.0);
            render_submenu_controls(ui, state);
            ui.add_space(40.0);

            render_dropdown(ui, state);
            ui.add_space(16.0);
            render_selection(ui, state);

            ui.add_space(24.0);
            ui.hyperlink_to("go to github repo", REPO_URL);
        });
    });
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    ctx.set_visuals(if dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    });
                }
            });
        });
    });
}

/// Render the six anchor-position buttons
fn render_position_controls(ui: &mut egui::Ui, state: &mut AppState) {
    section_heading(ui, "Set Dropdown Position");
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
        for position in AnchorPosition::ALL {
            let selected = state.is_position_selected(position);
            if choice_button(ui, &position.caption(), selected, POSITION_ACCENT).clicked() {
                state.set_position(position);
            }
        }
    });
}

/// Render the left/right submenu buttons
fn render_submenu_controls(ui: &mut egui::Ui, state: &mut AppState) {
    section_heading(ui, "Set Submenu Position");
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(20.0, 12.0);
        for side in SubmenuSide::ALL {
            let selected = state.is_submenu_side_selected(side);
            if choice_button(ui, &side.caption(), selected, SIDE_ACCENT).clicked() {
                state.set_submenu_position(side);
            }
        }
    });
}

/// Render the demo dropdown and record anything chosen from it
fn render_dropdown(ui: &mut egui::Ui, state: &mut AppState) {
    let chosen = Dropdown::new("main_menu", "Main Menu", &state.menu_items)
        .position(state.position)
        .submenu_position(state.submenu_position)
        .search_input(state.search_input)
        .show(ui, &mut state.dropdown);

    if let Some(path) = chosen {
        state.record_selection(path);
    }
}

/// Render the last chosen item
fn render_selection(ui: &mut egui::Ui, state: &AppState) {
    match &state.last_selection {
        Some(path) => {
            ui.label(egui::RichText::new(format!("Selected: {}", path.breadcrumb())).size(14.0));
        }
        None => {
            ui.label(egui::RichText::new("Nothing selected yet").italics().weak().size(14.0));
        }
    }
}
