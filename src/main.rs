// Multilabel DropDown - Main Entry Point
// Native demo page for a multi-level dropdown widget

mod config;
mod error;
mod state;
mod ui;

use config::Config;
use eframe::egui;
use state::{AppState, MenuNode, Preferences};
use tracing_subscriber::EnvFilter;
use ui::render_app_layout;

/// Storage key of the remembered dropdown settings
const PREFERENCES_KEY: &str = "preferences";

fn main() -> eframe::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    tracing::info!(?config, "Starting Multilabel DropDown demo");

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Multilabel DropDown")
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([640.0, 560.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Multilabel DropDown",
        options,
        Box::new(move |cc| Box::new(DropdownDemoApp::new(cc.storage, &config))),
    )
}

/// Main application struct
/// Owns the page state and persists the chosen dropdown settings
struct DropdownDemoApp {
    state: AppState,
}

impl DropdownDemoApp {
    /// Create the application from remembered preferences and the startup configuration
    /// Values set in the configuration win over remembered ones
    fn new(storage: Option<&dyn eframe::Storage>, config: &Config) -> Self {
        let mut state = AppState::with_menu_depth(config.menu_depth);
        state.search_input = config.search_input;
        tracing::info!(
            groups = state.menu_items.len(),
            depth = state.menu_items.iter().map(MenuNode::depth).max().unwrap_or(0),
            nodes = state.menu_items.iter().map(MenuNode::node_count).sum::<usize>(),
            "Demo menu built"
        );

        if let Some(preferences) = storage.and_then(|s| eframe::get_value::<Preferences>(s, PREFERENCES_KEY)) {
            tracing::debug!(?preferences, "Restored preferences");
            state.apply_preferences(preferences);
        }
        if let Some(position) = config.position {
            state.position = position;
        }
        if let Some(side) = config.submenu_position {
            state.submenu_position = side;
        }

        Self { state }
    }
}

impl eframe::App for DropdownDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        render_app_layout(ctx, &mut self.state);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, PREFERENCES_KEY, &self.state.preferences());
    }
}
