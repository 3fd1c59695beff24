// Application state management
// Holds the two demo settings, the sample menu, and the dropdown's own state

use serde::{Deserialize, Serialize};

use crate::state::dropdown::DropdownState;
use crate::state::menu::{build_demo_menu, MenuNode, MenuPath, DEFAULT_MENU_DEPTH};
use crate::state::position::{AnchorPosition, SubmenuSide};

/// Settings remembered between runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub position: AnchorPosition,
    pub submenu_position: SubmenuSide,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Where the dropdown popup opens relative to its trigger
    pub position: AnchorPosition,
    /// Side nested submenus fly out to
    pub submenu_position: SubmenuSide,
    /// Whether the dropdown shows its search input
    pub search_input: bool,
    /// Sample content shown by the dropdown
    pub menu_items: Vec<MenuNode>,
    /// Interaction state of the dropdown
    pub dropdown: DropdownState,
    /// Last item chosen from the dropdown
    pub last_selection: Option<MenuPath>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_menu_depth(DEFAULT_MENU_DEPTH)
    }
}

impl AppState {
    /// Create state whose sample menu recurses `depth` levels below each submenu
    pub fn with_menu_depth(depth: usize) -> Self {
        Self {
            position: AnchorPosition::default(),
            submenu_position: SubmenuSide::default(),
            search_input: true,
            menu_items: build_demo_menu(depth),
            dropdown: DropdownState::new(),
            last_selection: None,
        }
    }

    /// Set the anchor position
    /// Returns true if the value changed
    pub fn set_position(&mut self, position: AnchorPosition) -> bool {
        if self.position == position {
            return false;
        }
        tracing::info!(from = %self.position, to = %position, "Dropdown position changed");
        self.position = position;
        true
    }

    /// Set the submenu side
    /// Returns true if the value changed
    pub fn set_submenu_position(&mut self, side: SubmenuSide) -> bool {
        if self.submenu_position == side {
            return false;
        }
        tracing::info!(from = %self.submenu_position, to = %side, "Submenu position changed");
        self.submenu_position = side;
        true
    }

    /// Whether the button for `position` should be highlighted
    pub fn is_position_selected(&self, position: AnchorPosition) -> bool {
        self.position == position
    }

    /// Whether the button for `side` should be highlighted
    pub fn is_submenu_side_selected(&self, side: SubmenuSide) -> bool {
        self.submenu_position == side
    }

    /// Remember the item chosen from the dropdown
    pub fn record_selection(&mut self, path: MenuPath) {
        tracing::info!(item = path.label(), path = %path.breadcrumb(), "Menu item chosen");
        self.last_selection = Some(path);
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            position: self.position,
            submenu_position: self.submenu_position,
        }
    }

    pub fn apply_preferences(&mut self, preferences: Preferences) {
        self.position = preferences.position;
        self.submenu_position = preferences.submenu_position;
    }
}
