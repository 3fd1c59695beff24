// State management module
// Page settings, the sample menu tree, and dropdown interaction state

pub mod app_state;
pub mod dropdown;
pub mod menu;
pub mod position;

pub use app_state::{AppState, Preferences};
pub use dropdown::DropdownState;
pub use menu::{MenuNode, MenuPath};
pub use position::{AnchorPosition, SubmenuSide};
