// UI module
// Contains the page layout, the dropdown widget, and shared components

pub mod components;
pub mod dropdown;
pub mod layout;
pub mod placement;

#[cfg(test)]
pub(crate) mod test_input;

pub use layout::render_app_layout;
