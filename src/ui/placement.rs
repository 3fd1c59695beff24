// Popup placement
// Where the dropdown popup and its submenus attach, as (anchor point, pivot) pairs
// for `egui::Area::fixed_pos` + `egui::Area::pivot`

use eframe::egui::{Align2, Pos2, Rect};

use crate::state::{AnchorPosition, SubmenuSide};

/// Attachment point of the main popup for a given trigger rectangle
///
/// The pivot names the corner or edge of the popup that sits on the point:
/// bottom positions hang the popup below the trigger, top positions stack it above.
pub fn popup_anchor(position: AnchorPosition, trigger: Rect) -> (Pos2, Align2) {
    match position {
        AnchorPosition::BottomLeft => (trigger.left_bottom(), Align2::LEFT_TOP),
        AnchorPosition::BottomRight => (trigger.right_bottom(), Align2::RIGHT_TOP),
        AnchorPosition::BottomCenter => (trigger.center_bottom(), Align2::CENTER_TOP),
        AnchorPosition::TopLeft => (trigger.left_top(), Align2::LEFT_BOTTOM),
        AnchorPosition::TopRight => (trigger.right_top(), Align2::RIGHT_BOTTOM),
        AnchorPosition::TopCenter => (trigger.center_top(), Align2::CENTER_BOTTOM),
    }
}

/// Attachment point of a submenu next to its parent item
pub fn submenu_anchor(side: SubmenuSide, item: Rect) -> (Pos2, Align2) {
    match side {
        SubmenuSide::Right => (item.right_top(), Align2::LEFT_TOP),
        SubmenuSide::Left => (item.left_top(), Align2::RIGHT_TOP),
    }
}
