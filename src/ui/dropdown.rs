// Multi-level dropdown widget
// Trigger button plus an anchored popup with cascading submenus and optional search

use eframe::egui;

use crate::state::menu::{open_levels, resolve};
use crate::state::{AnchorPosition, DropdownState, MenuNode, MenuPath, SubmenuSide};
use crate::ui::placement::{popup_anchor, submenu_anchor};

/// Minimum width of the popup and of each submenu
const MENU_WIDTH: f32 = 200.0;
/// Height cap of the search result list
const SEARCH_RESULTS_HEIGHT: f32 = 280.0;

/// What one rendered menu level reported back
#[derive(Default)]
struct LevelOutput {
    /// Screen rectangle of every item, by index
    item_rects: Vec<egui::Rect>,
    /// Index of a leaf clicked this frame
    clicked_leaf: Option<usize>,
}

/// A dropdown showing a tree of `MenuNode`s
///
/// Build it each frame with the current props and call [`Dropdown::show`]
/// with the persistent [`DropdownState`]. Hovering an item that has children
/// opens its submenu on the configured side; clicking a leaf selects it.
pub struct Dropdown<'a> {
    id: egui::Id,
    label: &'a str,
    menu_items: &'a [MenuNode],
    position: AnchorPosition,
    submenu_position: SubmenuSide,
    search_input: bool,
}

impl<'a> Dropdown<'a> {
    pub fn new(id_source: impl std::hash::Hash, label: &'a str, menu_items: &'a [MenuNode]) -> Self {
        Self {
            id: egui::Id::new(id_source),
            label,
            menu_items,
            position: AnchorPosition::default(),
            submenu_position: SubmenuSide::default(),
            search_input: false,
        }
    }

    pub fn position(mut self, position: AnchorPosition) -> Self {
        self.position = position;
        self
    }

    pub fn submenu_position(mut self, side: SubmenuSide) -> Self {
        self.submenu_position = side;
        self
    }

    pub fn search_input(mut self, enabled: bool) -> Self {
        self.search_input = enabled;
        self
    }

    /// Render the trigger and, when open, the popup and its submenus
    /// Returns the path of an item chosen this frame
    pub fn show(self, ui: &mut egui::Ui, state: &mut DropdownState) -> Option<MenuPath> {
        // caret points the way the popup opens, and flips once it is open
        let caret = if state.is_open() != self.position.opens_upward() { "▲" } else { "▼" };
        let trigger = ui.add(
            egui::Button::new(egui::RichText::new(format!("{}  {}", self.label, caret)).size(16.0))
                .min_size(egui::vec2(160.0, 36.0)),
        );
        if trigger.clicked() {
            state.toggle();
        }
        if !state.is_open() {
            return None;
        }

        let ctx = ui.ctx().clone();
        let mut popup_rects = Vec::new();
        let mut selected = None;

        // Root popup: search box, then either search hits or the first menu level
        let (point, pivot) = popup_anchor(self.position, trigger.rect);
        let root = egui::Area::new(self.id.with("level_0"))
            .order(egui::Order::Foreground)
            .fixed_pos(point)
            .pivot(pivot)
            .show(&ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .show(ui, |ui| {
                        ui.set_min_width(MENU_WIDTH);
                        if self.search_input {
                            let edit = ui.add(
                                egui::TextEdit::singleline(state.query_mut())
                                    .hint_text("Search...")
                                    .desired_width(MENU_WIDTH),
                            );
                            if edit.changed() {
                                state.query_changed(self.menu_items);
                            }
                            ui.separator();
                        }
                        if self.search_input && state.is_searching() {
                            selected = self.render_search_results(ui, state.search_hits());
                            LevelOutput::default()
                        } else {
                            self.render_level(ui, state, 0, self.menu_items)
                        }
                    })
                    .inner
            });
        popup_rects.push(root.response.rect);

        let mut output = root.inner;
        let mut level = 0;
        loop {
            if let Some(index) = output.clicked_leaf {
                let mut path = state.open_path()[..level.min(state.open_path().len())].to_vec();
                path.push(index);
                selected = resolve(self.menu_items, &path);
                break;
            }

            // Submenu of the expanded item at this level, if any
            let levels = open_levels(self.menu_items, state.open_path());
            let Some(&index) = state.open_path().get(level) else {
                break;
            };
            let (Some(&items), Some(&item_rect)) = (levels.get(level + 1), output.item_rects.get(index)) else {
                break;
            };

            level += 1;
            let (point, pivot) = submenu_anchor(self.submenu_position, item_rect);
            let submenu = egui::Area::new(self.id.with(("level", level)))
                .order(egui::Order::Foreground)
                .fixed_pos(point)
                .pivot(pivot)
                .show(&ctx, |ui| {
                    egui::Frame::popup(ui.style())
                        .show(ui, |ui| {
                            ui.set_min_width(MENU_WIDTH);
                            self.render_level(ui, state, level, items)
                        })
                        .inner
                });
            popup_rects.push(submenu.response.rect);
            output = submenu.inner;
        }

        if let Some(path) = selected {
            return Some(state.select(path));
        }

        let clicked_outside = ctx.input(|i| {
            i.pointer.any_click()
                && i.pointer.interact_pos().is_some_and(|pos| {
                    !trigger.rect.contains(pos) && !popup_rects.iter().any(|r| r.contains(pos))
                })
        });
        if clicked_outside {
            state.close();
        }
        None
    }

    /// Render one list of items at nesting `level`
    fn render_level(
        &self,
        ui: &mut egui::Ui,
        state: &mut DropdownState,
        level: usize,
        items: &[MenuNode],
    ) -> LevelOutput {
        let expanded = state.open_path().get(level).copied();
        let mut output = LevelOutput::default();

        ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
            for (index, node) in items.iter().enumerate() {
                if let Some(header) = &node.label_header {
                    ui.add_space(2.0);
                    ui.label(egui::RichText::new(header).small().strong().weak());
                }

                let response = ui.selectable_label(expanded == Some(index), self.item_text(node));
                if response.hovered() {
                    state.hover(level, index, !node.is_leaf());
                }
                if response.clicked() && node.is_leaf() {
                    output.clicked_leaf = Some(index);
                }
                output.item_rects.push(response.rect);
            }
        });

        output
    }

    /// Flat list of search hits, shown as breadcrumbs
    /// Only the rows scrolled into view are laid out.
    fn render_search_results(&self, ui: &mut egui::Ui, hits: &[MenuPath]) -> Option<MenuPath> {
        if hits.is_empty() {
            ui.label(egui::RichText::new("No matches").italics().weak());
            return None;
        }

        let mut chosen = None;
        let row_height = ui.spacing().interact_size.y;
        egui::ScrollArea::vertical()
            .id_source(self.id.with("search_results"))
            .max_height(SEARCH_RESULTS_HEIGHT)
            .show_rows(ui, row_height, hits.len(), |ui, rows| {
                ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
                    for hit in &hits[rows] {
                        if ui.selectable_label(false, hit.breadcrumb()).clicked() {
                            chosen = Some(hit.clone());
                        }
                    }
                });
            });
        chosen
    }

    /// Item caption with an arrow on the side its submenu opens
    fn item_text(&self, node: &MenuNode) -> String {
        if node.is_leaf() {
            return node.label.clone();
        }
        let arrow = self.submenu_position.arrow();
        match self.submenu_position {
            SubmenuSide::Left => format!("{}  {}", arrow, node.label),
            SubmenuSide::Right => format!("{}  {}", node.label, arrow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::menu::build_demo_menu;
    use crate::ui::test_input::{click_at, pointer_moved, run_frame, text_rect};

    fn frame(
        ctx: &egui::Context,
        menu: &[MenuNode],
        state: &mut DropdownState,
        search_input: bool,
        events: Vec<egui::Event>,
    ) -> (egui::FullOutput, Option<MenuPath>) {
        let mut selection = None;
        let output = run_frame(ctx, events, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                selection = Dropdown::new("t", "Main Menu", menu)
                    .search_input(search_input)
                    .show(ui, &mut *state);
            });
        });
        (output, selection)
    }

    /// A few idle frames so newly opened popups are laid out and painted
    fn settle(
        ctx: &egui::Context,
        menu: &[MenuNode],
        state: &mut DropdownState,
        search_input: bool,
    ) -> egui::FullOutput {
        let mut output = frame(ctx, menu, state, search_input, Vec::new()).0;
        for _ in 0..2 {
            output = frame(ctx, menu, state, search_input, Vec::new()).0;
        }
        output
    }

    fn click(
        ctx: &egui::Context,
        menu: &[MenuNode],
        state: &mut DropdownState,
        search_input: bool,
        pos: egui::Pos2,
    ) -> Option<MenuPath> {
        let mut selection = None;
        for events in click_at(pos) {
            let (_, chosen) = frame(ctx, menu, state, search_input, events);
            selection = selection.or(chosen);
        }
        selection
    }

    #[test]
    fn test_item_text_arrows() {
        let menu = build_demo_menu(1);
        let leaf = &menu[0].children[0].children[0];

        let right = Dropdown::new("t", "Main Menu", &menu).submenu_position(SubmenuSide::Right);
        assert_eq!(right.item_text(&menu[0]), "Menu 1  ▶");
        assert_eq!(right.item_text(leaf), "Submenu 1.1.1.1");

        let left = Dropdown::new("t", "Main Menu", &menu).submenu_position(SubmenuSide::Left);
        assert_eq!(left.item_text(&menu[0]), "◀  Menu 1");
    }

    #[test]
    fn test_builder_props() {
        let menu = build_demo_menu(1);
        let dropdown = Dropdown::new("t", "Main Menu", &menu)
            .position(AnchorPosition::TopCenter)
            .submenu_position(SubmenuSide::Left)
            .search_input(true);
        assert_eq!(dropdown.label, "Main Menu");
        assert_eq!(dropdown.position, AnchorPosition::TopCenter);
        assert_eq!(dropdown.submenu_position, SubmenuSide::Left);
        assert!(dropdown.search_input);
        assert_eq!(dropdown.menu_items.len(), 4);
    }

    #[test]
    fn test_closed_dropdown_renders_only_trigger() {
        let menu = build_demo_menu(2);
        let mut state = DropdownState::new();
        let ctx = egui::Context::default();
        let mut selection = Some(MenuPath::default());
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                selection = Dropdown::new("t", "Main Menu", &menu).show(ui, &mut state);
            });
        });
        assert!(selection.is_none());
        assert!(!state.is_open());
    }

    #[test]
    fn test_open_dropdown_keeps_state_without_input() {
        let menu = build_demo_menu(2);
        let mut state = DropdownState::new();
        state.open();
        state.hover(0, 1, true);
        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    Dropdown::new("t", "Main Menu", &menu)
                        .search_input(true)
                        .show(ui, &mut state);
                });
            });
        }
        assert!(state.is_open());
        assert_eq!(state.open_path(), &[1]);
    }

    #[test]
    fn test_hover_opens_submenu_and_leaf_click_selects() {
        let menu = build_demo_menu(1);
        let ctx = egui::Context::default();
        let mut state = DropdownState::new();
        state.open();
        state.hover(0, 0, true);

        let output = settle(&ctx, &menu, &mut state, false);
        let branch = text_rect(&output, "Submenu 1.1  ▶").expect("level 1 painted");
        frame(&ctx, &menu, &mut state, false, pointer_moved(branch.center()));
        assert_eq!(state.open_path(), &[0, 0]);

        let output = settle(&ctx, &menu, &mut state, false);
        let leaf = text_rect(&output, "Submenu 1.1.1.1").expect("level 2 painted");
        let selection = click(&ctx, &menu, &mut state, false, leaf.center());

        assert_eq!(
            selection.map(|path| path.breadcrumb()),
            Some("Menu 1 › Submenu 1.1 › Submenu 1.1.1.1".to_string())
        );
        assert!(!state.is_open());
    }

    #[test]
    fn test_hover_switches_between_root_items() {
        let menu = build_demo_menu(1);
        let ctx = egui::Context::default();
        let mut state = DropdownState::new();
        state.open();

        // Menu 1 sits below the "Menu Group 1" header
        let output = settle(&ctx, &menu, &mut state, false);
        assert!(text_rect(&output, "Menu Group 1").is_some());
        let second = text_rect(&output, "Menu 2  ▶").expect("root level painted");
        frame(&ctx, &menu, &mut state, false, pointer_moved(second.center()));
        assert_eq!(state.open_path(), &[1]);

        let output = settle(&ctx, &menu, &mut state, false);
        assert!(text_rect(&output, "Submenu 2.1  ▶").is_some());
        assert!(text_rect(&output, "Submenu 1.1  ▶").is_none());
    }

    #[test]
    fn test_trigger_opens_and_click_outside_closes() {
        let menu = build_demo_menu(1);
        let ctx = egui::Context::default();
        let mut state = DropdownState::new();

        let output = settle(&ctx, &menu, &mut state, true);
        let trigger = text_rect(&output, "Main Menu  ▼").expect("trigger painted");
        assert!(click(&ctx, &menu, &mut state, true, trigger.center()).is_none());
        assert!(state.is_open());

        settle(&ctx, &menu, &mut state, true);
        assert!(state.is_open());

        let far_away = egui::pos2(1150.0, 780.0);
        assert!(click(&ctx, &menu, &mut state, true, far_away).is_none());
        assert!(!state.is_open());
    }

    #[test]
    fn test_search_hit_click_selects() {
        let menu = build_demo_menu(1);
        let ctx = egui::Context::default();
        let mut state = DropdownState::new();
        state.open();
        state.query_mut().push_str("1.1.1.2");
        state.query_changed(&menu);

        let output = settle(&ctx, &menu, &mut state, true);
        // cached hits are not recomputed or dropped by idle frames
        assert_eq!(state.search_hits().len(), 1);
        let hit = text_rect(&output, "Menu 1 › Submenu 1.1 › Submenu 1.1.1.2").expect("hit painted");
        let selection = click(&ctx, &menu, &mut state, true, hit.center());

        assert_eq!(
            selection.map(|path| path.breadcrumb()),
            Some("Menu 1 › Submenu 1.1 › Submenu 1.1.1.2".to_string())
        );
        assert!(!state.is_open());
        assert!(state.search_hits().is_empty());
    }

    #[test]
    fn test_large_result_list_lays_out_visible_rows_only() {
        let menu = build_demo_menu(4);
        let ctx = egui::Context::default();
        let mut state = DropdownState::new();
        state.open();
        state.query_mut().push_str("sub");
        state.query_changed(&menu);
        assert_eq!(state.search_hits().len(), 16 * (1 + 3 + 9 + 27 + 81));

        let output = settle(&ctx, &menu, &mut state, true);
        assert_eq!(state.search_hits().len(), 16 * (1 + 3 + 9 + 27 + 81));
        assert!(text_rect(&output, "Menu 1 › Submenu 1.1").is_some());
        assert!(text_rect(&output, "Menu 4 › Submenu 4.4").is_none());
    }
}
