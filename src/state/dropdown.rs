// Dropdown interaction state
// Tracks whether the popup is open, which submenus are expanded, and the search query

use crate::state::menu::{search, MenuNode, MenuPath};

/// Open/close and expansion state of one dropdown widget
///
/// `open_path` holds one child index per expanded level: `[1, 0]` means the
/// second root item is expanded and, inside it, the first item is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
    open_path: Vec<usize>,
    query: String,
    /// Matches for `query`, refreshed only when the query is edited
    hits: Vec<MenuPath>,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open_path(&self) -> &[usize] {
        &self.open_path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Items matching the query as of the last `query_changed`
    pub fn search_hits(&self) -> &[MenuPath] {
        &self.hits
    }

    /// Mutable query buffer for the search input
    /// Call `query_changed` after editing it.
    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    /// True when a non-blank search query is active
    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn open(&mut self) {
        if !self.open {
            tracing::debug!("Dropdown opened");
        }
        self.open = true;
    }

    /// Close the popup, collapsing submenus and clearing the query
    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("Dropdown closed");
        }
        self.open = false;
        self.open_path.clear();
        self.query.clear();
        self.hits.clear();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Pointer is over item `index` at nesting `level`
    /// Collapses everything deeper than `level`, then expands the item if it has children
    pub fn hover(&mut self, level: usize, index: usize, has_children: bool) {
        self.open_path.truncate(level);
        if has_children {
            self.open_path.push(index);
        }
    }

    /// The query was edited: drop expansions and search `items` again
    pub fn query_changed(&mut self, items: &[MenuNode]) {
        self.open_path.clear();
        self.hits = search(items, &self.query);
        tracing::debug!(query = %self.query, hits = self.hits.len(), "Search updated");
    }

    /// An item was chosen: close and hand the path back
    pub fn select(&mut self, path: MenuPath) -> MenuPath {
        tracing::debug!(item = %path.breadcrumb(), "Dropdown item selected");
        self.close();
        path
    }
}
