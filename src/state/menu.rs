// Menu tree model
// Sample menu content for the dropdown demo plus tree queries used by the widget

/// Default recursion depth of the generated submenus
pub const DEFAULT_MENU_DEPTH: usize = 4;

/// Children generated per level of the deep submenus
pub const BRANCHING: usize = 3;

/// Number of top-level menus, and of submenus inside each
pub const GROUP_COUNT: usize = 4;

/// A node of the menu tree
/// A node with no children is a leaf and can be selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    /// Text shown on the item
    pub label: String,
    /// Optional group heading rendered above the item
    pub label_header: Option<String>,
    /// Nested items, empty for a leaf
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Create a node with children
    pub fn branch(label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        Self {
            label: label.into(),
            label_header: None,
            children,
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.label_header = Some(header.into());
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in this subtree, counting the node itself
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(MenuNode::depth).max().unwrap_or(0)
    }

    /// Number of nodes in this subtree, counting the node itself
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(MenuNode::node_count).sum::<usize>()
    }
}

/// Labels from a root item down to a chosen item
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuPath(pub Vec<String>);

impl MenuPath {
    /// Label of the last item on the path
    pub fn label(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// Labels joined for display, e.g. `Menu 1 › Submenu 1.2`
    pub fn breadcrumb(&self) -> String {
        self.0.join(" › ")
    }
}

/// Recursively generate the nested submenus below `prefix`
///
/// Each level holds `BRANCHING` items labelled `{prefix}.{depth}.{i}`.
/// Returns `None` once `depth` exceeds `max_depth`.
pub fn generate_deep_submenu(prefix: &str, depth: usize, max_depth: usize) -> Option<Vec<MenuNode>> {
    if depth > max_depth {
        return None;
    }
    let children = (1..=BRANCHING)
        .map(|i| {
            let label = format!("{}.{}.{}", prefix, depth, i);
            let children = generate_deep_submenu(&label, depth + 1, max_depth).unwrap_or_default();
            MenuNode::branch(label, children)
        })
        .collect();
    Some(children)
}

/// Generate the submenus of top-level menu `menu_number`
pub fn generate_menu(menu_number: usize, max_depth: usize) -> Vec<MenuNode> {
    (1..=GROUP_COUNT)
        .map(|i| {
            let label = format!("Submenu {}.{}", menu_number, i);
            let children = generate_deep_submenu(&label, 1, max_depth).unwrap_or_default();
            MenuNode::branch(label, children)
        })
        .collect()
}

/// Build the full demo menu: `Menu 1` to `Menu 4`, the first one headed by a group label
pub fn build_demo_menu(max_depth: usize) -> Vec<MenuNode> {
    (1..=GROUP_COUNT)
        .map(|n| {
            let node = MenuNode::branch(format!("Menu {}", n), generate_menu(n, max_depth));
            if n == 1 {
                node.with_header("Menu Group 1")
            } else {
                node
            }
        })
        .collect()
}

/// Item lists to render for an expanded path, root list first
/// Stops following the path at an out-of-range index or a leaf
pub fn open_levels<'a>(items: &'a [MenuNode], path: &[usize]) -> Vec<&'a [MenuNode]> {
    let mut levels = vec![items];
    let mut current = items;
    for &index in path {
        match current.get(index) {
            Some(node) if !node.is_leaf() => {
                current = &node.children;
                levels.push(current);
            }
            _ => break,
        }
    }
    levels
}

/// Resolve an index path into the labels along it
/// Returns `None` if any index is out of range
pub fn resolve(items: &[MenuNode], path: &[usize]) -> Option<MenuPath> {
    let mut labels = Vec::with_capacity(path.len());
    let mut current = items;
    for &index in path {
        let node = current.get(index)?;
        labels.push(node.label.clone());
        current = &node.children;
    }
    Some(MenuPath(labels))
}

/// Find every item whose label contains `query`, ignoring case
/// Results are in depth-first tree order. A blank query matches nothing.
pub fn search(items: &[MenuNode], query: &str) -> Vec<MenuPath> {
    let needle = query.trim().to_lowercase();
    let mut hits = Vec::new();
    if needle.is_empty() {
        return hits;
    }
    let mut trail = Vec::new();
    collect_matches(items, &needle, &mut trail, &mut hits);
    hits
}

fn collect_matches(items: &[MenuNode], needle: &str, trail: &mut Vec<String>, hits: &mut Vec<MenuPath>) {
    for node in items {
        trail.push(node.label.clone());
        if node.label.to_lowercase().contains(needle) {
            hits.push(MenuPath(trail.clone()));
        }
        collect_matches(&node.children, needle, trail, hits);
        trail.pop();
    }
}
