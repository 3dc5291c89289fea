use crate::config::MenuConfig;
use crate::sync::SyncIndex;
use crate::tree::{ActiveTree, NodeId, NodePayload, StateTree};

/// Expand/collapse indicator for rows with children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    Down,
    Left,
    Right,
}

impl Chevron {
    /// Chevron for a row: down when open, pointing at the text otherwise.
    pub fn resolve(
        has_children: bool,
        active: bool,
        rtl: bool,
    ) -> Option<Self> {
        if !has_children {
            return None;
        }
        if active {
            return Some(Chevron::Down);
        }
        if rtl {
            Some(Chevron::Right)
        } else {
            Some(Chevron::Left)
        }
    }
}

/// One realized, visible row of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub node: NodeId,
    /// Nesting level, `1` for top-level rows.
    pub level: usize,
    pub label: String,
    pub icon: Option<String>,
    pub value: Option<String>,
    pub active: bool,
    pub divider: bool,
    pub has_children: bool,
    pub chevron: Option<Chevron>,
}

impl MenuRow {
    /// Class list of the row container, e.g. `item item-level-2 active`.
    pub fn class_name(&self) -> String {
        if self.divider {
            return format!("divider divider-level-{}", self.level);
        }
        if self.active {
            format!("item item-level-{} active", self.level)
        } else {
            format!("item item-level-{}", self.level)
        }
    }

    /// Class list of the row's children container.
    pub fn children_class_name(&self) -> &'static str {
        if self.active {
            "children active"
        } else {
            "children inactive"
        }
    }
}

/// Class list of the menu root container.
pub fn menu_class_name(config: &MenuConfig) -> String {
    let mut class = format!("Side-menu Side-menu-{}", config.theme);
    if config.rtl {
        class.push_str(" rtl");
    }
    class.push_str(" children active");
    class
}

/// Walk the visible part of the tree and register every realized item.
///
/// Top-level rows are always visible; children only when their parent is
/// active. Nothing here touches active flags.
pub(crate) fn realize_rows<P: NodePayload>(
    tree: &StateTree<P>,
    sync: &mut SyncIndex,
    rtl: bool,
) -> Vec<MenuRow> {
    let mut rows = Vec::with_capacity(tree.len());
    for node in tree.roots() {
        realize_node(tree, sync, rtl, *node, 1, &mut rows);
    }
    rows
}

fn realize_node<P: NodePayload>(
    tree: &StateTree<P>,
    sync: &mut SyncIndex,
    rtl: bool,
    node: NodeId,
    level: usize,
    rows: &mut Vec<MenuRow>,
) {
    let Some(slot) = tree.get(node) else {
        return;
    };
    let payload = slot.payload();
    let divider = payload.is_divider();
    let has_children = !slot.is_leaf();

    if !divider {
        if let Some(value) = payload.value().filter(|value| !value.is_empty())
        {
            sync.register(value, node);
        }
    }

    rows.push(MenuRow {
        node,
        level,
        label: payload.label().to_string(),
        icon: payload.icon().map(ToString::to_string),
        value: payload.value().map(ToString::to_string),
        active: slot.is_active(),
        divider,
        has_children,
        chevron: Chevron::resolve(has_children, slot.is_active(), rtl),
    });

    if slot.is_active() {
        for child in slot.children() {
            realize_node(tree, sync, rtl, *child, level + 1, rows);
        }
    }
}
