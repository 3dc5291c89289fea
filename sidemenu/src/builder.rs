use serde_json::Value;

use crate::dispatch::ClickHandler;
use crate::engine::activate_path;
use crate::model::MenuNode;
use crate::tree::{NodeId, NodePayload, StateTree};

/// Slot payload for trees built from declarative [`MenuNode`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPayload {
    label: String,
    value: String,
    icon: Option<String>,
    extras: Option<Value>,
    divider: bool,
    on_click: Option<ClickHandler>,
}

impl ItemPayload {
    fn from_node(node: &MenuNode) -> Self {
        match node {
            MenuNode::Item(item) => Self {
                label: item.label.clone(),
                value: item.value.clone(),
                icon: item.icon.clone(),
                extras: item.extras.clone(),
                divider: false,
                on_click: item.on_click.clone(),
            },
            MenuNode::Divider(divider) => Self {
                label: divider.label.clone(),
                value: divider.value.clone(),
                icon: None,
                extras: None,
                divider: true,
                on_click: None,
            },
        }
    }
}

impl NodePayload for ItemPayload {
    fn value(&self) -> Option<&str> {
        Some(&self.value)
    }

    fn is_divider(&self) -> bool {
        self.divider
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    fn extras(&self) -> Option<&Value> {
        self.extras.as_ref()
    }

    fn click_override(&self) -> Option<&ClickHandler> {
        self.on_click.as_ref()
    }
}

/// Caller-owned view node the menu can build a state tree from.
///
/// View nodes are addressed by position; `value` is only needed for
/// matching the active identifier and for external sync.
pub trait ViewNode {
    /// Identifier declared by the node.
    fn value(&self) -> Option<&str>;
    /// Nested view nodes.
    fn children(&self) -> Option<&[Self]>
    where
        Self: Sized;
    /// Whether the node renders as a divider.
    fn is_divider(&self) -> bool {
        false
    }
    /// The node's own click handler, replacing the menu notifier.
    fn on_click(&self) -> Option<ClickHandler> {
        None
    }
    /// Opaque payload forwarded to the menu notifier.
    fn extras(&self) -> Option<&Value> {
        None
    }
}

/// Slot payload for trees built from caller [`ViewNode`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPayload {
    path: Vec<usize>,
    value: Option<String>,
    extras: Option<Value>,
    divider: bool,
    on_click: Option<ClickHandler>,
}

impl ViewPayload {
    /// Position of the source node: child indices from the root level.
    pub fn path(&self) -> &[usize] {
        &self.path
    }
}

impl NodePayload for ViewPayload {
    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn is_divider(&self) -> bool {
        self.divider
    }

    fn extras(&self) -> Option<&Value> {
        self.extras.as_ref()
    }

    fn click_override(&self) -> Option<&ClickHandler> {
        self.on_click.as_ref()
    }
}

/// Build a state tree from declarative items.
///
/// The node whose value equals `active` is opened together with its
/// ancestor chain, so a preselected item is visible before any click.
pub fn build_items(
    nodes: &[MenuNode],
    active: Option<&str>,
) -> StateTree<ItemPayload> {
    let mut tree = StateTree::new();
    append_items(&mut tree, nodes, None, active);
    tree
}

fn append_items(
    tree: &mut StateTree<ItemPayload>,
    nodes: &[MenuNode],
    parent: Option<NodeId>,
    active: Option<&str>,
) {
    for node in nodes {
        let id = tree.insert(ItemPayload::from_node(node), parent);
        if !node.is_divider() && active == Some(node.value()) {
            activate_path(tree, id);
        }
        append_items(tree, node.children(), Some(id), active);
    }
}

/// Build a state tree from caller view nodes.
pub fn build_view_nodes<V: ViewNode>(
    nodes: &[V],
    active: Option<&str>,
) -> StateTree<ViewPayload> {
    let mut tree = StateTree::new();
    let mut path = Vec::new();
    append_view_nodes(&mut tree, nodes, None, &mut path, active);
    tree
}

fn append_view_nodes<V: ViewNode>(
    tree: &mut StateTree<ViewPayload>,
    nodes: &[V],
    parent: Option<NodeId>,
    path: &mut Vec<usize>,
    active: Option<&str>,
) {
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        let payload = ViewPayload {
            path: path.clone(),
            value: node.value().map(ToString::to_string),
            extras: node.extras().cloned(),
            divider: node.is_divider(),
            on_click: node.on_click(),
        };
        let id = tree.insert(payload, parent);
        if !node.is_divider() && active.is_some() && node.value() == active {
            activate_path(tree, id);
        }
        if let Some(children) = node.children() {
            append_view_nodes(tree, children, Some(id), path, active);
        }
        path.pop();
    }
}
