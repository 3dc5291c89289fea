use std::fmt;

/// Stable handle of a node inside a [`StateTree`].
///
/// Handles are only meaningful for the tree that produced them. A rebuild
/// discards every handle issued by the previous tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Arena index of the node.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node #{}", self.0)
    }
}

/// Capability set the activation engine needs from a tree.
///
/// Lookups with a handle the tree does not know are tolerated: they read as
/// an inactive leaf without parent, and writes are ignored.
pub trait ActiveTree {
    /// Top-level nodes, in display order.
    fn roots(&self) -> &[NodeId];
    /// Whether the node is currently active (expanded).
    fn is_active(&self, node: NodeId) -> bool;
    /// Update the active flag of a single node.
    fn set_active(&mut self, node: NodeId, active: bool);
    /// Enclosing node, `None` at the root level.
    fn parent(&self, node: NodeId) -> Option<NodeId>;
    /// Ordered children of the node.
    fn children(&self, node: NodeId) -> &[NodeId];
    /// Identifier used for external addressing.
    fn identifier(&self, node: NodeId) -> Option<&str>;
    /// Dividers never become active.
    fn is_divider(&self, node: NodeId) -> bool;
}

/// Per-node data carried by a [`StateTree`] slot.
///
/// Implemented once for declarative items and once for caller view nodes.
pub trait NodePayload {
    /// Identifier of the node, if it has one.
    fn value(&self) -> Option<&str>;
    /// Whether the node is a divider.
    fn is_divider(&self) -> bool;
    /// Text shown for the row.
    fn label(&self) -> &str {
        ""
    }
    /// Icon name shown next to the label.
    fn icon(&self) -> Option<&str> {
        None
    }
    /// Opaque payload forwarded to the click notifier.
    fn extras(&self) -> Option<&serde_json::Value> {
        None
    }
    /// Per-node click override that replaces the notifier.
    fn click_override(&self) -> Option<&crate::ClickHandler> {
        None
    }
}

/// One arena slot of a [`StateTree`].
#[derive(Debug, Clone)]
pub struct Slot<P> {
    payload: P,
    active: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl<P> Slot<P> {
    /// Source data of the node.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Whether the node is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enclosing node.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ordered children.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-backed menu state tree.
///
/// Parents are stored as [`NodeId`]s, so ancestor walks are `O(depth)`
/// without any ownership cycle.
#[derive(Debug, Clone)]
pub struct StateTree<P> {
    slots: Vec<Slot<P>>,
    roots: Vec<NodeId>,
}

impl<P> Default for StateTree<P> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            roots: Vec::new(),
        }
    }
}

impl<P> StateTree<P> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether the handle belongs to this tree.
    pub fn contains(&self, node: NodeId) -> bool {
        node.0 < self.slots.len()
    }

    /// Slot for the handle.
    pub fn get(&self, node: NodeId) -> Option<&Slot<P>> {
        self.slots.get(node.0)
    }

    /// Payload for the handle.
    pub fn payload(&self, node: NodeId) -> Option<&P> {
        self.get(node).map(Slot::payload)
    }

    /// All node handles in insertion (depth-first) order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.slots.len()).map(NodeId)
    }

    /// Ancestors of `node`, nearest first.
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_, P> {
        Ancestors {
            tree: self,
            next: self.get(node).and_then(Slot::parent),
        }
    }

    /// Nesting level of the node, `1` for top-level nodes.
    pub fn level(&self, node: NodeId) -> usize {
        self.ancestors(node).count() + 1
    }

    /// Append a node under `parent`, or at the root level.
    pub(crate) fn insert(
        &mut self,
        payload: P,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            payload,
            active: false,
            parent,
            children: Vec::new(),
        });

        match parent.and_then(|parent| self.slots.get_mut(parent.0)) {
            Some(parent) => parent.children.push(id),
            None => self.roots.push(id),
        }

        id
    }
}

impl<P: NodePayload> StateTree<P> {
    /// First node whose identifier equals `value`, in depth-first order.
    pub fn find(&self, value: &str) -> Option<NodeId> {
        self.ids().find(|node| self.identifier(*node) == Some(value))
    }

    /// Handles of every active node, in depth-first order.
    pub fn active_nodes(&self) -> Vec<NodeId> {
        self.ids().filter(|node| self.is_active(*node)).collect()
    }
}

impl<P: NodePayload> ActiveTree for StateTree<P> {
    fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    fn is_active(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(Slot::is_active)
    }

    fn set_active(&mut self, node: NodeId, active: bool) {
        let Some(slot) = self.slots.get_mut(node.0) else {
            return;
        };
        // Dividers stay inactive whatever the caller asks for.
        slot.active = active && !slot.payload.is_divider();
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(Slot::parent)
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(Slot::children).unwrap_or_default()
    }

    fn identifier(&self, node: NodeId) -> Option<&str> {
        self.payload(node).and_then(P::value)
    }

    fn is_divider(&self, node: NodeId) -> bool {
        self.payload(node).is_some_and(P::is_divider)
    }
}

/// Iterator over the ancestors of a node.
pub struct Ancestors<'a, P> {
    tree: &'a StateTree<P>,
    next: Option<NodeId>,
}

impl<P> Iterator for Ancestors<'_, P> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.get(current).and_then(Slot::parent);
        Some(current)
    }
}
