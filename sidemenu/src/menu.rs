use serde_json::Value;

use crate::builder::{
    ItemPayload, ViewNode, ViewPayload, build_items, build_view_nodes,
};
use crate::config::MenuConfig;
use crate::dispatch::{ClickDispatch, ClickNotifier, DispatchRequest, dispatch};
use crate::engine::{self, Transition};
use crate::errors::MenuError;
use crate::model::MenuNode;
use crate::rows::{MenuRow, realize_rows};
use crate::sync::SyncIndex;
use crate::tree::{ActiveTree, NodeId, NodePayload, StateTree};

/// Menu built from declarative [`MenuNode`]s.
pub type SideMenu = Menu<ItemPayload>;

/// Menu built from caller [`ViewNode`]s.
pub type ViewMenu = Menu<ViewPayload>;

/// Props a view-node menu hands back to each realized view node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectedProps {
    pub node: NodeId,
    pub active: bool,
    /// Nesting level, `1` for top-level nodes.
    pub level: usize,
    pub rtl: bool,
}

/// Owner of a menu state tree and the entry points that mutate it.
///
/// Every mutation goes through `&mut self` and completes before returning.
/// [`Menu::realize`] is the render pass: it reads the tree and feeds the
/// external-sync index, never the other way around.
#[derive(Debug)]
pub struct Menu<P> {
    tree: StateTree<P>,
    config: MenuConfig,
    sync: SyncIndex,
    active_item: Option<String>,
    desired_item: Option<String>,
    notifier: Option<ClickNotifier>,
}

impl Menu<ItemPayload> {
    /// Build a menu from declarative items.
    ///
    /// `active_item` preselects an item: its ancestor chain starts open.
    pub fn from_items(
        items: &[MenuNode],
        config: MenuConfig,
        active_item: Option<String>,
    ) -> Self {
        let tree = build_items(items, active_item.as_deref());
        Self::with_tree(tree, config, active_item)
    }

    /// Build a menu from JSON text describing declarative items.
    pub fn from_json(
        json: &str,
        config: MenuConfig,
        active_item: Option<String>,
    ) -> Result<Self, MenuError> {
        let items = crate::model::parse_items(json)?;
        Ok(Self::from_items(&items, config, active_item))
    }

    /// Replace the items and rebuild the state tree from scratch.
    pub fn set_items(&mut self, items: &[MenuNode]) {
        let tree = build_items(items, self.desired_item.as_deref());
        self.replace_tree(tree);
    }
}

impl Menu<ViewPayload> {
    /// Build a menu from caller view nodes.
    pub fn from_view_nodes<V: ViewNode>(
        nodes: &[V],
        config: MenuConfig,
        active_item: Option<String>,
    ) -> Self {
        let tree = build_view_nodes(nodes, active_item.as_deref());
        Self::with_tree(tree, config, active_item)
    }

    /// Replace the view nodes and rebuild the state tree from scratch.
    pub fn set_view_nodes<V: ViewNode>(&mut self, nodes: &[V]) {
        let tree = build_view_nodes(nodes, self.desired_item.as_deref());
        self.replace_tree(tree);
    }

    /// Node built from the view node at `path` (child indices).
    pub fn node_at(&self, path: &[usize]) -> Option<NodeId> {
        let (first, rest) = path.split_first()?;
        let mut node = *self.tree.roots().get(*first)?;
        for index in rest {
            node = *self.tree.children(node).get(*index)?;
        }
        Some(node)
    }

    /// Props for the view node at `path`.
    pub fn injected_props(&self, path: &[usize]) -> Option<InjectedProps> {
        let node = self.node_at(path)?;
        Some(InjectedProps {
            node,
            active: self.tree.is_active(node),
            level: path.len(),
            rtl: self.config.rtl,
        })
    }
}

impl<P: NodePayload> Menu<P> {
    fn with_tree(
        tree: StateTree<P>,
        config: MenuConfig,
        active_item: Option<String>,
    ) -> Self {
        let mut menu = Self {
            tree,
            config,
            sync: SyncIndex::new(),
            active_item: None,
            desired_item: active_item,
            notifier: None,
        };
        menu.active_item = menu.resolved_desired_item();
        menu
    }

    fn replace_tree(&mut self, tree: StateTree<P>) {
        self.tree = tree;
        self.sync.clear();
        self.active_item = self.resolved_desired_item();
        log::debug!(
            "menu rebuilt: nodes={} active={:?}",
            self.tree.len(),
            self.active_item
        );
    }

    /// The desired item, if the current tree has a node for it.
    fn resolved_desired_item(&self) -> Option<String> {
        let desired = self.desired_item.as_deref()?;
        let node = self.tree.find(desired)?;
        (!self.tree.is_divider(node)).then(|| desired.to_string())
    }

    /// Set the menu-wide click notifier.
    pub fn on_menu_item_click(
        mut self,
        notifier: impl Fn(&str, Option<&Value>) + 'static,
    ) -> Self {
        self.notifier = Some(ClickNotifier::new(notifier));
        self
    }

    pub fn tree(&self) -> &StateTree<P> {
        &self.tree
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Replace the switches.
    ///
    /// Turning collapse on keeps only the first open path, so the menu
    /// never carries more than one open branch in collapse mode.
    pub fn set_config(&mut self, config: MenuConfig) {
        let collapse_enabled = config.collapse && !self.config.collapse;
        self.config = config;
        if collapse_enabled {
            let path = engine::active_path(&self.tree);
            engine::deactivate_all(&mut self.tree);
            if let Some(last) = path.last() {
                engine::activate_path(&mut self.tree, *last);
            }
            log::debug!("menu collapse enabled, kept {} open", path.len());
        }
    }

    pub fn sync_index(&self) -> &SyncIndex {
        &self.sync
    }

    /// Identifier recorded by the last click.
    pub fn active_item(&self) -> Option<&str> {
        self.active_item.as_deref()
    }

    /// Identifier last requested by the caller.
    pub fn desired_item(&self) -> Option<&str> {
        self.desired_item.as_deref()
    }

    pub fn is_active(&self, node: NodeId) -> bool {
        self.tree.is_active(node)
    }

    /// First node carrying `value`.
    pub fn find(&self, value: &str) -> Option<NodeId> {
        self.tree.find(value)
    }

    /// The open chain from the root level downwards.
    pub fn active_path(&self) -> Vec<NodeId> {
        engine::active_path(&self.tree)
    }

    /// Handle a user click on `node`.
    pub fn click(&mut self, node: NodeId) -> Result<ClickDispatch, MenuError> {
        if !self.tree.contains(node) {
            return Err(MenuError::UnknownNode(node));
        }

        let collapse = self.config.collapse;
        let transition = engine::click(&mut self.tree, node, collapse);
        if transition == Transition::Ignored {
            log::debug!("menu click ignored on divider {node}");
            return Ok(ClickDispatch::None);
        }
        log::debug!("menu click on {node}: {transition:?}");

        let result = self.dispatch(node);
        self.active_item = self.tree.identifier(node).map(ToString::to_string);
        Ok(result)
    }

    fn dispatch(&self, node: NodeId) -> ClickDispatch {
        let Some(slot) = self.tree.get(node) else {
            return ClickDispatch::None;
        };
        let payload = slot.payload();
        dispatch(DispatchRequest {
            value: payload.value(),
            extras: payload.extras(),
            click_override: payload.click_override(),
            is_leaf: slot.is_leaf(),
            trigger_click_on_parents: self.config.trigger_click_on_parents,
            notifier: self.notifier.as_ref(),
        })
    }

    /// Ask the menu to show `item` as the active one.
    ///
    /// Replays a click on the node registered for `item` when it differs
    /// from the last clicked identifier. Items that were never realized are
    /// not reachable and the request is dropped. An empty identifier is
    /// treated as no request.
    pub fn set_active_item(
        &mut self,
        item: Option<String>,
    ) -> Option<ClickDispatch> {
        self.desired_item = item.filter(|item| !item.is_empty());
        let desired = self.desired_item.clone()?;
        if self.active_item.as_deref() == Some(desired.as_str()) {
            return None;
        }

        let Some(node) = self.sync.trigger(&desired) else {
            log::debug!("menu active item {desired:?} is not realized yet");
            return None;
        };

        match self.click(node) {
            Ok(dispatch) => Some(dispatch),
            Err(err) => {
                log::warn!("menu active item {desired:?} is stale: {err}");
                None
            },
        }
    }

    /// Render pass: visible rows in display order.
    pub fn realize(&mut self) -> Vec<MenuRow> {
        realize_rows(&self.tree, &mut self.sync, self.config.rtl)
    }
}
