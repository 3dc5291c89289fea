//! Activation rules shared by every [`ActiveTree`].

use crate::tree::{ActiveTree, NodeId};

/// State change produced by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The node was inactive and is now open, with its ancestors.
    Opened,
    /// The node was active and is now closed, with its subtree.
    Closed,
    /// The node cannot be activated (divider).
    Ignored,
}

/// Mark `node` and every ancestor up to the root active.
pub fn activate_path<T: ActiveTree + ?Sized>(tree: &mut T, node: NodeId) {
    let mut current = Some(node);
    while let Some(node) = current {
        if !tree.is_divider(node) {
            tree.set_active(node, true);
        }
        current = tree.parent(node);
    }
}

/// Mark every node in `nodes` and all of their descendants inactive.
pub fn deactivate<T: ActiveTree + ?Sized>(tree: &mut T, nodes: &[NodeId]) {
    let mut pending = nodes.to_vec();
    while let Some(node) = pending.pop() {
        tree.set_active(node, false);
        pending.extend_from_slice(tree.children(node));
    }
}

/// Mark the whole tree inactive.
pub fn deactivate_all<T: ActiveTree + ?Sized>(tree: &mut T) {
    let roots = tree.roots().to_vec();
    deactivate(tree, &roots);
}

/// Apply a click on `target` to the tree.
///
/// Opening a node forces its ancestor chain active; in collapse mode every
/// other branch is closed first. Closing a node closes its subtree while
/// its parent stays open.
pub fn click<T: ActiveTree + ?Sized>(
    tree: &mut T,
    target: NodeId,
    collapse: bool,
) -> Transition {
    if tree.is_divider(target) {
        return Transition::Ignored;
    }

    if !tree.is_active(target) {
        if collapse {
            deactivate_all(tree);
        }
        activate_path(tree, target);
        return Transition::Opened;
    }

    tree.set_active(target, false);
    let children = tree.children(target).to_vec();
    deactivate(tree, &children);
    if let Some(parent) = tree.parent(target) {
        activate_path(tree, parent);
    }
    Transition::Closed
}

/// Active chain from the root level downwards.
///
/// Follows the first active node at each level, so in collapse mode this is
/// the one active path.
pub fn active_path<T: ActiveTree + ?Sized>(tree: &T) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut level = tree.roots();
    while let Some(node) =
        level.iter().copied().find(|node| tree.is_active(*node))
    {
        path.push(node);
        level = tree.children(node);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::{Transition, activate_path, active_path, click, deactivate_all};
    use crate::tree::{ActiveTree, NodeId, NodePayload, StateTree};

    struct Label(&'static str, bool);

    impl NodePayload for Label {
        fn value(&self) -> Option<&str> {
            Some(self.0)
        }

        fn is_divider(&self) -> bool {
            self.1
        }
    }

    struct Fixture {
        tree: StateTree<Label>,
        home: NodeId,
        products: NodeId,
        shoes: NodeId,
        shirts: NodeId,
        contact: NodeId,
        divider: NodeId,
    }

    // Home, Products[Shoes, Shirts], ---, Contact
    fn fixture() -> Fixture {
        let mut tree = StateTree::new();
        let home = tree.insert(Label("home", false), None);
        let products = tree.insert(Label("products", false), None);
        let shoes = tree.insert(Label("shoes", false), Some(products));
        let shirts = tree.insert(Label("shirts", false), Some(products));
        let divider = tree.insert(Label("sep", true), None);
        let contact = tree.insert(Label("contact", false), None);
        Fixture {
            tree,
            home,
            products,
            shoes,
            shirts,
            contact,
            divider,
        }
    }

    #[test]
    fn given_inactive_parent_when_clicked_then_only_parent_opens() {
        let mut f = fixture();

        let transition = click(&mut f.tree, f.products, true);

        assert_eq!(transition, Transition::Opened);
        assert!(f.tree.is_active(f.products));
        assert!(!f.tree.is_active(f.shoes));
        assert!(!f.tree.is_active(f.shirts));
    }

    #[test]
    fn given_open_parent_when_child_clicked_then_parent_stays_active() {
        let mut f = fixture();
        click(&mut f.tree, f.products, true);

        click(&mut f.tree, f.shoes, true);

        assert!(f.tree.is_active(f.shoes));
        assert!(f.tree.is_active(f.products));
        assert!(!f.tree.is_active(f.home));
        assert!(!f.tree.is_active(f.contact));
        assert_eq!(active_path(&f.tree), vec![f.products, f.shoes]);
    }

    #[test]
    fn given_open_branch_when_parent_clicked_again_then_subtree_closes() {
        let mut f = fixture();
        click(&mut f.tree, f.products, true);
        click(&mut f.tree, f.shoes, true);

        let transition = click(&mut f.tree, f.products, true);

        assert_eq!(transition, Transition::Closed);
        assert!(!f.tree.is_active(f.products));
        assert!(!f.tree.is_active(f.shoes));
        assert!(!f.tree.is_active(f.home));
        assert!(!f.tree.is_active(f.contact));
    }

    #[test]
    fn given_active_leaf_when_clicked_again_then_ancestors_stay_open() {
        let mut f = fixture();
        click(&mut f.tree, f.shoes, true);

        let transition = click(&mut f.tree, f.shoes, true);

        assert_eq!(transition, Transition::Closed);
        assert!(!f.tree.is_active(f.shoes));
        assert!(f.tree.is_active(f.products));
    }

    #[test]
    fn given_collapse_mode_when_unrelated_node_clicked_then_old_path_clears() {
        let mut f = fixture();
        click(&mut f.tree, f.shoes, true);

        click(&mut f.tree, f.home, true);

        assert_eq!(f.tree.active_nodes(), vec![f.home]);
    }

    #[test]
    fn given_independent_mode_when_unrelated_node_clicked_then_old_path_stays()
    {
        let mut f = fixture();
        click(&mut f.tree, f.shoes, false);

        click(&mut f.tree, f.home, false);

        assert_eq!(f.tree.active_nodes(), vec![f.home, f.products, f.shoes]);
    }

    #[test]
    fn given_divider_when_clicked_then_nothing_changes() {
        let mut f = fixture();
        click(&mut f.tree, f.home, true);

        let transition = click(&mut f.tree, f.divider, true);

        assert_eq!(transition, Transition::Ignored);
        assert!(!f.tree.is_active(f.divider));
        assert_eq!(f.tree.active_nodes(), vec![f.home]);
    }

    #[test]
    fn given_active_path_when_activated_again_then_state_is_unchanged() {
        let mut f = fixture();
        activate_path(&mut f.tree, f.shirts);
        let before = f.tree.active_nodes();

        activate_path(&mut f.tree, f.shirts);

        assert_eq!(f.tree.active_nodes(), before);
    }

    #[test]
    fn given_any_state_when_deactivating_all_then_nothing_is_active() {
        let mut f = fixture();
        click(&mut f.tree, f.shoes, false);
        click(&mut f.tree, f.contact, false);

        deactivate_all(&mut f.tree);

        assert!(f.tree.active_nodes().is_empty());
        assert!(active_path(&f.tree).is_empty());
    }
}
