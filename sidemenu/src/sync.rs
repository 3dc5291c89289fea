use std::collections::HashMap;

use crate::tree::NodeId;

/// Identifier to activation trigger index used for external sync.
///
/// Entries are recorded while rows are realized, so a node hidden under a
/// closed ancestor is not reachable until it has been shown once. With
/// duplicate identifiers the last realized node wins.
#[derive(Debug, Clone, Default)]
pub struct SyncIndex {
    triggers: HashMap<String, NodeId>,
}

impl SyncIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the trigger for `value`.
    pub fn register(&mut self, value: &str, node: NodeId) {
        if let Some(previous) = self.triggers.get_mut(value) {
            if *previous != node {
                log::debug!(
                    "sync index: {value:?} moved from {previous} to {node}"
                );
                *previous = node;
            }
            return;
        }
        self.triggers.insert(value.to_string(), node);
    }

    /// Node whose click replays the activation of `value`.
    pub fn trigger(&self, value: &str) -> Option<NodeId> {
        self.triggers.get(value).copied()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.triggers.contains_key(value)
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Forget every trigger. Called when the tree is rebuilt.
    pub fn clear(&mut self) {
        self.triggers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::SyncIndex;
    use crate::tree::NodeId;

    #[test]
    fn given_registered_value_when_triggered_then_node_is_returned() {
        let mut index = SyncIndex::new();

        index.register("home", NodeId::new(0));

        assert_eq!(index.trigger("home"), Some(NodeId::new(0)));
        assert_eq!(index.trigger("contact"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn given_duplicate_value_when_registered_then_last_node_wins() {
        let mut index = SyncIndex::new();

        index.register("dup", NodeId::new(1));
        index.register("dup", NodeId::new(4));

        assert_eq!(index.trigger("dup"), Some(NodeId::new(4)));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn given_entries_when_cleared_then_index_is_empty() {
        let mut index = SyncIndex::new();
        index.register("a", NodeId::new(0));

        index.clear();

        assert!(index.is_empty());
        assert!(!index.contains("a"));
    }
}
