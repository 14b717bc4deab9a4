//! Traversal history awaiting a value update.

use crate::tree::NodeId;

/// Recorded (child, ancestor) pairs.
///
/// Two parallel stacks, pushed by the optimal selector and drained by
/// `update_values`. Pairs come back out newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraversalHistory {
    children: Vec<NodeId>,
    ancestors: Vec<NodeId>,
}

impl TraversalHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `ancestor` should move toward `child`.
    pub fn push(&mut self, child: NodeId, ancestor: NodeId) {
        self.children.push(child);
        self.ancestors.push(ancestor);
    }

    /// Take the most recent pair.
    pub fn pop(&mut self) -> Option<(NodeId, NodeId)> {
        let child = self.children.pop()?;
        let ancestor = self.ancestors.pop()?;
        Some((child, ancestor))
    }

    /// Number of pending pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Drop every pending pair.
    pub fn clear(&mut self) {
        self.children.clear();
        self.ancestors.clear();
    }
}
