//! Arena-based game tree.
//!
//! Uses a flat `Vec<StateNode>` with index-based references. The tree owns
//! every node; parent and sibling links are plain indices, so walking up to
//! an ancestor never borrows anything but the arena.

use super::node::{NodeId, StateNode};
use crate::core::{Role, SettleState};

/// Arena-based game tree rooted at an empty state.
#[derive(Clone, Debug)]
pub struct GameTree {
    /// All nodes in the tree.
    nodes: Vec<StateNode>,

    /// The root node ID (always 0 after initialization).
    root: NodeId,
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new(Role::Player)
    }
}

impl GameTree {
    /// Create a new tree with a root node.
    pub fn new(root_turn: Role) -> Self {
        Self::with_capacity(root_turn, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(root_turn: Role, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(StateNode::root(root_turn));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &StateNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut StateNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Append `node` as the last child of `parent`, returning its ID.
    ///
    /// Link and depth fields of `node` are overwritten.
    pub fn append_child(&mut self, parent: NodeId, mut node: StateNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);

        let parent_node = self.get(parent);
        node.parent = parent;
        node.depth = parent_node.depth + 1;
        node.first_child = NodeId::NONE;
        node.last_child = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        let previous = parent_node.last_child;

        self.nodes.push(node);

        if let Some(previous) = previous.get() {
            self.get_mut(previous).next_sibling = id;
        } else {
            self.get_mut(parent).first_child = id;
        }
        let parent_node = self.get_mut(parent);
        parent_node.last_child = id;
        parent_node.child_count += 1;

        id
    }

    /// Parent of a node (`None` for root).
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent.get()
    }

    /// Ancestor `levels` steps up (`levels == 0` is the node itself).
    #[must_use]
    pub fn ancestor(&self, id: NodeId, levels: usize) -> Option<NodeId> {
        (0..levels).try_fold(id, |current, _| self.parent(current))
    }

    /// First child of a node, the start of its children's sibling group.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).first_child.get()
    }

    /// Iterate over the children of a node.
    pub fn children(&self, id: NodeId) -> Siblings<'_> {
        Siblings {
            tree: self,
            next: self.get(id).first_child,
        }
    }

    /// Iterate over a sibling group: `start` and every sibling after it.
    pub fn siblings(&self, start: NodeId) -> Siblings<'_> {
        Siblings {
            tree: self,
            next: start,
        }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear the tree and reset with a new root.
    pub fn reset(&mut self, root_turn: Role) {
        self.nodes.clear();
        self.nodes.push(StateNode::root(root_turn));
        self.root = NodeId::new(0);
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &StateNode {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &StateNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            node_count: self.nodes.len(),
            ..TreeStats::default()
        };

        for node in &self.nodes {
            stats.max_depth = stats.max_depth.max(node.depth);
            stats.total_edges += node.child_count as usize;
            if node.is_final {
                stats.final_count += 1;
            }
            match node.settle_state {
                SettleState::BothTaking => stats.both_taking += 1,
                SettleState::OneSettle => stats.one_settle += 1,
                SettleState::BothSettle => stats.both_settle += 1,
            }
        }

        stats
    }
}

/// Iterator over a run of siblings.
#[derive(Clone, Debug)]
pub struct Siblings<'a> {
    tree: &'a GameTree,
    next: NodeId,
}

impl Iterator for Siblings<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next.get()?;
        self.next = self.tree.get(current).next_sibling;
        Some(current)
    }
}

/// Statistics about the game tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes, root included.
    pub node_count: usize,

    /// Number of final nodes.
    pub final_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Total parent-child links.
    pub total_edges: usize,

    /// Nodes classified `BothTaking` (root included).
    pub both_taking: usize,

    /// Nodes classified `OneSettle`.
    pub one_settle: usize,

    /// Nodes classified `BothSettle`.
    pub both_settle: usize,
}

impl TreeStats {
    /// Get the branching factor (average children per non-final node).
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let interior = self.node_count - self.final_count;
        if interior == 0 {
            0.0
        } else {
            self.total_edges as f64 / interior as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(turn: Role) -> StateNode {
        StateNode::root(turn)
    }

    #[test]
    fn test_tree_new() {
        let tree = GameTree::new(Role::Dealer);

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId::new(0));
        assert_eq!(tree.root_node().turn, Role::Dealer);
    }

    #[test]
    fn test_append_links_siblings() {
        let mut tree = GameTree::new(Role::Dealer);
        let root = tree.root();

        let a = tree.append_child(root, node(Role::Dealer));
        let b = tree.append_child(root, node(Role::Dealer));
        let c = tree.append_child(root, node(Role::Dealer));

        assert_eq!(tree.get(root).child_count, 3);
        assert_eq!(tree.first_child(root), Some(a));
        assert_eq!(tree.get(a).next_sibling, b);
        assert_eq!(tree.get(b).next_sibling, c);
        assert!(tree.get(c).next_sibling.is_none());
        assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(tree.siblings(b).collect::<Vec<_>>(), vec![b, c]);
    }

    #[test]
    fn test_interleaved_appends_keep_groups_apart() {
        let mut tree = GameTree::new(Role::Dealer);
        let root = tree.root();

        // Depth-first construction: a subtree is filled before the next sibling
        let a = tree.append_child(root, node(Role::Dealer));
        let a1 = tree.append_child(a, node(Role::Player));
        let a2 = tree.append_child(a, node(Role::Player));
        let b = tree.append_child(root, node(Role::Dealer));

        assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(tree.children(a).collect::<Vec<_>>(), vec![a1, a2]);
        assert_eq!(tree.children(b).count(), 0);
    }

    #[test]
    fn test_parent_and_ancestor() {
        let mut tree = GameTree::new(Role::Dealer);
        let root = tree.root();
        let a = tree.append_child(root, node(Role::Dealer));
        let b = tree.append_child(a, node(Role::Player));
        let c = tree.append_child(b, node(Role::Dealer));

        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.parent(c), Some(b));
        assert_eq!(tree.ancestor(c, 0), Some(c));
        assert_eq!(tree.ancestor(c, 2), Some(a));
        assert_eq!(tree.ancestor(c, 3), Some(root));
        assert_eq!(tree.ancestor(c, 4), None);
        assert_eq!(tree.get(c).depth, 3);
    }

    #[test]
    fn test_tree_reset() {
        let mut tree = GameTree::new(Role::Dealer);
        let root = tree.root();
        tree.append_child(root, node(Role::Dealer));
        tree.append_child(root, node(Role::Dealer));
        assert_eq!(tree.len(), 3);

        tree.reset(Role::Player);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_node().turn, Role::Player);
        assert!(!tree.root_node().has_children());
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = GameTree::new(Role::Dealer);
        let root = tree.root();
        let a = tree.append_child(root, node(Role::Dealer));
        let b = tree.append_child(root, node(Role::Dealer));
        tree.get_mut(b).is_final = true;
        tree.get_mut(b).settle_state = SettleState::BothSettle;
        let c = tree.append_child(a, node(Role::Player));
        tree.get_mut(c).is_final = true;
        tree.get_mut(c).settle_state = SettleState::BothSettle;

        let stats = tree.stats();

        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.final_count, 2);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.total_edges, 3);
        assert_eq!(stats.both_taking, 2);
        assert_eq!(stats.both_settle, 2);
        assert_eq!(stats.branching_factor(), 1.5);
    }

    #[test]
    fn test_tree_iter() {
        let mut tree = GameTree::new(Role::Dealer);
        tree.append_child(tree.root(), node(Role::Dealer));

        let nodes: Vec<_> = tree.iter().collect();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].0, NodeId::new(0));
        assert_eq!(nodes[1].0, NodeId::new(1));
    }
}
