//! Game tree node structures.
//!
//! Nodes live in the `GameTree` arena and refer to each other by `NodeId`.
//! Children hang off a node as a singly linked sibling list
//! (`first_child` / `next_sibling`), which is also how a sibling group is
//! walked during move selection.

use crate::core::{Action, Rank, Role, SettleState};

/// Index into the GameTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Option<NodeId> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// One point in the game tree.
#[derive(Clone, Debug, PartialEq)]
pub struct StateNode {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// First child (NONE for leaves).
    pub first_child: NodeId,

    /// Last child, for O(1) append.
    pub last_child: NodeId,

    /// Next sibling under the same parent (NONE for the last one).
    pub next_sibling: NodeId,

    /// Number of children.
    pub child_count: u16,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Running total of the hand after this node's draw.
    pub card_sum: u16,

    /// Card drawn to reach this node (`None` for root).
    pub card: Option<Rank>,

    /// Role that acted at this node.
    pub turn: Role,

    /// Action that produced this node (`None` for root).
    pub last_action: Option<Action>,

    /// Who may still draw, derived from `card_sum`.
    pub settle_state: SettleState,

    /// Is the hand over at this node?
    pub is_final: bool,

    /// Outcome for the role that drew last (final nodes only).
    pub reward: Option<f32>,

    /// Learned value estimate.
    pub value: f32,
}

impl StateNode {
    /// An empty state where `turn` moves first.
    pub fn root(turn: Role) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            next_sibling: NodeId::NONE,
            child_count: 0,
            depth: 0,
            card_sum: 0,
            card: None,
            turn,
            last_action: None,
            settle_state: SettleState::BothTaking,
            is_final: false,
            reward: None,
            value: 0.0,
        }
    }

    /// Template for the children of this node.
    ///
    /// Carries the running total and the next role to move. Links, action,
    /// outcome and value start empty; the tree and the builder fill them in.
    #[must_use]
    pub fn child_template(&self, turn: Role) -> Self {
        Self {
            card_sum: self.card_sum,
            settle_state: self.settle_state,
            ..Self::root(turn)
        }
    }

    /// Check if this node has children.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.first_child.is_none()
    }
}
