//! Epsilon-greedy move selection over a sibling group.
//!
//! A sibling group is named by its starting node and runs through every
//! following sibling. Callers pass the first child of the node they are
//! moving from; an empty group cannot be named, so there is nothing to check.
//!
//! - The human role always takes the optimal (max value) move.
//! - Other roles take a uniformly random move with probability `epsilon`.
//! - Optimal moves by learner roles are recorded in the traversal history,
//!   paired with the ancestor whose value they should pull on. Opponent
//!   moves are recorded only when they land on a leaf. Exploratory moves
//!   are never recorded.

use log::debug;

use super::history::TraversalHistory;
use crate::core::{EngineRng, Role};
use crate::tree::{GameTree, NodeId};

/// Which strategy produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Highest value estimate in the group.
    Optimal,
    /// Uniform choice over the group.
    Explore,
}

/// Chooses moves and records the ones to learn from.
#[derive(Clone, Debug)]
pub struct MoveSelector {
    /// The role that never explores.
    human: Role,

    /// Role of the move currently being chosen.
    active: Role,

    /// Pending (child, ancestor) pairs.
    history: TraversalHistory,

    rng: EngineRng,
}

impl MoveSelector {
    /// Create a selector. `rng` drives the epsilon and explore draws.
    pub fn new(human: Role, rng: EngineRng) -> Self {
        Self {
            human,
            active: human,
            history: TraversalHistory::new(),
            rng,
        }
    }

    /// Role of the last move chosen.
    #[must_use]
    pub fn active(&self) -> Role {
        self.active
    }

    /// Pending history.
    #[must_use]
    pub fn history(&self) -> &TraversalHistory {
        &self.history
    }

    /// Pending history, mutably (drained by `update_values`).
    pub fn history_mut(&mut self) -> &mut TraversalHistory {
        &mut self.history
    }

    /// Choose the next node for `role` from the group starting at `start`.
    pub fn next_move(&mut self, tree: &GameTree, role: Role, epsilon: f32, start: NodeId) -> NodeId {
        self.choose(tree, role, epsilon, start).0
    }

    /// Like `next_move`, also reporting which strategy was used.
    ///
    /// The draw must land strictly above `epsilon` to exploit, so with
    /// `epsilon == 0.0` a learner still explores on the (rare) exact zero draw.
    pub fn choose(
        &mut self,
        tree: &GameTree,
        role: Role,
        epsilon: f32,
        start: NodeId,
    ) -> (NodeId, Strategy) {
        self.active = role;

        if role == self.human || self.rng.gen_unit() > epsilon {
            (self.next_optimal_node(tree, start), Strategy::Optimal)
        } else {
            (self.next_explore_node(tree, start), Strategy::Explore)
        }
    }

    /// Node with the greatest value in the group. Ties go to the earliest.
    ///
    /// Records the choice for the active role's propagation depth, when the
    /// role learns and the ancestor exists. Opponent choices are recorded
    /// only at leaves.
    pub fn next_optimal_node(&mut self, tree: &GameTree, start: NodeId) -> NodeId {
        let mut best = start;
        let mut best_value = tree.get(start).value;
        for sibling in tree.siblings(start).skip(1) {
            let value = tree.get(sibling).value;
            if value > best_value {
                best = sibling;
                best_value = value;
            }
        }

        let leaf = !tree.get(best).has_children();
        if let Some(levels) = self.active.propagation_depth() {
            if leaf || !self.active.records_leaves_only() {
                if let Some(ancestor) = tree.ancestor(best, levels) {
                    self.history.push(best, ancestor);
                }
            }
        }

        debug!("{} exploits {} (value {})", self.active, best, best_value);
        best
    }

    /// Uniformly random node from the group. Never recorded.
    pub fn next_explore_node(&mut self, tree: &GameTree, start: NodeId) -> NodeId {
        let count = tree.siblings(start).count();
        let index = self.rng.gen_range_usize(0..count);
        let chosen = tree.siblings(start).nth(index).unwrap_or(start);

        debug!("{} explores {} ({} of {})", self.active, chosen, index + 1, count);
        chosen
    }
}
