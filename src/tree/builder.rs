//! Exhaustive tree construction.
//!
//! `TreeBuilder` enumerates every play sequence from a fresh deck. Each
//! expansion draws one card through a `DrawGuard`, classifies the new total,
//! and recurses once per distinct remaining rank. The guard puts the card
//! back on every exit path, so the deck the builder holds is the same before
//! and after any expansion.
//!
//! ## Usage
//!
//! ```
//! use card_tree::core::{EngineRng, Role, TableConfig};
//! use card_tree::tree::{GameTree, TreeBuilder};
//!
//! let table = TableConfig::default().with_stand_threshold(6).with_bust_threshold(8);
//! let mut builder = TreeBuilder::new(table, EngineRng::new(42))?;
//! let mut tree = GameTree::default();
//!
//! builder.build(&mut tree, Role::Dealer);
//!
//! assert_eq!(tree.children(tree.root()).count(), 10);
//! assert_eq!(builder.deck().len(), 40);

//! # Ok::<(), card_tree::ConfigError>(())
//! ```

use log::{debug, trace};

use super::arena::GameTree;
use super::node::NodeId;
use crate::core::{Action, Deck, EngineRng, Role, Seats, SettleState, TableConfig};
use crate::error::ConfigError;

/// Reward for landing exactly on the bust threshold.
pub const REWARD_HIT: f32 = 1.0;

/// Reward for going over the bust threshold.
pub const REWARD_BUST: f32 = -1.0;

/// Reward when the deck runs out before anyone settles.
pub const REWARD_EXHAUSTED: f32 = 0.0;

/// Counters collected during one build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Nodes expanded (root excluded).
    pub nodes_built: usize,

    /// Final nodes produced.
    pub final_nodes: usize,

    /// Deepest level reached.
    pub max_depth: u16,

    /// Cards drawn from the deck. Each draw is undone before the build returns.
    pub draws: usize,
}

/// Builds the full game tree from a deck.
#[derive(Clone, Debug)]
pub struct TreeBuilder {
    table: TableConfig,
    deck: Deck,
    rng: EngineRng,
    seats: Seats,
    stats: BuildStats,
}

impl TreeBuilder {
    /// Create a builder for a table. `rng` supplies opponent value estimates.
    ///
    /// Fails if `table` does not validate.
    pub fn new(table: TableConfig, rng: EngineRng) -> Result<Self, ConfigError> {
        table.validate()?;
        let seats = table.seats_for(table.human);
        Ok(Self {
            table,
            deck: Deck::new(),
            rng,
            seats,
            stats: BuildStats::default(),
        })
    }

    /// Table this builder plays by.
    #[must_use]
    pub fn table(&self) -> &TableConfig {
        &self.table
    }

    /// The builder's deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Mutable access to the deck, for building from a custom position.
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Seats used by the last build.
    #[must_use]
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Statistics from the last build.
    #[must_use]
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Reset the deck and build the full tree with `initial` moving first.
    ///
    /// Any previous contents of `tree` are discarded.
    pub fn build(&mut self, tree: &mut GameTree, initial: Role) -> &BuildStats {
        self.deck.reset();
        self.build_from_deck(tree, initial)
    }

    /// Build the full tree from the deck as it currently stands.
    pub fn build_from_deck(&mut self, tree: &mut GameTree, initial: Role) -> &BuildStats {
        tree.reset(initial);
        self.seats = self.table.seats_for(initial);
        self.stats = BuildStats::default();

        let root = tree.root();
        let template = tree.root_node().child_template(initial);
        for position in self.deck.distinct_positions() {
            let child = tree.append_child(root, template.clone());
            self.build_node(tree, child, initial, Action::Take, position);
        }

        debug!(
            "built tree: {} nodes, {} final, depth {} ({} first, rival {})",
            tree.len(),
            self.stats.final_nodes,
            self.stats.max_depth,
            initial,
            self.seats.rival
        );
        &self.stats
    }

    /// Expand `node` by drawing the card at `position` as `role`.
    ///
    /// `node` must already be in `tree` holding the template from its parent.
    /// The deck is restored before this returns.
    pub fn build_node(
        &mut self,
        tree: &mut GameTree,
        node: NodeId,
        role: Role,
        action: Action,
        position: usize,
    ) {
        let mut expansion = Expansion {
            tree,
            rng: &mut self.rng,
            table: &self.table,
            seats: self.seats,
            stats: &mut self.stats,
        };
        expansion.expand(&mut self.deck, node, role, action, position);
    }
}

/// Borrowed state for one recursive expansion.
struct Expansion<'a> {
    tree: &'a mut GameTree,
    rng: &'a mut EngineRng,
    table: &'a TableConfig,
    seats: Seats,
    stats: &'a mut BuildStats,
}

impl Expansion<'_> {
    fn expand(&mut self, deck: &mut Deck, id: NodeId, role: Role, action: Action, position: usize) {
        let mut drawn = deck.draw(position);
        let card = drawn.card();
        let deck_empty = drawn.is_empty();
        let value = self.initial_value(role);
        self.stats.draws += 1;

        let node = self.tree.get_mut(id);
        let sum_before = node.card_sum;
        node.card_sum += card.value();
        node.card = Some(card);
        node.turn = role;
        node.last_action = Some(action);
        node.value = value;
        node.settle_state = SettleState::classify(node.card_sum, self.table);
        node.is_final = node.settle_state == SettleState::BothSettle || deck_empty;
        if node.is_final {
            node.reward = Some(settle_reward(node.card_sum, self.table));
        }

        trace!(
            "{} by {}: sum {} + card {} -> {} (reward {:?})",
            action,
            role,
            sum_before,
            card,
            node.card_sum,
            node.reward
        );

        self.stats.nodes_built += 1;
        self.stats.max_depth = self.stats.max_depth.max(node.depth);
        if node.is_final {
            self.stats.final_nodes += 1;
            return;
        }

        let next = if node.settle_state.alternates() {
            self.seats.other(role)
        } else {
            role
        };
        let template = node.child_template(next);

        for child_position in drawn.distinct_positions() {
            let child = self.tree.append_child(id, template.clone());
            self.expand(&mut drawn, child, next, Action::Take, child_position);
        }
    }

    fn initial_value(&mut self, role: Role) -> f32 {
        if role == self.table.human {
            self.table.human_value
        } else {
            self.rng.gen_range(self.table.opponent_values.clone()) as f32
        }
    }
}

/// Outcome for the role that drew the last card of a finished hand.
fn settle_reward(card_sum: u16, table: &TableConfig) -> f32 {
    match card_sum.cmp(&table.bust_threshold) {
        std::cmp::Ordering::Equal => REWARD_HIT,
        std::cmp::Ordering::Greater => REWARD_BUST,
        std::cmp::Ordering::Less => REWARD_EXHAUSTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rank;

    fn small_table() -> TableConfig {
        TableConfig::default()
            .with_stand_threshold(9)
            .with_bust_threshold(12)
    }

    fn built(table: TableConfig, initial: Role) -> (TreeBuilder, GameTree) {
        let mut builder = TreeBuilder::new(table, EngineRng::new(42)).unwrap();
        let mut tree = GameTree::default();
        builder.build(&mut tree, initial);
        (builder, tree)
    }

    #[test]
    fn test_new_rejects_invalid_table() {
        let empty = TableConfig::default().with_opponent_values(3..3);
        let result = TreeBuilder::new(empty, EngineRng::new(1));
        assert_eq!(
            result.err(),
            Some(ConfigError::EmptyValueRange { start: 3, end: 3 })
        );

        let inverted = TableConfig::default().with_stand_threshold(25);
        assert!(TreeBuilder::new(inverted, EngineRng::new(1)).is_err());
    }

    #[test]
    fn test_root_has_one_child_per_rank() {
        let (_, tree) = built(small_table(), Role::Dealer);
        let root = tree.root();

        let children: Vec<_> = tree.children(root).collect();
        assert_eq!(children.len(), 10);

        for (child, rank) in children.iter().zip(Rank::ALL) {
            let node = tree.get(*child);
            assert_eq!(node.card, Some(rank));
            assert_eq!(node.card_sum, rank.value());
            assert_eq!(node.turn, Role::Dealer);
            assert_eq!(node.last_action, Some(Action::Take));
        }
    }

    #[test]
    fn test_deck_restored_after_build() {
        let (builder, _) = built(small_table(), Role::Dealer);
        assert_eq!(builder.deck(), &Deck::new());
        assert!(builder.stats().draws > 0);
    }

    #[test]
    fn test_build_node_round_trip() {
        let mut builder = TreeBuilder::new(small_table(), EngineRng::new(1)).unwrap();
        let mut tree = GameTree::new(Role::Dealer);
        let root = tree.root();
        let template = tree.root_node().child_template(Role::Dealer);
        let child = tree.append_child(root, template);

        // A partial deck with repeated ranks out of canonical order
        *builder.deck_mut() = Deck::from_ranks(
            [5, 2, 2, 12, 1, 5, 7, 3, 3, 10].iter().map(|&v| Rank::new(v)).collect(),
        );
        let before = builder.deck().clone();

        builder.build_node(&mut tree, child, Role::Dealer, Action::Take, 5);

        assert_eq!(builder.deck(), &before);
        assert!(tree.get(child).has_children() || tree.get(child).is_final);
    }

    #[test]
    fn test_final_iff_both_settle_or_empty_deck() {
        let (_, tree) = built(small_table(), Role::Dealer);

        for (id, node) in tree.iter().skip(1) {
            let expected = node.settle_state == SettleState::BothSettle;
            assert_eq!(node.is_final, expected, "{}", id);
            assert_eq!(node.has_children(), !node.is_final, "{}", id);
            assert_eq!(node.reward.is_some(), node.is_final, "{}", id);
        }
    }

    #[test]
    fn test_card_sum_never_decreases() {
        let (_, tree) = built(small_table(), Role::Dealer);

        for (_, node) in tree.iter() {
            if let Some(parent) = node.parent.get() {
                let parent = tree.get(parent);
                assert!(node.card_sum > parent.card_sum);
                assert_eq!(
                    node.card_sum,
                    parent.card_sum + node.card.map_or(0, Rank::value)
                );
            }
        }
    }

    #[test]
    fn test_turns_alternate_only_while_both_taking() {
        let (_, tree) = built(small_table(), Role::Dealer);

        for (_, node) in tree.iter().skip(1) {
            let parent = tree.get(node.parent);
            if node.depth < 2 {
                continue;
            }
            if parent.settle_state == SettleState::BothTaking {
                assert_ne!(node.turn, parent.turn);
            } else {
                assert_eq!(node.turn, parent.turn);
            }
            assert!(matches!(node.turn, Role::Dealer | Role::Player));
        }
    }

    #[test]
    fn test_rewards() {
        let (_, tree) = built(small_table(), Role::Dealer);

        for (_, node) in tree.iter().filter(|(_, n)| n.is_final) {
            let expected = if node.card_sum == 12 { REWARD_HIT } else { REWARD_BUST };
            assert_eq!(node.reward, Some(expected));
        }
    }

    #[test]
    fn test_initial_values() {
        let (_, tree) = built(small_table(), Role::Dealer);

        for (_, node) in tree.iter().skip(1) {
            match node.turn {
                Role::Player => assert_eq!(node.value, 0.5),
                _ => {
                    assert!((0.0..=8.0).contains(&node.value));
                    assert_eq!(node.value.fract(), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_single_rank_deck_runs_out() {
        let mut builder = TreeBuilder::new(TableConfig::default(), EngineRng::new(3)).unwrap();
        let mut tree = GameTree::default();
        *builder.deck_mut() = Deck::from_ranks(vec![Rank::new(3); 4]);
        let before = builder.deck().clone();

        builder.build_from_deck(&mut tree, Role::Dealer);

        // One chain: 3, 6, 9, 12, then the deck is empty
        assert_eq!(tree.len(), 5);
        let leaf = tree.get(NodeId::new(4));
        assert_eq!(leaf.card_sum, 12);
        assert!(leaf.is_final);
        assert_eq!(leaf.settle_state, SettleState::BothTaking);
        assert_eq!(leaf.reward, Some(REWARD_EXHAUSTED));
        assert_eq!(builder.deck(), &before);
    }

    #[test]
    fn test_one_settle_keeps_turn() {
        // Stand at 2: after the first draw every total is at least 1,
        // and any total of 2 or more locks the turn
        let table = TableConfig::default()
            .with_stand_threshold(2)
            .with_bust_threshold(6);
        let (_, tree) = built(table, Role::Dealer);

        let ace = tree.first_child(tree.root()).unwrap();
        assert_eq!(tree.get(ace).settle_state, SettleState::BothTaking);
        for child in tree.children(ace) {
            assert_eq!(tree.get(child).turn, Role::Player);
            for grandchild in tree.children(child) {
                assert_eq!(tree.get(grandchild).turn, Role::Player);
            }
        }
    }

    #[test]
    fn test_human_first_uses_configured_rival() {
        let table = small_table().with_rival(Role::Opponent);
        let (builder, tree) = built(table, Role::Player);

        assert_eq!(builder.seats().rival, Role::Opponent);
        let ace = tree.first_child(tree.root()).unwrap();
        let next = tree.first_child(ace).unwrap();
        assert_eq!(tree.get(ace).turn, Role::Player);
        assert_eq!(tree.get(next).turn, Role::Opponent);
    }

    #[test]
    fn test_rebuild_is_deterministic_per_seed() {
        let (_, a) = built(small_table(), Role::Dealer);
        let (_, b) = built(small_table(), Role::Dealer);

        assert_eq!(a.len(), b.len());
        assert!(a.iter().zip(b.iter()).all(|((_, x), (_, y))| x == y));
    }

    #[test]
    fn test_stats_match_tree() {
        let (builder, tree) = built(small_table(), Role::Dealer);
        let stats = builder.stats();
        let tree_stats = tree.stats();

        assert_eq!(stats.nodes_built + 1, tree.len());
        assert_eq!(stats.final_nodes, tree_stats.final_count);
        assert_eq!(stats.max_depth, tree_stats.max_depth);
        assert_eq!(stats.draws, stats.nodes_built);
    }
}
