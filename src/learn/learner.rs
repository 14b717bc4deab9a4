//! The select/learn loop.
//!
//! `Learner` owns the game tree, the builder that fills it and the selector
//! that walks it. One episode walks from the root's children down to a final
//! node, choosing each move epsilon-greedily for the role to move, then
//! drains the recorded history into value updates.

use std::time::Instant;

use log::info;

use super::backprop::update_values;
use super::history::TraversalHistory;
use super::selector::{MoveSelector, Strategy};
use super::stats::LearnStats;
use crate::core::{EngineRng, LearnConfig, Role, TableConfig};
use crate::error::ConfigError;
use crate::tree::{BuildStats, GameTree, NodeId, TreeBuilder};

/// One played hand.
#[derive(Clone, Debug, PartialEq)]
pub struct Episode {
    /// Nodes chosen, root child first, final node last.
    pub path: Vec<NodeId>,

    /// Reward at the final node.
    pub reward: f32,

    /// Role that drew the last card.
    pub last_role: Role,

    /// Value updates applied after the hand.
    pub updates: usize,
}

/// Game tree plus the components that build it and learn on it.
#[derive(Clone, Debug)]
pub struct Learner {
    config: LearnConfig,
    tree: GameTree,
    builder: TreeBuilder,
    selector: MoveSelector,
    stats: LearnStats,
}

impl Learner {
    /// Create a learner. The tree is empty until `build` is called.
    pub fn new(table: TableConfig, config: LearnConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = EngineRng::new(config.seed);
        let human = table.human;
        let builder = TreeBuilder::new(table, rng.fork())?;
        let selector = MoveSelector::new(human, rng.fork());

        Ok(Self {
            config,
            tree: GameTree::new(human),
            builder,
            selector,
            stats: LearnStats::new(),
        })
    }

    /// Learning parameters.
    #[must_use]
    pub fn config(&self) -> &LearnConfig {
        &self.config
    }

    /// Table rules.
    #[must_use]
    pub fn table(&self) -> &TableConfig {
        self.builder.table()
    }

    /// The game tree.
    #[must_use]
    pub fn tree(&self) -> &GameTree {
        &self.tree
    }

    /// The tree builder.
    #[must_use]
    pub fn builder(&self) -> &TreeBuilder {
        &self.builder
    }

    /// Pending history.
    #[must_use]
    pub fn history(&self) -> &TraversalHistory {
        self.selector.history()
    }

    /// Training statistics.
    #[must_use]
    pub fn stats(&self) -> &LearnStats {
        &self.stats
    }

    /// Build a fresh tree with `initial` moving first.
    ///
    /// Discards the previous tree, any pending history and the training
    /// statistics.
    pub fn build(&mut self, initial: Role) -> &BuildStats {
        self.selector.history_mut().clear();
        self.stats.reset();
        self.builder.build(&mut self.tree, initial)
    }

    /// Start of the root's sibling group (`None` before a build).
    #[must_use]
    pub fn root_group(&self) -> Option<NodeId> {
        self.tree.first_child(self.tree.root())
    }

    /// Choose the next node for `role` from the group starting at `start`.
    pub fn next_move(&mut self, role: Role, epsilon: f32, start: NodeId) -> NodeId {
        self.selector.next_move(&self.tree, role, epsilon, start)
    }

    /// Apply pending value updates. Returns the number applied.
    pub fn update_values(&mut self, alpha: f32) -> usize {
        update_values(&mut self.tree, self.selector.history_mut(), alpha)
    }

    /// Play one hand with the configured epsilon and alpha, then learn from it.
    ///
    /// Returns `None` if no tree has been built.
    pub fn play_episode(&mut self) -> Option<Episode> {
        let mut start = self.root_group()?;
        let mut path = Vec::new();

        let last = loop {
            let role = self.tree.get(start).turn;
            let (chosen, strategy) =
                self.selector
                    .choose(&self.tree, role, self.config.epsilon, start);

            self.stats.moves[role] += 1;
            match strategy {
                Strategy::Optimal => self.stats.optimal_moves += 1,
                Strategy::Explore => self.stats.explore_moves += 1,
            }
            path.push(chosen);

            match self.tree.first_child(chosen) {
                Some(next) if !self.tree.get(chosen).is_final => start = next,
                _ => break chosen,
            }
        };

        let alpha = self.config.alpha;
        let updates = self.update_values(alpha);
        let node = self.tree.get(last);
        let reward = node.reward.unwrap_or_default();

        self.stats.episodes += 1;
        self.stats.updates += updates as u64;
        self.stats.reward_total[node.turn] += f64::from(reward);

        Some(Episode {
            path,
            reward,
            last_role: node.turn,
            updates,
        })
    }

    /// Play `episodes` hands on the current tree.
    pub fn train(&mut self, episodes: u32) -> &LearnStats {
        let start = Instant::now();

        for _ in 0..episodes {
            if self.play_episode().is_none() {
                break;
            }
        }

        self.stats.time_us += start.elapsed().as_micros() as u64;
        info!(
            "trained {} episodes ({:.0}/s): {:.1} moves/episode, explore rate {:.3}, {} updates",
            self.stats.episodes,
            self.stats.episodes_per_second(),
            self.stats.avg_moves_per_episode(),
            self.stats.explore_rate(),
            self.stats.updates
        );
        &self.stats
    }
}
