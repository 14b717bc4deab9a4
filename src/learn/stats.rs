//! Learning statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use crate::core::RoleMap;

/// Statistics collected across episodes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LearnStats {
    /// Episodes played to a final node.
    pub episodes: u32,

    /// Moves chosen, per acting role.
    pub moves: RoleMap<u32>,

    /// Moves taken by the optimal strategy.
    pub optimal_moves: u32,

    /// Moves taken by the explore strategy.
    pub explore_moves: u32,

    /// Value updates applied.
    pub updates: u64,

    /// Sum of final rewards, per role that drew the last card.
    pub reward_total: RoleMap<f64>,

    /// Total time spent training (microseconds).
    pub time_us: u64,
}

impl LearnStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total moves over all roles.
    #[must_use]
    pub fn total_moves(&self) -> u32 {
        self.optimal_moves + self.explore_moves
    }

    /// Fraction of moves that explored.
    #[must_use]
    pub fn explore_rate(&self) -> f64 {
        let total = self.total_moves();
        if total == 0 {
            0.0
        } else {
            self.explore_moves as f64 / total as f64
        }
    }

    /// Average moves per episode.
    #[must_use]
    pub fn avg_moves_per_episode(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_moves() as f64 / self.episodes as f64
        }
    }

    /// Calculate episodes per second.
    #[must_use]
    pub fn episodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.episodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
