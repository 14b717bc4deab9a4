//! Table and learning configuration.
//!
//! - `TableConfig`: game rules and seating (thresholds, human/rival roles,
//!   initial value estimates)
//! - `LearnConfig`: selection and learning parameters (seed, epsilon, alpha)
//!
//! Both follow the same pattern: `Default` gives the standard table, and
//! `with_*` methods adjust a single field. `validate` rejects combinations
//! the builder or selector cannot work with.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::role::{Role, Seats};
use crate::error::ConfigError;

/// Game rules and seating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Totals at or above this are classified `OneSettle` (default: 17).
    pub stand_threshold: u16,

    /// Totals at or above this end the hand (default: 21).
    /// Landing exactly on it wins, going over busts.
    pub bust_threshold: u16,

    /// The human role. Gets the neutral value and never explores.
    pub human: Role,

    /// Seat facing the human when a tree is built from the human's turn.
    pub rival: Role,

    /// Initial value estimate for nodes the human acted on (default: 0.5).
    pub human_value: f32,

    /// Integer range the initial estimate of every other node is drawn from
    /// (default: `0..9`).
    pub opponent_values: Range<i32>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            stand_threshold: 17,
            bust_threshold: 21,
            human: Role::Player,
            rival: Role::Dealer,
            human_value: 0.5,
            opponent_values: 0..9,
        }
    }
}

impl TableConfig {
    /// Set the stand threshold.
    #[must_use]
    pub fn with_stand_threshold(mut self, stand: u16) -> Self {
        self.stand_threshold = stand;
        self
    }

    /// Set the bust threshold.
    #[must_use]
    pub fn with_bust_threshold(mut self, bust: u16) -> Self {
        self.bust_threshold = bust;
        self
    }

    /// Set the rival seat.
    #[must_use]
    pub fn with_rival(mut self, rival: Role) -> Self {
        self.rival = rival;
        self
    }

    /// Set the opponent value range.
    #[must_use]
    pub fn with_opponent_values(mut self, values: Range<i32>) -> Self {
        self.opponent_values = values;
        self
    }

    /// Seats for a tree whose first move belongs to `initial`.
    ///
    /// A non-human initial role takes the rival seat for that tree.
    #[must_use]
    pub fn seats_for(&self, initial: Role) -> Seats {
        if initial == self.human {
            Seats::new(self.human, self.rival)
        } else {
            Seats::new(self.human, initial)
        }
    }

    /// Check the configuration for combinations the builder cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bust_threshold == 0 {
            return Err(ConfigError::ZeroBustThreshold);
        }
        if self.stand_threshold > self.bust_threshold {
            return Err(ConfigError::StandAboveBust {
                stand: self.stand_threshold,
                bust: self.bust_threshold,
            });
        }
        if self.rival == self.human {
            return Err(ConfigError::RivalIsHuman(self.rival));
        }
        if self.opponent_values.is_empty() {
            return Err(ConfigError::EmptyValueRange {
                start: self.opponent_values.start,
                end: self.opponent_values.end,
            });
        }
        Ok(())
    }
}

/// Selection and learning parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearnConfig {
    /// Random seed. Same seed produces the same tree values and move choices.
    pub seed: u64,

    /// Probability that a non-human role explores (default: 0.1).
    pub epsilon: f32,

    /// Learning rate for value updates (default: 0.1).
    /// Values outside `(0, 1]` are accepted but give unstable estimates.
    pub alpha: f32,
}

impl Default for LearnConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            epsilon: 0.1,
            alpha: 0.1,
        }
    }
}

impl LearnConfig {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the exploration rate.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the learning rate.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Check that epsilon is a probability. Alpha is not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ConfigError::EpsilonOutOfRange(self.epsilon));
        }
        Ok(())
    }
}
