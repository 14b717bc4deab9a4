//! Error types for card-tree.
//!
//! The search and learning core has no recoverable failures. Everything
//! that can go wrong is a configuration mistake caught up front.

use thiserror::Error;

use crate::core::Role;

/// Rejected table or learning configuration.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("bust threshold must be positive")]
    ZeroBustThreshold,

    #[error("stand threshold {stand} is above bust threshold {bust}")]
    StandAboveBust { stand: u16, bust: u16 },

    #[error("rival seat cannot be the human role ({0})")]
    RivalIsHuman(Role),

    #[error("opponent value range {start}..{end} is empty")]
    EmptyValueRange { start: i32, end: i32 },

    #[error("epsilon {0} is not a probability")]
    EpsilonOutOfRange(f32),
}
