//! # card-tree
//!
//! Exhaustive game-tree search and on-line value learning for a two-seat,
//! blackjack-like card drawing game played from a shrinking 40-card deck.
//!
//! ## Design Principles
//!
//! 1. **Build Once, Learn Many**: The full decision tree is enumerated up
//!    front; learning only walks and re-scores it.
//!
//! 2. **One Deck, Strict Backtracking**: Construction shares a single deck
//!    across the whole recursion. Every draw is undone by a scope guard.
//!
//! 3. **Explicit Randomness**: Every random draw comes from a seeded
//!    `EngineRng` owned by the component that needs it.
//!
//! ## Architecture
//!
//! - **Arena Tree**: Nodes live in one vector and link by `NodeId`, so
//!   ancestor walks for value propagation never fight the borrow checker.
//!
//! - **Distinct-Rank Pruning**: Only the first remaining copy of each rank is
//!   explored; drawing any other copy reaches an identical state.
//!
//! - **Epsilon-Greedy TD**: Learner seats exploit the best value estimate or
//!   explore uniformly; exploited moves pull an ancestor's estimate toward
//!   the chosen child.
//!
//! ## Modules
//!
//! - `core`: Ranks and the deck, roles, actions, RNG, configuration
//! - `tree`: State nodes, the arena game tree, the exhaustive builder
//! - `learn`: Move selection, traversal history, value backpropagation
//! - `error`: Configuration errors

pub mod core;
pub mod error;
pub mod learn;
pub mod tree;

// Re-export commonly used types
pub use crate::core::{
    Action, Deck, DrawGuard, EngineRng, LearnConfig, Rank, Role, RoleMap, Seats,
    SettleState, TableConfig,
};

pub use crate::error::ConfigError;

pub use crate::tree::{BuildStats, GameTree, NodeId, StateNode, TreeBuilder, TreeStats};

pub use crate::learn::{
    update_values, Episode, LearnStats, Learner, MoveSelector, Strategy, TraversalHistory,
};
