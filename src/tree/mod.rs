//! The game tree and its exhaustive builder.
//!
//! ## Overview
//!
//! - **Arena storage**: every `StateNode` lives in one `GameTree` vector and
//!   is addressed by `NodeId`; parent and sibling links are indices
//! - **Exhaustive construction**: `TreeBuilder` enumerates one child per
//!   distinct remaining rank until every hand is settled or the deck is
//!   empty
//! - **Backtracking deck**: the builder owns a single deck for the whole
//!   recursion and restores it after every expansion
//!
//! ## Usage
//!
//! ```rust
//! use card_tree::core::{EngineRng, Role, TableConfig};
//! use card_tree::tree::{GameTree, TreeBuilder};
//!
//! let table = TableConfig::default().with_stand_threshold(7).with_bust_threshold(9);
//! let mut builder = TreeBuilder::new(table, EngineRng::new(7))?;
//! let mut tree = GameTree::default();
//! builder.build(&mut tree, Role::Dealer);
//!
//! let stats = tree.stats();
//! println!("{} nodes, {} final", stats.node_count, stats.final_count);

//! # Ok::<(), card_tree::ConfigError>(())
//! ```

pub mod arena;
pub mod builder;
pub mod node;

pub use arena::{GameTree, Siblings, TreeStats};
pub use builder::{BuildStats, TreeBuilder, REWARD_BUST, REWARD_EXHAUSTED, REWARD_HIT};
pub use node::{NodeId, StateNode};
