//! Core types: ranks and the deck, roles, actions, RNG, configuration.
//!
//! These are the leaves every other module builds on. Nothing here knows
//! about the game tree.

pub mod action;
pub mod config;
pub mod deck;
pub mod rng;
pub mod role;

pub use action::{Action, SettleState};
pub use config::{LearnConfig, TableConfig};
pub use deck::{Deck, DrawGuard, Rank, DECK_SIZE, RANK_COUNT, SUITS};
pub use rng::EngineRng;
pub use role::{Role, RoleMap, Seats};
