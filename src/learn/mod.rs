//! Epsilon-greedy move selection and value learning on a built tree.
//!
//! ## Overview
//!
//! - **Selection**: `MoveSelector` exploits the highest value in a sibling
//!   group, or explores uniformly with probability `epsilon` for non-human
//!   roles
//! - **History**: optimal learner moves are paired with the ancestor they
//!   should update (two levels up for the dealer, one for the opponent)
//! - **Backpropagation**: `update_values` drains the history, moving each
//!   ancestor toward its child by `alpha`
//!
//! ## Usage
//!
//! ```rust
//! use card_tree::core::{LearnConfig, Role, TableConfig};
//! use card_tree::learn::Learner;
//!
//! let table = TableConfig::default().with_stand_threshold(8).with_bust_threshold(10);
//! let mut learner = Learner::new(table, LearnConfig::default().with_seed(7)).unwrap();
//! learner.build(Role::Dealer);
//!
//! let start = learner.root_group().unwrap();
//! let chosen = learner.next_move(Role::Dealer, 0.1, start);
//! learner.update_values(0.5);
//!
//! let episode = learner.play_episode().unwrap();
//! assert!(learner.tree().get(*episode.path.last().unwrap()).is_final);
//! # let _ = chosen;
//! ```

pub mod backprop;
pub mod history;
pub mod learner;
pub mod selector;
pub mod stats;

pub use backprop::update_values;
pub use history::TraversalHistory;
pub use learner::{Episode, Learner};
pub use selector::{MoveSelector, Strategy};
pub use stats::LearnStats;
