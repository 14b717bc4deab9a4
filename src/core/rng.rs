//! Seeded randomness for tree building and move selection.
//!
//! Every component that needs random draws owns an `EngineRng`. The learner
//! creates one from its seed and forks a separate stream for the builder
//! (opponent value estimates) and the selector (epsilon and explore draws),
//! so the two never perturb each other.
//!
//! ```
//! use card_tree::core::EngineRng;
//!
//! let mut root = EngineRng::new(42);
//! let mut values = root.fork();
//! let mut moves = root.fork();
//!
//! let a: Vec<i32> = (0..10).map(|_| values.gen_range(0..1000)).collect();
//! let b: Vec<i32> = (0..10).map(|_| moves.gen_range(0..1000)).collect();
//! assert_ne!(a, b);
//! ```

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct EngineRng {
    inner: ChaCha8Rng,
}

impl EngineRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Split off a child stream seeded from this one.
    ///
    /// Successive forks differ; the same parent seed always yields the same
    /// sequence of forks.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let seed = self.inner.gen::<u64>();
        Self::new(seed)
    }

    /// Uniform draw in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Uniform integer in `range`. Panics on an empty range.
    pub fn gen_range(&mut self, range: Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Uniform index in `range`. Panics on an empty range.
    pub fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
