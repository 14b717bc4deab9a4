//! Card ranks and the shared deck.
//!
//! The deck is an ordered list of ranks. During tree construction it is the
//! one mutable resource shared by the whole recursion: a card is removed by
//! position to explore a branch and put back at the same position before the
//! next branch is explored. `Deck::draw` hands out a `DrawGuard` that performs
//! the put-back when dropped, so every exit path restores the deck.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of distinct ranks in a full deck.
pub const RANK_COUNT: usize = 10;

/// Copies of each rank in a full deck.
pub const SUITS: usize = 4;

/// Cards in a full deck.
pub const DECK_SIZE: usize = RANK_COUNT * SUITS;

/// Positions of the first occurrence of each distinct rank.
pub type DistinctPositions = SmallVec<[usize; RANK_COUNT]>;

/// A card rank, which is also its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Ranks in canonical deck order: 1 to 7, then the three face ranks.
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(10),
        Rank(11),
        Rank(12),
    ];

    /// Create a new rank.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Value this rank adds to the running total.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0 as u16
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered sequence of remaining ranks.
///
/// ## Example
///
/// ```
/// use card_tree::core::{Deck, Rank};
///
/// let mut deck = Deck::new();
/// let before = deck.clone();
/// {
///     let drawn = deck.draw(3);
///     assert_eq!(drawn.card(), Rank::new(4));
///     assert_eq!(drawn.len(), 39);
/// }
/// assert_eq!(deck, before);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Rank>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Create a full deck in canonical order.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.reset();
        deck
    }

    /// Create a deck holding exactly these ranks, in this order.
    ///
    /// Panics if more than a full deck's worth of cards is given.
    #[must_use]
    pub fn from_ranks(cards: Vec<Rank>) -> Self {
        assert!(
            cards.len() <= DECK_SIZE,
            "Deck holds at most {} cards, got {}",
            DECK_SIZE,
            cards.len()
        );
        Self { cards }
    }

    /// Rebuild the canonical 40-card composition.
    ///
    /// Four suits, each laid out as 1..=7 followed by the face ranks
    /// 10, 11, 12. Idempotent.
    pub fn reset(&mut self) {
        self.cards.clear();
        for _ in 0..SUITS {
            self.cards.extend_from_slice(&Rank::ALL);
        }
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, in order.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Card at a position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Rank> {
        self.cards.get(position).copied()
    }

    /// Positions worth exploring from this deck.
    ///
    /// Drawing any copy of a rank leads to the same state, so only the first
    /// remaining occurrence of each rank is returned, in deck order.
    #[must_use]
    pub fn distinct_positions(&self) -> DistinctPositions {
        let mut seen = [false; u8::MAX as usize + 1];
        let mut positions = DistinctPositions::new();
        for (position, rank) in self.cards.iter().enumerate() {
            let slot = &mut seen[rank.0 as usize];
            if !*slot {
                *slot = true;
                positions.push(position);
            }
        }
        positions
    }

    /// Remove the card at `position` for the lifetime of the returned guard.
    ///
    /// The card goes back to the same position when the guard drops.
    /// Panics if `position` is out of range.
    pub fn draw(&mut self, position: usize) -> DrawGuard<'_> {
        assert!(
            position < self.cards.len(),
            "Draw position {} out of range for deck of {}",
            position,
            self.cards.len()
        );
        let card = self.cards.remove(position);
        DrawGuard {
            deck: self,
            position,
            card,
        }
    }
}

/// A card held out of the deck.
///
/// Dereferences to the remaining deck so nested draws can be made through
/// it. Dropping the guard reinserts the card at its original position.
#[derive(Debug)]
pub struct DrawGuard<'a> {
    deck: &'a mut Deck,
    position: usize,
    card: Rank,
}

impl DrawGuard<'_> {
    /// The card that was drawn.
    #[must_use]
    pub fn card(&self) -> Rank {
        self.card
    }

    /// Where the card came from.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Deref for DrawGuard<'_> {
    type Target = Deck;

    fn deref(&self) -> &Self::Target {
        self.deck
    }
}

impl DerefMut for DrawGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.deck
    }
}

impl Drop for DrawGuard<'_> {
    fn drop(&mut self) {
        self.deck.cards.insert(self.position, self.card);
    }
}
