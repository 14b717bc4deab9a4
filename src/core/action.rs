//! Actions and settle classification.
//!
//! A node records the action that produced it and which roles may still
//! draw after that action. The classification is derived from the running
//! total alone; it is recomputed whenever the total changes and never set
//! by hand.

use serde::{Deserialize, Serialize};

use super::config::TableConfig;

/// Action that produced a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw a card.
    Take,
    /// Stop drawing for the rest of the hand.
    Settle,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Take => write!(f, "take"),
            Action::Settle => write!(f, "settle"),
        }
    }
}

/// Which role(s) may still draw after the latest action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettleState {
    /// Both roles keep drawing; turns alternate.
    #[default]
    BothTaking,
    /// One role is forced to settle; the role to move keeps drawing alone.
    OneSettle,
    /// Nobody draws again. The hand is over.
    BothSettle,
}

impl SettleState {
    /// Classify a running total against the table thresholds.
    ///
    /// ```
    /// use card_tree::core::{SettleState, TableConfig};
    ///
    /// let table = TableConfig::default(); // stand 17, bust 21
    /// assert_eq!(SettleState::classify(16, &table), SettleState::BothTaking);
    /// assert_eq!(SettleState::classify(17, &table), SettleState::OneSettle);
    /// assert_eq!(SettleState::classify(21, &table), SettleState::BothSettle);
    /// assert_eq!(SettleState::classify(25, &table), SettleState::BothSettle);
    /// ```
    #[must_use]
    pub fn classify(card_sum: u16, table: &TableConfig) -> Self {
        if card_sum >= table.bust_threshold {
            SettleState::BothSettle
        } else if card_sum >= table.stand_threshold {
            SettleState::OneSettle
        } else {
            SettleState::BothTaking
        }
    }

    /// Does play hand over to the other seat after this classification?
    #[must_use]
    pub fn alternates(self) -> bool {
        self == SettleState::BothTaking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let table = TableConfig::default()
            .with_stand_threshold(9)
            .with_bust_threshold(12);

        assert_eq!(SettleState::classify(0, &table), SettleState::BothTaking);
        assert_eq!(SettleState::classify(8, &table), SettleState::BothTaking);
        assert_eq!(SettleState::classify(9, &table), SettleState::OneSettle);
        assert_eq!(SettleState::classify(11, &table), SettleState::OneSettle);
        assert_eq!(SettleState::classify(12, &table), SettleState::BothSettle);
        assert_eq!(SettleState::classify(40, &table), SettleState::BothSettle);
    }

    #[test]
    fn test_stand_equal_to_bust_skips_one_settle() {
        let table = TableConfig::default()
            .with_stand_threshold(15)
            .with_bust_threshold(15);

        assert_eq!(SettleState::classify(14, &table), SettleState::BothTaking);
        assert_eq!(SettleState::classify(15, &table), SettleState::BothSettle);
    }

    #[test]
    fn test_only_both_taking_alternates() {
        assert!(SettleState::BothTaking.alternates());
        assert!(!SettleState::OneSettle.alternates());
        assert!(!SettleState::BothSettle.alternates());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Take.to_string(), "take");
        assert_eq!(Action::Settle.to_string(), "settle");
    }
}
