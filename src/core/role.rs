//! Turn roles and per-role data storage.
//!
//! ## Role
//!
//! Which side acts at a node. `Player` is the human seat; `Dealer` and
//! `Opponent` are learner seats that differ in how far up the tree their
//! chosen moves propagate value.
//!
//! ## RoleMap
//!
//! Fixed-size per-role storage indexed by `Role`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Identifier for which side acts at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The human seat.
    Player,
    /// Learner seat whose decisions are two plies apart.
    Dealer,
    /// Learner seat whose decisions are one ply apart.
    Opponent,
}

impl Role {
    /// Number of roles.
    pub const COUNT: usize = 3;

    /// All roles, in index order.
    pub const ALL: [Role; Role::COUNT] = [Role::Player, Role::Dealer, Role::Opponent];

    /// Dense index of this role.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Role::Player => 0,
            Role::Dealer => 1,
            Role::Opponent => 2,
        }
    }

    /// How many levels above a chosen node its value is propagated to.
    ///
    /// `None` means moves chosen for this role are never recorded.
    #[must_use]
    pub const fn propagation_depth(self) -> Option<usize> {
        match self {
            Role::Player => None,
            Role::Dealer => Some(2),
            Role::Opponent => Some(1),
        }
    }

    /// Whether only leaf choices are recorded for this role.
    ///
    /// An opponent's value is only pulled toward a hand it finished.
    #[must_use]
    pub const fn records_leaves_only(self) -> bool {
        matches!(self, Role::Opponent)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Player => write!(f, "player"),
            Role::Dealer => write!(f, "dealer"),
            Role::Opponent => write!(f, "opponent"),
        }
    }
}

/// The two seats at the table.
///
/// Play alternates between the human seat and exactly one rival seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seats {
    pub human: Role,
    pub rival: Role,
}

impl Seats {
    /// Seat the human against a rival.
    #[must_use]
    pub const fn new(human: Role, rival: Role) -> Self {
        Self { human, rival }
    }

    /// Role that takes over when play alternates away from `role`.
    #[must_use]
    pub fn other(self, role: Role) -> Role {
        if role == self.human {
            self.rival
        } else {
            self.human
        }
    }
}

/// Per-role data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use card_tree::core::{Role, RoleMap};
///
/// let mut moves: RoleMap<u32> = RoleMap::default();
/// moves[Role::Dealer] += 1;
/// assert_eq!(moves[Role::Dealer], 1);
/// assert_eq!(moves[Role::Player], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleMap<T> {
    data: [T; Role::COUNT],
}

impl<T> RoleMap<T> {
    /// Create a new RoleMap with values from a factory function.
    pub fn new(factory: impl Fn(Role) -> T) -> Self {
        Self {
            data: Role::ALL.map(factory),
        }
    }

    /// Get a reference to a role's data.
    #[must_use]
    pub fn get(&self, role: Role) -> &T {
        &self.data[role.index()]
    }

    /// Get a mutable reference to a role's data.
    pub fn get_mut(&mut self, role: Role) -> &mut T {
        &mut self.data[role.index()]
    }

    /// Iterate over (Role, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Role> for RoleMap<T> {
    type Output = T;

    fn index(&self, role: Role) -> &Self::Output {
        self.get(role)
    }
}

impl<T> IndexMut<Role> for RoleMap<T> {
    fn index_mut(&mut self, role: Role) -> &mut Self::Output {
        self.get_mut(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_index_matches_all() {
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_propagation_depth() {
        assert_eq!(Role::Player.propagation_depth(), None);
        assert_eq!(Role::Dealer.propagation_depth(), Some(2));
        assert_eq!(Role::Opponent.propagation_depth(), Some(1));
    }

    #[test]
    fn test_records_leaves_only() {
        assert!(Role::Opponent.records_leaves_only());
        assert!(!Role::Dealer.records_leaves_only());
        assert!(!Role::Player.records_leaves_only());
    }

    #[test]
    fn test_seats_alternate() {
        let seats = Seats::new(Role::Player, Role::Dealer);
        assert_eq!(seats.other(Role::Player), Role::Dealer);
        assert_eq!(seats.other(Role::Dealer), Role::Player);

        let seats = Seats::new(Role::Player, Role::Opponent);
        assert_eq!(seats.other(Role::Player), Role::Opponent);
        assert_eq!(seats.other(Role::Opponent), Role::Player);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", Role::Dealer), "dealer");
        assert_eq!(format!("{}", Role::Player), "player");
    }

    #[test]
    fn test_role_map() {
        let mut map: RoleMap<i32> = RoleMap::new(|r| r.index() as i32 * 10);

        assert_eq!(map[Role::Player], 0);
        assert_eq!(map[Role::Opponent], 20);

        map[Role::Dealer] = 5;
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[1], (Role::Dealer, &5));
    }

    #[test]
    fn test_role_map_serialization() {
        let map: RoleMap<u32> = RoleMap::new(|r| r.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: RoleMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
