//! Players and seats.
//!
//! ## Player
//!
//! Immutable `(name, role)` pair created once per match by role assignment.
//! The name is the external, case-sensitive identifier.
//!
//! ## Seat
//!
//! 0-based position in turn order. Seats advance circularly.

use serde::{Deserialize, Serialize};

use super::ruleset::RoleId;

/// Position in turn order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat(pub usize);

impl Seat {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// The seat after this one, wrapping at `player_count`.
    ///
    /// ```
    /// use avalon_engine::core::Seat;
    ///
    /// assert_eq!(Seat::new(3).next(5), Seat::new(4));
    /// assert_eq!(Seat::new(4).next(5), Seat::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        debug_assert!(player_count > 0, "Must have at least 1 player");
        Self((self.0 + 1) % player_count)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A seated player and their secret role.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    role: RoleId,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, role: RoleId) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> &RoleId {
        &self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_wraps() {
        let mut seat = Seat::default();
        for _ in 0..7 {
            seat = seat.next(5);
        }
        assert_eq!(seat, Seat::new(2));
        assert_eq!(format!("{}", seat), "Seat 2");
    }

    #[test]
    fn test_seat_wraps_on_large_tables() {
        assert_eq!(Seat::new(255).next(300), Seat::new(256));
        assert_eq!(Seat::new(299).next(300), Seat::new(0));
    }

    #[test]
    fn test_player_accessors() {
        let player = Player::new("Alice", RoleId::new("merlin"));
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.role().as_str(), "merlin");
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new("bob", RoleId::new("assassin"));
        let json = serde_json::to_string(&player).unwrap();
        assert_eq!(json, r#"{"name":"bob","role":"assassin"}"#);

        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
