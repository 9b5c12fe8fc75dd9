//! Player identity and clamped energy.

use serde::{Deserialize, Serialize};

/// Maximum energy a player can hold.
pub const MAX_ENERGY: u8 = 100;

/// Energy both players hold at the start of every round.
pub const START_ENERGY: u8 = 50;

/// Identifier for one of the two fixed player slots.
///
/// The game always has exactly two players, so the identifier is a closed
/// enum rather than a numeric id: every player has a total [`opponent`].
///
/// [`opponent`]: PlayerId::opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerId {
    /// The first player.
    One,
    /// The second player.
    Two,
}

impl PlayerId {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Array index for per-player storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// State for a single player.
///
/// Energy is private so that every mutation goes through the clamped
/// operations: it stays in `[0, MAX_ENERGY]` for the player's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name, fixed for the process lifetime.
    pub name: String,
    energy: u8,
}

impl Player {
    /// Create a player at the starting energy.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            energy: START_ENERGY,
        }
    }

    /// Current energy.
    #[must_use]
    pub const fn energy(&self) -> u8 {
        self.energy
    }

    /// Gain energy, clamped to [`MAX_ENERGY`]. Returns the new energy.
    pub fn gain(&mut self, amount: u8) -> u8 {
        self.energy = self.energy.saturating_add(amount).min(MAX_ENERGY);
        self.energy
    }

    /// Lose energy, clamped to zero. Returns the new energy.
    pub fn lose(&mut self, amount: u8) -> u8 {
        self.energy = self.energy.saturating_sub(amount);
        self.energy
    }

    /// Whether this player has been reduced to zero energy.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.energy == 0
    }

    /// Reset energy to [`START_ENERGY`] for a new round.
    pub fn reset(&mut self) {
        self.energy = START_ENERGY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_at_half_energy() {
        let player = Player::new("Yad");
        assert_eq!(player.name, "Yad");
        assert_eq!(player.energy(), START_ENERGY);
        assert!(!player.is_defeated());
    }

    #[test]
    fn test_gain_clamps_at_max() {
        let mut player = Player::new("Yad");
        assert_eq!(player.gain(30), 80);
        assert_eq!(player.gain(30), MAX_ENERGY);
        // Saturating even for amounts that would overflow u8
        assert_eq!(player.gain(u8::MAX), MAX_ENERGY);
    }

    #[test]
    fn test_lose_clamps_at_zero() {
        let mut player = Player::new("Diks");
        assert_eq!(player.lose(20), 30);
        assert_eq!(player.lose(200), 0);
        assert!(player.is_defeated());
    }

    #[test]
    fn test_reset_restores_start_energy() {
        let mut player = Player::new("Diks");
        player.lose(50);
        assert!(player.is_defeated());

        player.reset();
        assert_eq!(player.energy(), START_ENERGY);
        assert!(!player.is_defeated());
    }

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
        assert_eq!(PlayerId::One.opponent().opponent(), PlayerId::One);
    }

    #[test]
    fn test_index_is_distinct() {
        assert_eq!(PlayerId::One.index(), 0);
        assert_eq!(PlayerId::Two.index(), 1);
    }
}
