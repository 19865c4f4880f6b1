//! Player identification and turn rotation.
//!
//! Players are numbered 1..=N, matching how they are announced at the
//! table ("Player 3 drinks"). There is no player 0.

use serde::{Deserialize, Serialize};

/// 1-based player number, valid in `[1, player_count]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first player. Every session starts here.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Get the raw player number (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The player after this one, wrapping back to player 1.
    ///
    /// ```
    /// use block_party::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(2).next(4), PlayerId::new(3));
    /// assert_eq!(PlayerId::new(4).next(4), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self((self.0 % player_count as u8) + 1)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use block_party::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }

    /// Check that this ID is valid for a game with `player_count` players.
    #[must_use]
    pub fn is_valid(self, player_count: usize) -> bool {
        self.0 >= 1 && (self.0 as usize) <= player_count
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
