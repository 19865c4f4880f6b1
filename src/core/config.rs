//! Session configuration: table size and difficulty selection.
//!
//! A [`SessionConfig`] is assembled by the setup screen and handed to the
//! engine at `start()`. It is immutable for the lifetime of the session;
//! changing it means going back to setup.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Smallest playable table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 20;

/// Difficulty classification of content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Calm,
    Mild,
    Crazy,
}

impl Tier {
    /// All tiers, mildest first.
    pub const ALL: [Tier; 3] = [Tier::Calm, Tier::Mild, Tier::Crazy];
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Calm => "calm",
            Tier::Mild => "mild",
            Tier::Crazy => "crazy",
        };
        write!(f, "{name}")
    }
}

/// Immutable per-session configuration.
///
/// ```
/// use block_party::core::{SessionConfig, Tier};
///
/// let config = SessionConfig::new(4, [Tier::Calm, Tier::Mild]).unwrap();
/// assert_eq!(config.player_count(), 4);
/// assert!(config.has_tier(Tier::Calm));
/// assert!(!config.has_tier(Tier::Crazy));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    player_count: usize,
    difficulties: BTreeSet<Tier>,
}

impl SessionConfig {
    /// Create a session configuration.
    ///
    /// The player count must lie in `[MIN_PLAYERS, MAX_PLAYERS]`. An empty
    /// difficulty selection is accepted here and rejected by the engine at
    /// `start()`, matching where the setup screen reports it.
    pub fn new(
        player_count: usize,
        difficulties: impl IntoIterator<Item = Tier>,
    ) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount { got: player_count });
        }

        Ok(Self {
            player_count,
            difficulties: difficulties.into_iter().collect(),
        })
    }

    /// Number of players at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Selected difficulty tiers, mildest first.
    pub fn difficulties(&self) -> impl Iterator<Item = Tier> + '_ {
        self.difficulties.iter().copied()
    }

    /// Is the given tier selected?
    #[must_use]
    pub fn has_tier(&self, tier: Tier) -> bool {
        self.difficulties.contains(&tier)
    }

    /// True when no difficulty tier is selected.
    #[must_use]
    pub fn no_difficulties(&self) -> bool {
        self.difficulties.is_empty()
    }
}
