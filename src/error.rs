//! Error types for session setup and content loading.
//!
//! Only setup can fail. Once a session is running, invalid calls
//! (double-clicks, actions against a closed mini-game) are tolerated as
//! no-ops rather than surfaced as errors.

use thiserror::Error;

/// Errors surfaced while configuring or starting a session.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum GameError {
    /// Player count outside the supported table size.
    #[error("player count must be between 2 and 20, got {got}")]
    InvalidPlayerCount {
        /// The rejected player count.
        got: usize,
    },

    /// `start()` was called with no difficulty tiers selected.
    #[error("at least one difficulty tier must be selected")]
    NoDifficultySelected,

    /// The selected tiers yield zero tasks or penalties.
    ///
    /// Checked at `start()` so a session never begins with a pool that
    /// would fault on the first draw.
    #[error("no {what} available for the selected difficulty tiers")]
    EmptyContent {
        /// Which pool was empty ("tasks" or "penalties").
        what: &'static str,
    },

    /// A content table failed to deserialize.
    #[error("malformed content table: {0}")]
    ContentFormat(#[from] serde_json::Error),
}
