//! Render capability and the view vocabulary.
//!
//! After every state transition the engine pushes a [`ViewState`] at the
//! injected [`Renderer`]. Rendering is pure presentation: the core never
//! reads anything back, and rendering the same state twice must be
//! harmless.

use crate::core::{PlayerId, Tier};

/// Everything the presentation layer can be asked to show.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    /// The session-config collection screen.
    Setup,

    /// Turn banner and counters, refreshed after every mutation.
    SessionStats {
        current_player: PlayerId,
        tasks_completed: u32,
        blocks_remaining: u32,
    },

    /// A freshly drawn task card, text already token-substituted.
    TaskCard {
        text: String,
        tier: Tier,
        interactive: bool,
    },

    /// Burning-fuse mini-game.
    Fuse(FuseView),
    /// Countdown challenge mini-game.
    Countdown(CountdownView),
    /// Group vote mini-game.
    Voting(VoteView),
    /// Spinning wheel mini-game.
    Spinner(SpinnerView),

    /// The tower fell: penalty for the player who toppled it.
    Penalty { player: PlayerId, text: String },
}

/// Escalating urgency text over the burning fuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FuseWarning {
    /// Below half burned.
    KeepPassing,
    /// Past half burned.
    Faster,
    /// Past 70% burned.
    Hurry,
}

/// Fuse mini-game frames.
#[derive(Clone, Debug, PartialEq)]
pub enum FuseView {
    /// Fuse is burning. `progress` is in `[0, 1]`.
    Burning {
        task_text: String,
        progress: f64,
        warning: FuseWarning,
    },
    /// The fuse ran out (or was skipped onto the result).
    Exploded { result_text: String },
}

/// Ring recolor thresholds for the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    /// Past half elapsed.
    Warning,
    /// Past 80% elapsed.
    Danger,
}

/// Countdown mini-game frames.
#[derive(Clone, Debug, PartialEq)]
pub enum CountdownView {
    /// Waiting for the player to press start.
    Ready {
        task_text: String,
        duration_secs: u32,
    },
    /// Ticking. `ring_offset` is `circumference * elapsed / duration`.
    Running {
        remaining_secs: u32,
        ring_offset: f64,
        urgency: Urgency,
    },
    /// Challenge survived.
    Completed,
    /// Player gave up or was judged to have failed.
    Failed,
}

/// Group-vote frames.
#[derive(Clone, Debug, PartialEq)]
pub enum VoteView {
    /// Ballots still coming in. Tallies stay hidden.
    Collecting {
        question: String,
        votes_cast: u32,
        votes_needed: u32,
    },
    /// Winner announced.
    Revealed {
        winner: PlayerId,
        result_text: String,
    },
}

/// Spinning-wheel frames.
#[derive(Clone, Debug, PartialEq)]
pub enum SpinnerView {
    /// Wheel built, waiting for the spin.
    Ready { task_text: String, segments: usize },
    /// Wheel turning toward `rotation_degrees` (presentation only).
    Spinning {
        rotation_degrees: f64,
        segments: usize,
    },
    /// Wheel stopped on a player.
    Revealed {
        winner: PlayerId,
        result_text: String,
    },
}

/// Presentation output consumed by the engine.
pub trait Renderer: Send + Sync {
    /// Show the given view. Must be idempotent and must not fail.
    fn render(&self, view: &ViewState);
}

/// Renderer that shows nothing. Useful for headless hosts and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&self, _view: &ViewState) {}
}
