//! # block-party
//!
//! Engine for a turn-based party game played around a block tower:
//! players take turns pulling a block and drawing a task. Standard tasks
//! resolve instantly; interactive tasks open one of four timed
//! mini-games (burning fuse, countdown challenge, group vote, spinning
//! wheel) that defers the turn advance until it closes. When the tower
//! falls, a penalty ends the session.
//!
//! ## Design Principles
//!
//! 1. **Capabilities In, Never Out**: Rendering, audio, and the clock
//!    are injected traits. The core fires view states and effect IDs at
//!    them and never reads anything back.
//!
//! 2. **Deterministic Under a Seed**: Every shuffle, draw, tie-break,
//!    and `{other}` resolution flows through one seedable RNG.
//!
//! 3. **Pure Ticks**: No internal timers or threads. The host calls
//!    `tick()`; controllers recompute from `(state, now)`, so a manual
//!    test clock and a 50 ms UI loop see identical transitions.
//!
//! ## Modules
//!
//! - `core`: Player IDs, session config, RNG, clock abstraction
//! - `content`: Task/penalty content and the tier-keyed library
//! - `pool`: Shuffled draw pools with auto-reshuffle
//! - `text`: `{player}`/`{all}`/`{other}` token substitution
//! - `minigames`: The four interactive controllers
//! - `engine`: Turn orchestration and the penalty flow
//! - `view`, `audio`: Capability traits consumed by the core

pub mod audio;
pub mod content;
pub mod core;
pub mod engine;
pub mod error;
pub mod minigames;
pub mod pool;
pub mod text;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Clock, GameRng, ManualClock, PlayerId, SessionConfig, SystemClock, Tier, MAX_PLAYERS,
    MIN_PLAYERS,
};

pub use crate::content::{
    ContentLibrary, CountdownConfig, DurationFormula, FuseConfig, FuseSound, Penalty,
    SpinnerConfig, Task, TaskKind, Tiered, VoteConfig,
};

pub use crate::engine::{GameSession, MinigameKind, TurnEngine, STARTING_BLOCKS};

pub use crate::error::GameError;

pub use crate::minigames::{
    Capabilities, Countdown, CountdownPhase, FusePhase, FuseTimer, Minigame, SpinnerPhase,
    SpinnerWheel, Voting, VotingPhase,
};

pub use crate::pool::DrawPool;

pub use crate::audio::{AudioSink, NullAudio, SizzleSound, SoundEffect};

pub use crate::view::{
    CountdownView, FuseView, FuseWarning, NullRenderer, Renderer, SpinnerView, Urgency, ViewState,
    VoteView,
};
