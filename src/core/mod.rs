//! Core types: players, session configuration, RNG, and the clock.

mod clock;
mod config;
mod player;
mod rng;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{SessionConfig, Tier, MAX_PLAYERS, MIN_PLAYERS};
pub use player::PlayerId;
pub use rng::GameRng;
