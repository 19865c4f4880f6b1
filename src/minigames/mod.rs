//! Mini-game controllers.
//!
//! Four independent state machines, one per interactive task kind. They
//! share a contract: constructed (and thereby started) by the engine,
//! advanced by `tick`, finished at exactly one terminal phase, and torn
//! down through `try_close`, which only succeeds from the terminal
//! phase, letting the engine advance the turn exactly once per task.
//!
//! Controllers never spawn timers. They snapshot the clock when they
//! start and recompute everything from `(state, now)` on each tick, so a
//! host ticking at 50 ms and a test advancing a [`ManualClock`] by five
//! seconds in one step see the same transitions.
//!
//! [`ManualClock`]: crate::core::ManualClock

mod countdown;
mod fuse;
mod spinner;
mod vote;

use std::sync::Arc;

pub use countdown::{Countdown, CountdownPhase};
pub use fuse::{FusePhase, FuseTimer};
pub use spinner::{SpinnerPhase, SpinnerWheel};
pub use vote::{Voting, VotingPhase};

use crate::audio::AudioSink;
use crate::core::{Clock, GameRng};
use crate::view::Renderer;

/// Capability bundle injected into every controller.
#[derive(Clone)]
pub struct Capabilities {
    pub renderer: Arc<dyn Renderer>,
    pub audio: Arc<dyn AudioSink>,
    pub clock: Arc<dyn Clock>,
}

/// Contract shared by the four controllers.
pub trait Minigame {
    /// Advance time-driven state. Safe to call at any cadence.
    fn tick(&mut self, rng: &mut GameRng);

    /// Has the controller reached its terminal phase?
    fn is_terminal(&self) -> bool;

    /// Release any live resources (timers, looping effects). Idempotent;
    /// called on close and on engine teardown.
    fn teardown(&mut self);

    /// Close the controller. Succeeds only from the terminal phase;
    /// anything else is a no-op returning `false`.
    fn try_close(&mut self) -> bool {
        if self.is_terminal() {
            self.teardown();
            true
        } else {
            false
        }
    }
}
