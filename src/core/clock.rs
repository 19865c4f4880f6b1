//! Clock abstraction for timed mini-games.
//!
//! Controllers never read wall-clock time directly. They record the
//! [`Clock::now`] value when they start and compare against it on each
//! tick, so tick processing is a pure function of `(state, now)`. Hosts
//! use [`SystemClock`]; tests use [`ManualClock`] and advance it by hand.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Monotonic time source.
///
/// `now()` returns the time elapsed since the clock's own epoch. Only
/// differences between readings are meaningful.
pub trait Clock: Send + Sync {
    /// Current monotonic time.
    fn now(&self) -> Duration;
}

/// Real wall-clock time, anchored at construction.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock anchored at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Host-controlled clock. Time moves only when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<Duration>,
}

impl ManualClock {
    /// Create a clock starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now += delta;
    }

    /// Jump the clock to an absolute reading.
    pub fn set(&self, to: Duration) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock().expect("clock lock poisoned")
    }
}
