//! Audio capability consumed by the engine.
//!
//! The core never synthesizes sound; it fires effect identifiers at an
//! [`AudioSink`] and moves on. A sink that drops every effect is a valid
//! implementation; no state transition may depend on audio succeeding.

/// One-shot sound effects the engine can request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SoundEffect {
    /// Task card reveal.
    CardFlip,
    /// Fuse detonation, tower fall.
    Explosion,
    /// Failure / harsh time-up.
    Buzzer,
    /// Countdown go-signal.
    Chime,
    /// Winner announcement.
    Fanfare,
    /// Vote cast blip.
    Vote,
    /// Wheel segment click.
    SpinnerClick,
    /// Suspense roll while the wheel spins.
    Drumroll { seconds: u32 },
    /// Per-second beep in a countdown's final stretch.
    CountdownBeep { is_final: bool },
}

/// Handle to the looping fuse-sizzle effect.
///
/// Returned by [`AudioSink::start_sizzle`]; the fuse controller
/// intensifies it as the fuse burns down and must stop it on every exit
/// path (explosion, skip, teardown).
pub trait SizzleSound: Send {
    /// Scale the sizzle. `factor` starts at 1.0 and grows with progress.
    fn intensify(&mut self, factor: f64);

    /// Stop the loop. Idempotent.
    fn stop(&mut self);
}

/// Fire-and-forget audio output.
pub trait AudioSink: Send + Sync {
    /// Play a one-shot effect.
    fn play(&self, effect: SoundEffect);

    /// Start the looping fuse sizzle and hand back its control handle.
    fn start_sizzle(&self) -> Box<dyn SizzleSound>;
}

/// Sink that drops every effect. Useful for headless hosts and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&self, _effect: SoundEffect) {}

    fn start_sizzle(&self) -> Box<dyn SizzleSound> {
        Box::new(NullSizzle)
    }
}

struct NullSizzle;

impl SizzleSound for NullSizzle {
    fn intensify(&mut self, _factor: f64) {}
    fn stop(&mut self) {}
}
