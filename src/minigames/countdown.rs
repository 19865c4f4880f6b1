//! Countdown challenge: beat the clock, or fail and take the penalty.

use std::time::Duration;

use crate::audio::SoundEffect;
use crate::content::CountdownConfig;
use crate::core::GameRng;
use crate::view::{CountdownView, Urgency, ViewState};

use super::{Capabilities, Minigame};

/// Ring geometry shared with the presentation layer (SVG circle r=45).
pub(crate) const RING_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * 45.0;

/// Beeps start inside the final five seconds.
const BEEP_WINDOW_SECS: u32 = 5;

/// Countdown controller phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownPhase {
    /// Waiting for the player to press start. No clock running.
    Ready,
    /// Counting down.
    Running,
    /// Survived the full duration.
    Completed,
    /// Gave up (or was judged out) before time ran out.
    Failed,
}

/// The countdown-challenge state machine.
pub struct Countdown {
    caps: Capabilities,
    task_text: String,
    duration: Duration,
    duration_secs: u32,
    phase: CountdownPhase,
    started_at: Duration,
    last_beeped: Option<u32>,
}

impl Countdown {
    /// Present the challenge. The clock does not start until [`begin`].
    ///
    /// `task_text` is the challenge text with player tokens already
    /// substituted for the current turn.
    ///
    /// [`begin`]: Countdown::begin
    #[must_use]
    pub fn start(task_text: String, config: &CountdownConfig, caps: Capabilities) -> Self {
        let countdown = Self {
            caps,
            task_text,
            duration: Duration::from_secs(u64::from(config.duration)),
            duration_secs: config.duration,
            phase: CountdownPhase::Ready,
            started_at: Duration::ZERO,
            last_beeped: None,
        };
        countdown
            .caps
            .renderer
            .render(&ViewState::Countdown(CountdownView::Ready {
                task_text: countdown.task_text.clone(),
                duration_secs: countdown.duration_secs,
            }));
        countdown
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    /// Start the clock. No-op unless the controller is `Ready`.
    pub fn begin(&mut self) {
        if self.phase != CountdownPhase::Ready {
            return;
        }

        self.caps.audio.play(SoundEffect::Chime);
        self.started_at = self.caps.clock.now();
        self.phase = CountdownPhase::Running;
        tracing::debug!(secs = self.duration_secs, "countdown running");

        self.caps
            .renderer
            .render(&ViewState::Countdown(CountdownView::Running {
                remaining_secs: self.duration_secs,
                ring_offset: 0.0,
                urgency: Urgency::Normal,
            }));
    }

    /// The player failed the challenge. No-op unless `Running`.
    pub fn fail(&mut self) {
        if self.phase != CountdownPhase::Running {
            return;
        }

        self.caps.audio.play(SoundEffect::Buzzer);
        self.phase = CountdownPhase::Failed;
        tracing::debug!("countdown failed");
        self.caps
            .renderer
            .render(&ViewState::Countdown(CountdownView::Failed));
    }

    fn complete(&mut self) {
        self.caps.audio.play(SoundEffect::Fanfare);
        self.phase = CountdownPhase::Completed;
        tracing::debug!("countdown completed");
        self.caps
            .renderer
            .render(&ViewState::Countdown(CountdownView::Completed));
    }
}

impl Minigame for Countdown {
    fn tick(&mut self, _rng: &mut GameRng) {
        if self.phase != CountdownPhase::Running {
            return;
        }

        let elapsed = self.caps.clock.now().saturating_sub(self.started_at);
        if elapsed >= self.duration {
            self.complete();
            return;
        }

        let total = self.duration.as_secs_f64();
        let progress = elapsed.as_secs_f64() / total;
        let remaining = (total - elapsed.as_secs_f64()).ceil() as u32;

        // One beep per remaining-second inside the final window,
        // regardless of tick cadence.
        if remaining <= BEEP_WINDOW_SECS && remaining > 0 && self.last_beeped != Some(remaining) {
            self.caps.audio.play(SoundEffect::CountdownBeep {
                is_final: remaining == 1,
            });
            self.last_beeped = Some(remaining);
        }

        let urgency = if progress > 0.8 {
            Urgency::Danger
        } else if progress > 0.5 {
            Urgency::Warning
        } else {
            Urgency::Normal
        };

        self.caps
            .renderer
            .render(&ViewState::Countdown(CountdownView::Running {
                remaining_secs: remaining,
                ring_offset: RING_CIRCUMFERENCE * progress,
                urgency,
            }));
    }

    fn is_terminal(&self) -> bool {
        matches!(
            self.phase,
            CountdownPhase::Completed | CountdownPhase::Failed
        )
    }

    fn teardown(&mut self) {}
}
