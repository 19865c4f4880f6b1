//! Burning-fuse mini-game: pass the task around before the bomb goes off.

use std::time::Duration;

use crate::audio::{SizzleSound, SoundEffect};
use crate::content::{FuseConfig, FuseSound};
use crate::core::GameRng;
use crate::view::{FuseView, FuseWarning, ViewState};

use super::{Capabilities, Minigame};

/// Fuse controller phases. Closing from `Exploded` drops the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FusePhase {
    /// Fuse lit, burning toward the explosion.
    Armed,
    /// Fuse ran out (or was skipped). Waiting for close.
    Exploded,
}

/// The burning-fuse state machine.
pub struct FuseTimer {
    caps: Capabilities,
    config: FuseConfig,
    task_text: String,
    phase: FusePhase,
    duration: Duration,
    started_at: Duration,
    sizzle: Option<Box<dyn SizzleSound>>,
}

impl FuseTimer {
    /// Arm the fuse. The duration formula is resolved against the table
    /// size; the sizzle loop starts immediately.
    #[must_use]
    pub fn start(
        task_text: String,
        config: FuseConfig,
        player_count: usize,
        caps: Capabilities,
    ) -> Self {
        let duration = config.duration.resolve(player_count);
        tracing::debug!(?duration, "fuse armed");

        let sizzle = caps.audio.start_sizzle();
        let started_at = caps.clock.now();

        let timer = Self {
            caps,
            config,
            task_text,
            phase: FusePhase::Armed,
            duration,
            started_at,
            sizzle: Some(sizzle),
        };
        timer.render_burning(0.0);
        timer
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> FusePhase {
        self.phase
    }

    /// Burn progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.phase == FusePhase::Exploded {
            return 1.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = self.caps.clock.now().saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Give up passing and detonate immediately.
    pub fn skip(&mut self) {
        if self.phase == FusePhase::Armed {
            self.explode();
        }
    }

    fn explode(&mut self) {
        self.stop_sizzle();

        let effect = match self.config.sound {
            FuseSound::Explosion => SoundEffect::Explosion,
            FuseSound::Buzzer => SoundEffect::Buzzer,
        };
        self.caps.audio.play(effect);

        self.phase = FusePhase::Exploded;
        tracing::debug!("fuse exploded");
        self.caps.renderer.render(&ViewState::Fuse(FuseView::Exploded {
            result_text: self.config.result_text.clone(),
        }));
    }

    fn stop_sizzle(&mut self) {
        if let Some(mut sizzle) = self.sizzle.take() {
            sizzle.stop();
        }
    }

    fn render_burning(&self, progress: f64) {
        let warning = if progress > 0.7 {
            FuseWarning::Hurry
        } else if progress > 0.5 {
            FuseWarning::Faster
        } else {
            FuseWarning::KeepPassing
        };

        self.caps.renderer.render(&ViewState::Fuse(FuseView::Burning {
            task_text: self.task_text.clone(),
            progress,
            warning,
        }));
    }
}

impl Minigame for FuseTimer {
    fn tick(&mut self, _rng: &mut GameRng) {
        if self.phase != FusePhase::Armed {
            return;
        }

        let progress = self.progress();

        if let Some(sizzle) = self.sizzle.as_mut() {
            sizzle.intensify(1.0 + progress);
        }
        self.render_burning(progress);

        if progress >= 1.0 {
            self.explode();
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == FusePhase::Exploded
    }

    fn teardown(&mut self) {
        self.stop_sizzle();
    }
}

impl Drop for FuseTimer {
    fn drop(&mut self) {
        // A dropped controller must not leave the sizzle loop running.
        self.stop_sizzle();
    }
}
