//! Spinning wheel: one equal segment per player, fate picks one.
//!
//! The winner is chosen up front when the spin starts; the rotation
//! target and the click track are presentation only. The reveal never
//! derives anything from the rendered wheel.

use std::time::Duration;

use crate::audio::SoundEffect;
use crate::content::SpinnerConfig;
use crate::core::{GameRng, PlayerId};
use crate::view::{SpinnerView, ViewState};

use super::{Capabilities, Minigame};

/// How long the wheel visibly spins before the reveal.
const SPIN_DURATION: Duration = Duration::from_secs(4);
/// Spacing of segment-pass clicks during the spin.
const CLICK_INTERVAL: Duration = Duration::from_millis(100);
/// Click track length cap.
const MAX_CLICKS: u32 = 30;
/// Drumroll length in seconds.
const DRUMROLL_SECS: u32 = 3;

/// Spinner controller phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinnerPhase {
    /// Wheel built, waiting for the spin.
    Ready,
    /// Wheel turning; winner already decided.
    Spinning,
    /// Wheel stopped. Waiting for close.
    Revealed,
}

/// The spinning-wheel state machine.
pub struct SpinnerWheel {
    caps: Capabilities,
    result_text: String,
    player_count: usize,
    phase: SpinnerPhase,
    winner: Option<PlayerId>,
    reveal_at: Duration,
    next_click_at: Duration,
    clicks_played: u32,
}

impl SpinnerWheel {
    /// Build the wheel with one equal segment per player.
    #[must_use]
    pub fn start(
        task_text: String,
        config: &SpinnerConfig,
        player_count: usize,
        caps: Capabilities,
    ) -> Self {
        let wheel = Self {
            caps,
            result_text: config.result_text.clone(),
            player_count,
            phase: SpinnerPhase::Ready,
            winner: None,
            reveal_at: Duration::ZERO,
            next_click_at: Duration::ZERO,
            clicks_played: 0,
        };
        wheel
            .caps
            .renderer
            .render(&ViewState::Spinner(SpinnerView::Ready {
                task_text,
                segments: player_count,
            }));
        wheel
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SpinnerPhase {
        self.phase
    }

    /// The chosen player, fixed at spin time, announced at reveal.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Spin the wheel. No-op unless `Ready`.
    ///
    /// Picks the winning segment immediately; the multi-second spin that
    /// follows is theater.
    pub fn spin(&mut self, rng: &mut GameRng) {
        if self.phase != SpinnerPhase::Ready {
            return;
        }

        self.caps.audio.play(SoundEffect::Drumroll {
            seconds: DRUMROLL_SECS,
        });

        let winning_segment = rng.gen_range_usize(0..self.player_count);
        self.winner = Some(PlayerId::new(winning_segment as u8 + 1));

        // 5..8 full turns plus the segment's center, for the renderer only.
        let extra_turns = 5.0 + rng.gen_f64() * 3.0;
        let segment_angle = 360.0 / self.player_count as f64;
        let rotation_degrees =
            extra_turns * 360.0 + winning_segment as f64 * segment_angle + segment_angle / 2.0;

        let now = self.caps.clock.now();
        self.reveal_at = now + SPIN_DURATION;
        self.next_click_at = now + CLICK_INTERVAL;
        self.phase = SpinnerPhase::Spinning;
        tracing::debug!(winner = %self.winner.expect("just set"), "wheel spinning");

        self.caps
            .renderer
            .render(&ViewState::Spinner(SpinnerView::Spinning {
                rotation_degrees,
                segments: self.player_count,
            }));
    }

    fn reveal(&mut self) {
        let winner = self.winner.expect("spin picked a winner");
        self.caps.audio.play(SoundEffect::Fanfare);
        self.phase = SpinnerPhase::Revealed;
        tracing::debug!(%winner, "wheel stopped");

        self.caps
            .renderer
            .render(&ViewState::Spinner(SpinnerView::Revealed {
                winner,
                result_text: self.result_text.clone(),
            }));
    }
}

impl Minigame for SpinnerWheel {
    fn tick(&mut self, _rng: &mut GameRng) {
        if self.phase != SpinnerPhase::Spinning {
            return;
        }

        let now = self.caps.clock.now();

        while self.clicks_played < MAX_CLICKS && now >= self.next_click_at {
            self.caps.audio.play(SoundEffect::SpinnerClick);
            self.clicks_played += 1;
            self.next_click_at += CLICK_INTERVAL;
        }

        if now >= self.reveal_at {
            self.reveal();
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == SpinnerPhase::Revealed
    }

    fn teardown(&mut self) {}
}
