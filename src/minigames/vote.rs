//! Group vote: everyone picks a player, the most-picked one pays.
//!
//! Voting is anonymous and unpoliced: the reveal is gated on the raw
//! number of ballots reaching the table size, and nothing stops one
//! participant from casting twice. That mirrors the pass-the-phone play
//! style this was designed for.

use std::time::Duration;

use crate::audio::SoundEffect;
use crate::content::VoteConfig;
use crate::core::{GameRng, PlayerId};
use crate::view::{ViewState, VoteView};

use super::{Capabilities, Minigame};

/// Pause between the last ballot and the reveal.
const REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Voting controller phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VotingPhase {
    /// Ballots coming in.
    Collecting,
    /// All ballots in; reveal scheduled.
    RevealPending,
    /// Winner announced. Waiting for close.
    Revealed,
}

/// The group-vote state machine.
pub struct Voting {
    caps: Capabilities,
    question: String,
    result_text: String,
    player_count: usize,
    tallies: Vec<u32>,
    total_cast: u32,
    phase: VotingPhase,
    reveal_at: Duration,
    winner: Option<PlayerId>,
}

impl Voting {
    /// Open the vote with one selectable target per player.
    #[must_use]
    pub fn start(config: &VoteConfig, player_count: usize, caps: Capabilities) -> Self {
        let voting = Self {
            caps,
            question: config.question.clone(),
            result_text: config.result_text.clone(),
            player_count,
            tallies: vec![0; player_count],
            total_cast: 0,
            phase: VotingPhase::Collecting,
            reveal_at: Duration::ZERO,
            winner: None,
        };
        voting.render_collecting();
        voting
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> VotingPhase {
        self.phase
    }

    /// The announced winner, once revealed.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Cast one ballot for `target`.
    ///
    /// Ballots are anonymous; repeat casts by the same person count. When
    /// the cast count reaches the table size the reveal is scheduled
    /// after a short delay. No-op outside `Collecting` or for an invalid
    /// target.
    pub fn cast_vote(&mut self, target: PlayerId) {
        if self.phase != VotingPhase::Collecting || !target.is_valid(self.player_count) {
            return;
        }

        self.caps.audio.play(SoundEffect::Vote);
        self.tallies[target.number() as usize - 1] += 1;
        self.total_cast += 1;
        self.render_collecting();

        if self.total_cast >= self.player_count as u32 {
            self.phase = VotingPhase::RevealPending;
            self.reveal_at = self.caps.clock.now() + REVEAL_DELAY;
            tracing::debug!(ballots = self.total_cast, "all ballots in");
        }
    }

    fn reveal(&mut self, rng: &mut GameRng) {
        // Max tally wins; ties break uniformly at random.
        let max = self.tallies.iter().copied().max().unwrap_or(0);
        let tied: Vec<PlayerId> = self
            .tallies
            .iter()
            .enumerate()
            .filter(|(_, tally)| **tally == max)
            .map(|(index, _)| PlayerId::new(index as u8 + 1))
            .collect();
        let winner = *rng.choose(&tied).expect("at least one tally slot");

        self.caps.audio.play(SoundEffect::Fanfare);
        self.winner = Some(winner);
        self.phase = VotingPhase::Revealed;
        tracing::debug!(%winner, "vote revealed");

        self.caps.renderer.render(&ViewState::Voting(VoteView::Revealed {
            winner,
            result_text: self.result_text.clone(),
        }));
    }

    fn render_collecting(&self) {
        self.caps.renderer.render(&ViewState::Voting(VoteView::Collecting {
            question: self.question.clone(),
            votes_cast: self.total_cast,
            votes_needed: self.player_count as u32,
        }));
    }
}

impl Minigame for Voting {
    fn tick(&mut self, rng: &mut GameRng) {
        if self.phase == VotingPhase::RevealPending && self.caps.clock.now() >= self.reveal_at {
            self.reveal(rng);
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == VotingPhase::Revealed
    }

    fn teardown(&mut self) {}
}
