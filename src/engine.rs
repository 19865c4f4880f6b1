//! Turn and task orchestration.
//!
//! The [`TurnEngine`] owns the [`GameSession`], deals tasks from the
//! shuffled pools, dispatches interactive tasks to their mini-game
//! controllers, rotates the active player, and runs the penalty flow
//! when the tower falls.
//!
//! The engine is a single logical actor. Nothing here spawns threads or
//! timers: the host calls [`TurnEngine::tick`] at its own cadence
//! (~50 ms in a real UI) and forwards user input to the action methods.

use std::sync::Arc;
use std::time::Duration;

use crate::audio::{AudioSink, SoundEffect};
use crate::content::{ContentLibrary, Penalty, Task, TaskKind, Tiered};
use crate::core::{Clock, GameRng, PlayerId, SessionConfig};
use crate::error::GameError;
use crate::minigames::{Capabilities, Countdown, FuseTimer, Minigame, SpinnerWheel, Voting};
use crate::pool::DrawPool;
use crate::text;
use crate::view::{Renderer, ViewState};

/// Blocks in a freshly stacked tower.
pub const STARTING_BLOCKS: u32 = 54;

/// Pause between showing a drawn card and opening its mini-game.
const PRESENTATION_DELAY: Duration = Duration::from_millis(700);

/// Which mini-game is currently open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinigameKind {
    Fuse,
    Countdown,
    Vote,
    Spinner,
}

/// One continuous play-through from setup to tower fall (or reset).
///
/// Exclusively owned and mutated by the engine; controllers only ever see
/// the values snapshot at their start.
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    current_player: PlayerId,
    tasks_completed: u32,
    blocks_remaining: u32,
    is_active: bool,
    task_pool: DrawPool<Tiered<Task>>,
    penalty_pool: DrawPool<Tiered<Penalty>>,
}

impl GameSession {
    /// The session's immutable configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Tasks drawn so far.
    #[must_use]
    pub fn tasks_completed(&self) -> u32 {
        self.tasks_completed
    }

    /// Blocks left in the tower (display counter, floored at zero).
    #[must_use]
    pub fn blocks_remaining(&self) -> u32 {
        self.blocks_remaining
    }

    /// False once the tower has fallen.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

enum ActiveMinigame {
    Fuse(FuseTimer),
    Countdown(Countdown),
    Vote(Voting),
    Spinner(SpinnerWheel),
}

impl ActiveMinigame {
    fn kind(&self) -> MinigameKind {
        match self {
            Self::Fuse(_) => MinigameKind::Fuse,
            Self::Countdown(_) => MinigameKind::Countdown,
            Self::Vote(_) => MinigameKind::Vote,
            Self::Spinner(_) => MinigameKind::Spinner,
        }
    }

    fn as_minigame_mut(&mut self) -> &mut dyn Minigame {
        match self {
            Self::Fuse(fuse) => fuse,
            Self::Countdown(countdown) => countdown,
            Self::Vote(voting) => voting,
            Self::Spinner(wheel) => wheel,
        }
    }
}

/// A drawn interactive task waiting out the presentation delay.
struct PendingDispatch {
    task: Tiered<Task>,
    card_text: String,
    open_at: Duration,
}

/// The turn/task orchestration engine.
pub struct TurnEngine {
    caps: Capabilities,
    rng: GameRng,
    library: ContentLibrary,
    session: Option<GameSession>,
    active: Option<ActiveMinigame>,
    pending: Option<PendingDispatch>,
}

impl TurnEngine {
    /// Create an engine with OS-seeded randomness.
    #[must_use]
    pub fn new(
        library: ContentLibrary,
        renderer: Arc<dyn Renderer>,
        audio: Arc<dyn AudioSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::with_rng(library, renderer, audio, clock, GameRng::from_entropy())
    }

    /// Create an engine with an explicit RNG, making every draw, shuffle,
    /// and tie-break reproducible.
    #[must_use]
    pub fn with_rng(
        library: ContentLibrary,
        renderer: Arc<dyn Renderer>,
        audio: Arc<dyn AudioSink>,
        clock: Arc<dyn Clock>,
        rng: GameRng,
    ) -> Self {
        Self {
            caps: Capabilities {
                renderer,
                audio,
                clock,
            },
            rng,
            library,
            session: None,
            active: None,
            pending: None,
        }
    }

    /// The current session, if one has been started.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Which mini-game is open, if any.
    #[must_use]
    pub fn open_minigame(&self) -> Option<MinigameKind> {
        self.active.as_ref().map(ActiveMinigame::kind)
    }

    /// Start a new session.
    ///
    /// Validates the difficulty selection and builds both pools before
    /// any session state is created: a failed `start` leaves the engine
    /// exactly as it was.
    pub fn start(&mut self, config: SessionConfig) -> Result<(), GameError> {
        if config.no_difficulties() {
            return Err(GameError::NoDifficultySelected);
        }

        let task_pool = DrawPool::new("tasks", self.library.tasks_for(&config), &mut self.rng)?;
        let penalty_pool =
            DrawPool::new("penalties", self.library.penalties_for(&config), &mut self.rng)?;

        // A restart mid-session tears the old one down first.
        self.teardown_turn();

        tracing::info!(
            players = config.player_count(),
            tasks = task_pool.len(),
            penalties = penalty_pool.len(),
            "session started"
        );

        self.session = Some(GameSession {
            config,
            current_player: PlayerId::FIRST,
            tasks_completed: 0,
            blocks_remaining: STARTING_BLOCKS,
            is_active: true,
            task_pool,
            penalty_pool,
        });
        self.render_stats();
        Ok(())
    }

    /// Pull a block: draw and present the next task.
    ///
    /// No-op while the session is inactive, a mini-game is open, or a
    /// drawn task is still waiting out its presentation delay.
    pub fn pull(&mut self) {
        if self.active.is_some() || self.pending.is_some() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.is_active {
            return;
        }

        let drawn = session.task_pool.next(&mut self.rng);
        session.tasks_completed += 1;
        session.blocks_remaining = session.blocks_remaining.saturating_sub(1);

        let card_text = text::process(
            &drawn.item.text,
            session.current_player,
            session.config.player_count(),
            &mut self.rng,
        );
        tracing::debug!(
            player = %session.current_player,
            tier = %drawn.tier,
            "task drawn"
        );

        self.caps.audio.play(SoundEffect::CardFlip);
        self.caps.renderer.render(&ViewState::TaskCard {
            text: card_text.clone(),
            tier: drawn.tier,
            interactive: drawn.item.is_interactive(),
        });

        if drawn.item.is_interactive() {
            // The mini-game opens once the card has had its moment.
            self.pending = Some(PendingDispatch {
                task: drawn,
                card_text,
                open_at: self.caps.clock.now() + PRESENTATION_DELAY,
            });
            self.render_stats();
        } else {
            self.advance_player();
        }
    }

    /// Drive time-based behavior: opens a pending mini-game once the
    /// presentation delay elapses and ticks the open controller.
    pub fn tick(&mut self) {
        if let Some(pending) = self.pending.as_ref() {
            if self.caps.clock.now() >= pending.open_at {
                let pending = self.pending.take().expect("just checked");
                self.open(pending);
            }
        }

        if let Some(active) = self.active.as_mut() {
            active.as_minigame_mut().tick(&mut self.rng);
        }
    }

    /// The tower fell: draw and present a penalty, end the session.
    ///
    /// No-op once the session is already inactive. Terminal until
    /// [`reset_to_setup`].
    ///
    /// [`reset_to_setup`]: TurnEngine::reset_to_setup
    pub fn tower_fell(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.is_active {
            return;
        }

        self.caps.audio.play(SoundEffect::Explosion);

        let penalty = session.penalty_pool.peek_random(&mut self.rng);
        let penalty_text = text::process(
            &penalty.item.text,
            session.current_player,
            session.config.player_count(),
            &mut self.rng,
        );

        session.is_active = false;
        tracing::info!(
            player = %session.current_player,
            completed = session.tasks_completed,
            "tower fell"
        );

        self.caps.renderer.render(&ViewState::Penalty {
            player: session.current_player,
            text: penalty_text,
        });

        // The session is over; nothing may keep ticking or sizzling.
        self.abort_minigame();
        self.pending = None;
    }

    /// Discard the session and return to setup.
    pub fn reset_to_setup(&mut self) {
        self.teardown_turn();
        self.session = None;
        tracing::info!("reset to setup");
        self.caps.renderer.render(&ViewState::Setup);
    }

    // === Mini-game action forwarding ===

    /// Start the open countdown's clock. No-op otherwise.
    pub fn begin(&mut self) {
        if let Some(ActiveMinigame::Countdown(countdown)) = self.active.as_mut() {
            countdown.begin();
        }
    }

    /// Fail the open countdown. No-op otherwise.
    pub fn fail(&mut self) {
        if let Some(ActiveMinigame::Countdown(countdown)) = self.active.as_mut() {
            countdown.fail();
        }
    }

    /// Skip the open fuse straight to its explosion. No-op otherwise.
    pub fn skip(&mut self) {
        if let Some(ActiveMinigame::Fuse(fuse)) = self.active.as_mut() {
            fuse.skip();
        }
    }

    /// Cast a ballot in the open vote. No-op otherwise.
    pub fn cast_vote(&mut self, target: PlayerId) {
        if let Some(ActiveMinigame::Vote(voting)) = self.active.as_mut() {
            voting.cast_vote(target);
        }
    }

    /// Spin the open wheel. No-op otherwise.
    pub fn spin(&mut self) {
        if let Some(ActiveMinigame::Spinner(wheel)) = self.active.as_mut() {
            wheel.spin(&mut self.rng);
        }
    }

    /// Close the open mini-game.
    ///
    /// Succeeds only from the controller's terminal phase, and that is
    /// the one place an interactive task advances the player.
    pub fn close(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        if active.as_minigame_mut().try_close() {
            tracing::debug!(kind = ?active.kind(), "mini-game closed");
            self.active = None;
            self.advance_player();
        }
    }

    // === Internals ===

    fn open(&mut self, pending: PendingDispatch) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let player_count = session.config.player_count();
        let current_player = session.current_player;
        let caps = self.caps.clone();

        let controller = match pending.task.item.kind {
            TaskKind::Timer(config) => ActiveMinigame::Fuse(FuseTimer::start(
                pending.card_text,
                config,
                player_count,
                caps,
            )),
            TaskKind::Countdown(ref config) => {
                let challenge = text::process(
                    &config.task,
                    current_player,
                    player_count,
                    &mut self.rng,
                );
                ActiveMinigame::Countdown(Countdown::start(challenge, config, caps))
            }
            TaskKind::Vote(ref config) => {
                ActiveMinigame::Vote(Voting::start(config, player_count, caps))
            }
            TaskKind::Spinner(ref config) => ActiveMinigame::Spinner(SpinnerWheel::start(
                pending.card_text,
                config,
                player_count,
                caps,
            )),
            TaskKind::Standard => return,
        };

        tracing::debug!(kind = ?controller.kind(), "mini-game opened");
        self.active = Some(controller);
    }

    fn advance_player(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.current_player = session.current_player.next(session.config.player_count());
            tracing::debug!(player = %session.current_player, "turn advanced");
        }
        self.render_stats();
    }

    fn render_stats(&self) {
        if let Some(session) = self.session.as_ref() {
            self.caps.renderer.render(&ViewState::SessionStats {
                current_player: session.current_player,
                tasks_completed: session.tasks_completed,
                blocks_remaining: session.blocks_remaining,
            });
        }
    }

    /// Tear down the in-flight turn: abort any open controller (stopping
    /// its live effect handles) and drop any pending dispatch.
    fn teardown_turn(&mut self) {
        self.abort_minigame();
        self.pending = None;
    }

    fn abort_minigame(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.as_minigame_mut().teardown();
        }
    }
}
