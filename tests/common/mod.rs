//! Shared test harness: recording capabilities and content fixtures.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use block_party::{
    AudioSink, ContentLibrary, CountdownConfig, DurationFormula, FuseConfig, FuseSound, GameRng,
    ManualClock, Penalty, Renderer, SizzleSound, SoundEffect, SpinnerConfig, Task, TaskKind, Tier,
    TurnEngine, ViewState, VoteConfig,
};

/// Renderer that records every view it is asked to show.
#[derive(Default)]
pub struct RecordingRenderer {
    views: Mutex<Vec<ViewState>>,
}

impl RecordingRenderer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn views(&self) -> Vec<ViewState> {
        self.views.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<ViewState> {
        self.views.lock().unwrap().last().cloned()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, view: &ViewState) {
        self.views.lock().unwrap().push(view.clone());
    }
}

/// Audio sink that records effects and counts live sizzle loops.
#[derive(Default)]
pub struct RecordingAudio {
    effects: Mutex<Vec<SoundEffect>>,
    live_sizzles: Arc<AtomicU32>,
}

impl RecordingAudio {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn effects(&self) -> Vec<SoundEffect> {
        self.effects.lock().unwrap().clone()
    }

    pub fn count_of(&self, wanted: SoundEffect) -> usize {
        self.effects().iter().filter(|e| **e == wanted).count()
    }

    /// Sizzle loops started but not yet stopped. Anything nonzero after
    /// a controller is gone is a leaked effect.
    pub fn live_sizzles(&self) -> u32 {
        self.live_sizzles.load(Ordering::SeqCst)
    }
}

struct TrackedSizzle {
    live: Arc<AtomicU32>,
    stopped: bool,
}

impl SizzleSound for TrackedSizzle {
    fn intensify(&mut self, _factor: f64) {}

    fn stop(&mut self) {
        if !self.stopped {
            self.live.fetch_sub(1, Ordering::SeqCst);
            self.stopped = true;
        }
    }
}

impl AudioSink for RecordingAudio {
    fn play(&self, effect: SoundEffect) {
        self.effects.lock().unwrap().push(effect);
    }

    fn start_sizzle(&self) -> Box<dyn SizzleSound> {
        self.live_sizzles.fetch_add(1, Ordering::SeqCst);
        Box::new(TrackedSizzle {
            live: Arc::clone(&self.live_sizzles),
            stopped: false,
        })
    }
}

/// Engine plus handles to its manual clock and recording capabilities.
pub struct Harness {
    pub engine: TurnEngine,
    pub clock: Arc<ManualClock>,
    pub renderer: Arc<RecordingRenderer>,
    pub audio: Arc<RecordingAudio>,
}

pub fn harness(library: ContentLibrary, seed: u64) -> Harness {
    let clock = Arc::new(ManualClock::new());
    let renderer = RecordingRenderer::new();
    let audio = RecordingAudio::new();

    let engine = TurnEngine::with_rng(
        library,
        Arc::clone(&renderer) as Arc<dyn Renderer>,
        Arc::clone(&audio) as Arc<dyn AudioSink>,
        Arc::clone(&clock) as Arc<dyn block_party::Clock>,
        GameRng::new(seed),
    );

    Harness {
        engine,
        clock,
        renderer,
        audio,
    }
}

// === Content fixtures ===

pub fn standard_task(text: &str) -> Task {
    Task::standard(text)
}

pub fn fuse_task(duration: &str) -> Task {
    Task {
        text: "Hot potato! Pass it!".into(),
        kind: TaskKind::Timer(FuseConfig {
            duration: DurationFormula::parse(duration),
            sound: FuseSound::Explosion,
            result_text: "BOOM! You drink!".into(),
        }),
    }
}

pub fn countdown_task(duration: u32) -> Task {
    Task {
        text: "Challenge time!".into(),
        kind: TaskKind::Countdown(CountdownConfig {
            duration,
            task: "{player} names 5 cocktails".into(),
        }),
    }
}

pub fn vote_task() -> Task {
    Task {
        text: "Time to vote!".into(),
        kind: TaskKind::Vote(VoteConfig {
            question: "Who is loudest?".into(),
            result_text: "drinks twice".into(),
        }),
    }
}

pub fn spinner_task() -> Task {
    Task {
        text: "Spin the wheel!".into(),
        kind: TaskKind::Spinner(SpinnerConfig {
            result_text: "was chosen!".into(),
        }),
    }
}

/// A calm-tier library containing exactly the given tasks and one penalty.
pub fn library_of(tasks: Vec<Task>) -> ContentLibrary {
    let mut library = ContentLibrary::new();
    for task in tasks {
        library.add_task(Tier::Calm, task);
    }
    library.add_penalty(Tier::Calm, Penalty::new("{player} finishes their drink"));
    library
}
