//! Mini-game integration tests: each controller driven through the
//! engine with a manual clock, plus effect-handle teardown checks.

mod common;

use std::time::Duration;

use block_party::{
    CountdownView, FuseView, MinigameKind, PlayerId, SessionConfig, SoundEffect, SpinnerView,
    Tier, ViewState, VoteView,
};

use common::{countdown_task, fuse_task, harness, library_of, spinner_task, vote_task, Harness};

const CARD_DELAY: Duration = Duration::from_millis(700);
const REVEAL_DELAY: Duration = Duration::from_millis(500);
const SPIN_DURATION: Duration = Duration::from_secs(4);

fn start_and_open(h: &mut Harness, player_count: usize) {
    h.engine
        .start(SessionConfig::new(player_count, [Tier::Calm]).unwrap())
        .unwrap();
    h.engine.pull();
    h.clock.advance(CARD_DELAY);
    h.engine.tick();
}

// === Fuse ===

#[test]
fn test_fuse_full_lifecycle_through_engine() {
    let mut h = harness(library_of(vec![fuse_task("3+2n")]), 42);
    start_and_open(&mut h, 4);
    assert_eq!(h.engine.open_minigame(), Some(MinigameKind::Fuse));
    assert_eq!(h.audio.live_sizzles(), 1);

    // 3 + 2*4 = 11 seconds. Halfway: still armed.
    h.clock.advance(Duration::from_millis(5500));
    h.engine.tick();
    assert_eq!(h.engine.open_minigame(), Some(MinigameKind::Fuse));

    h.clock.advance(Duration::from_millis(5500));
    h.engine.tick();
    assert_eq!(h.audio.live_sizzles(), 0);
    assert_eq!(h.audio.count_of(SoundEffect::Explosion), 1);
    assert_eq!(
        h.renderer.last(),
        Some(ViewState::Fuse(FuseView::Exploded {
            result_text: "BOOM! You drink!".into(),
        }))
    );

    h.engine.close();
    assert!(h.engine.open_minigame().is_none());
    assert_eq!(
        h.engine.session().unwrap().current_player(),
        PlayerId::new(2)
    );
}

#[test]
fn test_fuse_skip_explodes_immediately() {
    let mut h = harness(library_of(vec![fuse_task("60")]), 42);
    start_and_open(&mut h, 4);

    h.engine.skip();
    assert_eq!(h.audio.count_of(SoundEffect::Explosion), 1);
    assert_eq!(h.audio.live_sizzles(), 0);

    h.engine.close();
    assert_eq!(
        h.engine.session().unwrap().current_player(),
        PlayerId::new(2)
    );
}

#[test]
fn test_fuse_warning_escalates() {
    let mut h = harness(library_of(vec![fuse_task("10")]), 42);
    start_and_open(&mut h, 4);

    h.clock.advance(Duration::from_millis(6000)); // 60%
    h.engine.tick();
    h.clock.advance(Duration::from_millis(2000)); // 80%
    h.engine.tick();

    let mut warnings: Vec<_> = h
        .renderer
        .views()
        .into_iter()
        .filter_map(|v| match v {
            ViewState::Fuse(FuseView::Burning { warning, .. }) => Some(warning),
            _ => None,
        })
        .collect();
    warnings.dedup();

    use block_party::FuseWarning::*;
    assert_eq!(warnings, vec![KeepPassing, Faster, Hurry]);
}

#[test]
fn test_reset_mid_fuse_stops_sizzle() {
    let mut h = harness(library_of(vec![fuse_task("60")]), 42);
    start_and_open(&mut h, 4);
    assert_eq!(h.audio.live_sizzles(), 1);

    h.engine.reset_to_setup();
    assert_eq!(h.audio.live_sizzles(), 0);
    assert!(h.engine.open_minigame().is_none());
}

#[test]
fn test_tower_fell_mid_fuse_tears_down_controller() {
    let mut h = harness(library_of(vec![fuse_task("60")]), 42);
    start_and_open(&mut h, 4);

    h.engine.tower_fell();
    assert_eq!(h.audio.live_sizzles(), 0);
    assert!(h.engine.open_minigame().is_none());
    assert!(!h.engine.session().unwrap().is_active());
}

// === Countdown ===

#[test]
fn test_countdown_completion_through_engine() {
    let mut h = harness(library_of(vec![countdown_task(10)]), 42);
    start_and_open(&mut h, 4);
    assert_eq!(h.engine.open_minigame(), Some(MinigameKind::Countdown));

    // The challenge text is token-substituted for the current player.
    assert!(h.renderer.views().iter().any(|v| matches!(
        v,
        ViewState::Countdown(CountdownView::Ready { task_text, .. })
            if task_text == "Player 1 names 5 cocktails"
    )));

    h.engine.begin();
    h.clock.advance(Duration::from_secs(10));
    h.engine.tick();
    assert_eq!(
        h.renderer.last(),
        Some(ViewState::Countdown(CountdownView::Completed))
    );
    assert_eq!(h.audio.count_of(SoundEffect::Fanfare), 1);

    h.engine.close();
    assert_eq!(
        h.engine.session().unwrap().current_player(),
        PlayerId::new(2)
    );
}

#[test]
fn test_countdown_failure_through_engine() {
    let mut h = harness(library_of(vec![countdown_task(30)]), 42);
    start_and_open(&mut h, 4);

    h.engine.begin();
    h.clock.advance(Duration::from_secs(3));
    h.engine.tick();
    h.engine.fail();

    assert_eq!(
        h.renderer.last(),
        Some(ViewState::Countdown(CountdownView::Failed))
    );
    assert_eq!(h.audio.count_of(SoundEffect::Buzzer), 1);

    // Failed is terminal too; close advances.
    h.engine.close();
    assert_eq!(
        h.engine.session().unwrap().current_player(),
        PlayerId::new(2)
    );
}

// === Vote ===

#[test]
fn test_vote_through_engine() {
    let mut h = harness(library_of(vec![vote_task()]), 42);
    start_and_open(&mut h, 3);
    assert_eq!(h.engine.open_minigame(), Some(MinigameKind::Vote));

    h.engine.cast_vote(PlayerId::new(2));
    h.engine.cast_vote(PlayerId::new(2));
    h.engine.cast_vote(PlayerId::new(3));
    assert_eq!(h.audio.count_of(SoundEffect::Vote), 3);

    h.clock.advance(REVEAL_DELAY);
    h.engine.tick();
    assert_eq!(
        h.renderer.last(),
        Some(ViewState::Voting(VoteView::Revealed {
            winner: PlayerId::new(2),
            result_text: "drinks twice".into(),
        }))
    );

    h.engine.close();
    assert_eq!(
        h.engine.session().unwrap().current_player(),
        PlayerId::new(2)
    );
}

#[test]
fn test_vote_progress_is_rendered_without_tallies() {
    let mut h = harness(library_of(vec![vote_task()]), 42);
    start_and_open(&mut h, 4);

    h.engine.cast_vote(PlayerId::new(1));
    h.engine.cast_vote(PlayerId::new(1));

    assert_eq!(
        h.renderer.last(),
        Some(ViewState::Voting(VoteView::Collecting {
            question: "Who is loudest?".into(),
            votes_cast: 2,
            votes_needed: 4,
        }))
    );
}

// === Spinner ===

#[test]
fn test_spinner_through_engine() {
    let mut h = harness(library_of(vec![spinner_task()]), 42);
    start_and_open(&mut h, 4);
    assert_eq!(h.engine.open_minigame(), Some(MinigameKind::Spinner));

    h.engine.spin();
    assert_eq!(h.audio.count_of(SoundEffect::Drumroll { seconds: 3 }), 1);

    // Mid-spin: clicks playing, no reveal yet.
    h.clock.advance(Duration::from_secs(2));
    h.engine.tick();
    assert!(h.audio.count_of(SoundEffect::SpinnerClick) > 0);
    assert!(!matches!(
        h.renderer.last(),
        Some(ViewState::Spinner(SpinnerView::Revealed { .. }))
    ));

    h.clock.advance(SPIN_DURATION);
    h.engine.tick();
    let Some(ViewState::Spinner(SpinnerView::Revealed { winner, result_text })) =
        h.renderer.last()
    else {
        panic!("expected a revealed spinner");
    };
    assert!(winner.is_valid(4));
    assert_eq!(result_text, "was chosen!");

    h.engine.close();
    assert_eq!(
        h.engine.session().unwrap().current_player(),
        PlayerId::new(2)
    );
}

#[test]
fn test_spinner_rotation_lands_in_range() {
    let mut h = harness(library_of(vec![spinner_task()]), 42);
    start_and_open(&mut h, 4);

    h.engine.spin();
    let rotation = h
        .renderer
        .views()
        .into_iter()
        .find_map(|v| match v {
            ViewState::Spinner(SpinnerView::Spinning {
                rotation_degrees, ..
            }) => Some(rotation_degrees),
            _ => None,
        })
        .unwrap();

    // 5..8 full turns plus at most one more for the segment offset.
    assert!(rotation >= 5.0 * 360.0);
    assert!(rotation < 9.0 * 360.0);
}

// === Cross-controller ===

#[test]
fn test_actions_for_other_controllers_are_noops() {
    let mut h = harness(library_of(vec![vote_task()]), 42);
    start_and_open(&mut h, 3);

    // Fuse/countdown/spinner actions against an open vote do nothing.
    h.engine.skip();
    h.engine.begin();
    h.engine.fail();
    h.engine.spin();

    assert_eq!(h.engine.open_minigame(), Some(MinigameKind::Vote));
    assert_eq!(h.audio.count_of(SoundEffect::Buzzer), 0);
    assert_eq!(h.audio.count_of(SoundEffect::Explosion), 0);
}
