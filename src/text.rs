//! Placeholder substitution for task and penalty text.
//!
//! Content text addresses players through tokens, resolved against the
//! current turn:
//!
//! - `{player}`: the player whose turn it is
//! - `{all}`: the whole table ("everyone")
//! - `{other}`: a random player who is not the current one; each
//!   occurrence is resolved independently
//!
//! Tokens match case-insensitively. Anything else in braces is left
//! verbatim.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::{GameRng, PlayerId};

static PLAYER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\{player\}").expect("valid pattern"));
static ALL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\{all\}").expect("valid pattern"));
static OTHER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\{other\}").expect("valid pattern"));

/// Substitute player tokens in `text` for the current turn.
///
/// Only `{other}` consumes randomness; with a fixed seed the output is
/// fully deterministic for token-free and `{other}`-free text.
pub fn process(
    text: &str,
    current_player: PlayerId,
    player_count: usize,
    rng: &mut GameRng,
) -> String {
    let player_name = current_player.to_string();
    let mut processed = PLAYER_TOKEN
        .replace_all(text, player_name.as_str())
        .into_owned();
    processed = ALL_TOKEN.replace_all(&processed, "everyone").into_owned();

    // Each {other} is resolved independently and may name a different player.
    while let Some(found) = OTHER_TOKEN.find(&processed) {
        let other = random_other_player(current_player, player_count, rng);
        processed.replace_range(found.range(), &other.to_string());
    }

    processed
}

/// A uniformly random player other than `current_player`.
///
/// Resamples until the draw differs, which terminates for any
/// `player_count >= 2`; a degenerate one-player table falls back to the
/// current player.
fn random_other_player(
    current_player: PlayerId,
    player_count: usize,
    rng: &mut GameRng,
) -> PlayerId {
    if player_count <= 1 {
        return current_player;
    }

    loop {
        let candidate = PlayerId::new(rng.gen_range_u8(1..=player_count as u8));
        if candidate != current_player {
            return candidate;
        }
    }
}
