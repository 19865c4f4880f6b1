//! Task content: the card a player reveals when they pull a block.
//!
//! Tasks are immutable data. A standard task resolves instantly; the four
//! interactive kinds carry the configuration their mini-game controller
//! needs. The JSON shape mirrors the content tables:
//!
//! ```json
//! { "text": "Hot potato!", "type": "timer",
//!   "config": { "duration": "3+2n", "sound": "explosion",
//!               "resultText": "BOOM! You drink!" } }
//! ```

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

/// Fallback fuse length when a duration formula fails to parse.
pub const DEFAULT_FUSE_SECONDS: u32 = 10;

/// A single task card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Display text, possibly containing `{player}`/`{all}`/`{other}` tokens.
    pub text: String,

    /// Task kind plus its type-specific configuration.
    #[serde(flatten)]
    pub kind: TaskKind,
}

impl Task {
    /// Create a standard (instantly resolved) task.
    pub fn standard(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TaskKind::Standard,
        }
    }

    /// Does this task open a mini-game controller?
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !matches!(self.kind, TaskKind::Standard)
    }
}

/// Task kind, tagged by the content table's `type` field.
///
/// `timer` drives the burning-fuse mini-game; the other interactive kinds
/// map one-to-one onto their controllers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "lowercase")]
pub enum TaskKind {
    Standard,
    Timer(FuseConfig),
    Countdown(CountdownConfig),
    Vote(VoteConfig),
    Spinner(SpinnerConfig),
}

/// Which sound plays when the fuse runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuseSound {
    Explosion,
    Buzzer,
}

/// Configuration for the burning-fuse mini-game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuseConfig {
    /// Fuse length, fixed or scaled by player count.
    pub duration: DurationFormula,
    /// Sound on detonation.
    pub sound: FuseSound,
    /// Text shown when the fuse runs out.
    pub result_text: String,
}

/// Configuration for the countdown challenge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// Challenge length in seconds.
    pub duration: u32,
    /// The challenge text (token substitution applies).
    pub task: String,
}

/// Configuration for the group vote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteConfig {
    /// Question shown above the vote targets.
    pub question: String,
    /// What happens to the winner.
    pub result_text: String,
}

/// Configuration for the spinning wheel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinnerConfig {
    /// What happens to the chosen player.
    pub result_text: String,
}

/// Fuse duration: a fixed number of seconds, or `base + per_player * N`.
///
/// Content tables write the scaled form as `"3+2n"`. Anything that fails
/// to parse falls back to [`DEFAULT_FUSE_SECONDS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationFormula {
    /// Fixed duration in seconds.
    Seconds(u32),
    /// Scales with the table: `base + per_player * player_count` seconds.
    PerPlayer { base: u32, per_player: u32 },
}

impl DurationFormula {
    /// Parse a formula string. Never fails; unparseable input falls back
    /// to [`DEFAULT_FUSE_SECONDS`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();

        if text.contains('n') {
            // Lenient like the original content loader: take the leading
            // digits of each side, missing pieces count as zero.
            let mut parts = text.splitn(2, '+');
            let base = parts.next().map(|p| leading_int(p.trim())).unwrap_or(0);
            let per_player = parts.next().map(|p| leading_int(p.trim())).unwrap_or(0);
            return Self::PerPlayer { base, per_player };
        }

        match text.parse() {
            Ok(secs) => Self::Seconds(secs),
            Err(_) => Self::Seconds(DEFAULT_FUSE_SECONDS),
        }
    }

    /// Resolve the formula for a concrete table size.
    #[must_use]
    pub fn resolve(self, player_count: usize) -> Duration {
        let secs = match self {
            Self::Seconds(secs) => secs,
            Self::PerPlayer { base, per_player } => base + per_player * player_count as u32,
        };
        Duration::from_secs(u64::from(secs))
    }
}

/// Leading digits of `text` as an integer, 0 if there are none.
fn leading_int(text: &str) -> u32 {
    let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

impl std::fmt::Display for DurationFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seconds(secs) => write!(f, "{secs}"),
            Self::PerPlayer { base, per_player } => write!(f, "{base}+{per_player}n"),
        }
    }
}

impl Serialize for DurationFormula {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Seconds(secs) => serializer.serialize_u32(*secs),
            Self::PerPlayer { .. } => serializer.serialize_str(&self.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for DurationFormula {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(secs) => Self::Seconds(secs),
            Raw::Text(text) => Self::parse(&text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_fixed() {
        assert_eq!(DurationFormula::parse("15"), DurationFormula::Seconds(15));
        assert_eq!(
            DurationFormula::Seconds(15).resolve(8),
            Duration::from_secs(15)
        );
    }

    #[test]
    fn test_formula_per_player() {
        let formula = DurationFormula::parse("3+2n");
        assert_eq!(
            formula,
            DurationFormula::PerPlayer {
                base: 3,
                per_player: 2
            }
        );
        // 3 + 2 * 4 = 11
        assert_eq!(formula.resolve(4), Duration::from_secs(11));
    }

    #[test]
    fn test_formula_garbage_falls_back() {
        assert_eq!(
            DurationFormula::parse("soon"),
            DurationFormula::Seconds(DEFAULT_FUSE_SECONDS)
        );
        assert_eq!(
            DurationFormula::parse(""),
            DurationFormula::Seconds(DEFAULT_FUSE_SECONDS)
        );
    }

    #[test]
    fn test_formula_bare_n() {
        // "n" alone means one second per player.
        let formula = DurationFormula::parse("0+1n");
        assert_eq!(formula.resolve(6), Duration::from_secs(6));

        // Missing multiplier part resolves to just the base.
        let formula = DurationFormula::parse("5n");
        assert_eq!(
            formula,
            DurationFormula::PerPlayer {
                base: 5,
                per_player: 0
            }
        );
        assert_eq!(formula.resolve(4), Duration::from_secs(5));
    }

    #[test]
    fn test_formula_serde() {
        let fixed: DurationFormula = serde_json::from_str("20").unwrap();
        assert_eq!(fixed, DurationFormula::Seconds(20));

        let scaled: DurationFormula = serde_json::from_str("\"3+2n\"").unwrap();
        assert_eq!(
            scaled,
            DurationFormula::PerPlayer {
                base: 3,
                per_player: 2
            }
        );

        assert_eq!(serde_json::to_string(&fixed).unwrap(), "20");
        assert_eq!(serde_json::to_string(&scaled).unwrap(), "\"3+2n\"");
    }

    #[test]
    fn test_task_json_round_trip() {
        let json = r#"{
            "text": "Hot potato!",
            "type": "timer",
            "config": {
                "duration": "3+2n",
                "sound": "explosion",
                "resultText": "BOOM! You drink!"
            }
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.text, "Hot potato!");
        assert!(task.is_interactive());
        match &task.kind {
            TaskKind::Timer(config) => {
                assert_eq!(config.sound, FuseSound::Explosion);
                assert_eq!(config.result_text, "BOOM! You drink!");
            }
            other => panic!("expected timer task, got {other:?}"),
        }
    }

    #[test]
    fn test_standard_task_json() {
        let json = r#"{ "text": "{player} drinks twice", "type": "standard" }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.kind, TaskKind::Standard);
        assert!(!task.is_interactive());
    }

    #[test]
    fn test_countdown_task_json() {
        let json = r#"{
            "text": "Challenge!",
            "type": "countdown",
            "config": { "duration": 30, "task": "{player} names 5 cocktails" }
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        match &task.kind {
            TaskKind::Countdown(config) => {
                assert_eq!(config.duration, 30);
                assert!(config.task.contains("{player}"));
            }
            other => panic!("expected countdown task, got {other:?}"),
        }
    }
}
