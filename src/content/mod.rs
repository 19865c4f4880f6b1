//! Immutable game content: tasks, penalties, and the library that holds them.

mod library;
mod penalty;
mod task;

pub use library::{ContentLibrary, Tiered};
pub use penalty::Penalty;
pub use task::{
    CountdownConfig, DurationFormula, FuseConfig, FuseSound, SpinnerConfig, Task, TaskKind,
    VoteConfig, DEFAULT_FUSE_SECONDS,
};
