//! The content library: tier-keyed task and penalty tables.
//!
//! Loaded once before a session starts, read-only afterwards. The engine
//! flattens the selected tiers into draw pools at `start()`; each pooled
//! item remembers its tier so the card view can badge it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::penalty::Penalty;
use super::task::Task;
use crate::core::{SessionConfig, Tier};
use crate::error::GameError;

/// A content item tagged with the tier it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Tiered<T> {
    pub item: T,
    pub tier: Tier,
}

/// All loadable content, keyed by difficulty tier.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ContentLibrary {
    #[serde(default)]
    tasks: FxHashMap<Tier, Vec<Task>>,
    #[serde(default)]
    penalties: FxHashMap<Tier, Vec<Penalty>>,
}

impl ContentLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a library from a JSON content table.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let library: Self = serde_json::from_str(json)?;
        tracing::info!(
            tasks = library.task_count(),
            penalties = library.penalty_count(),
            "content library loaded"
        );
        Ok(library)
    }

    /// Add a task to a tier.
    pub fn add_task(&mut self, tier: Tier, task: Task) -> &mut Self {
        self.tasks.entry(tier).or_default().push(task);
        self
    }

    /// Add a penalty to a tier.
    pub fn add_penalty(&mut self, tier: Tier, penalty: Penalty) -> &mut Self {
        self.penalties.entry(tier).or_default().push(penalty);
        self
    }

    /// Total number of tasks across all tiers.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.values().map(Vec::len).sum()
    }

    /// Total number of penalties across all tiers.
    #[must_use]
    pub fn penalty_count(&self) -> usize {
        self.penalties.values().map(Vec::len).sum()
    }

    /// Flatten the tasks for the tiers a session selected.
    ///
    /// Tiers with no entries contribute nothing; the emptiness of the
    /// whole result is the caller's setup-validation problem.
    #[must_use]
    pub fn tasks_for(&self, config: &SessionConfig) -> Vec<Tiered<Task>> {
        config
            .difficulties()
            .flat_map(|tier| {
                self.tasks
                    .get(&tier)
                    .into_iter()
                    .flatten()
                    .map(move |task| Tiered {
                        item: task.clone(),
                        tier,
                    })
            })
            .collect()
    }

    /// Flatten the penalties for the tiers a session selected.
    #[must_use]
    pub fn penalties_for(&self, config: &SessionConfig) -> Vec<Tiered<Penalty>> {
        config
            .difficulties()
            .flat_map(|tier| {
                self.penalties
                    .get(&tier)
                    .into_iter()
                    .flatten()
                    .map(move |penalty| Tiered {
                        item: penalty.clone(),
                        tier,
                    })
            })
            .collect()
    }
}
