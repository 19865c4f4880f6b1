//! Shuffled draw pools.
//!
//! A [`DrawPool`] deals its contents in shuffled order without
//! replacement. When the cursor runs off the end, the whole sequence is
//! reshuffled in place and dealing starts over; an item drawn last before
//! the reshuffle may legitimately come up first after it.

use crate::core::GameRng;
use crate::error::GameError;

/// A shuffled, sequential-without-replacement draw queue.
///
/// Never empty: construction rejects empty input, so `next` and
/// `peek_random` always have something to return.
#[derive(Clone, Debug)]
pub struct DrawPool<T> {
    sequence: Vec<T>,
    cursor: usize,
}

impl<T: Clone> DrawPool<T> {
    /// Build a pool from `items`, shuffled up front.
    ///
    /// `label` names the content for the error when `items` is empty
    /// ("tasks", "penalties").
    pub fn new(label: &'static str, mut items: Vec<T>, rng: &mut GameRng) -> Result<Self, GameError> {
        if items.is_empty() {
            return Err(GameError::EmptyContent { what: label });
        }

        rng.shuffle(&mut items);
        Ok(Self {
            sequence: items,
            cursor: 0,
        })
    }

    /// Deal the next item.
    ///
    /// Reshuffles in place and resets the cursor when the pool is
    /// exhausted. There is no no-repeat guarantee across the reshuffle
    /// boundary.
    pub fn next(&mut self, rng: &mut GameRng) -> T {
        if self.cursor >= self.sequence.len() {
            rng.shuffle(&mut self.sequence);
            self.cursor = 0;
        }

        let item = self.sequence[self.cursor].clone();
        self.cursor += 1;
        item
    }

    /// A uniformly random item, independent of the cursor.
    ///
    /// Does not advance the deal; consecutive calls may repeat.
    pub fn peek_random(&self, rng: &mut GameRng) -> T {
        let index = rng.gen_range_usize(0..self.sequence.len());
        self.sequence[index].clone()
    }

    /// Number of items in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Draws dealt since the last (re)shuffle.
    #[must_use]
    pub fn dealt(&self) -> usize {
        self.cursor
    }
}
