//! Penalty content: what happens when the tower falls.

use serde::{Deserialize, Serialize};

/// A penalty card, drawn once per tower fall.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalty {
    /// Display text (token substitution applies).
    pub text: String,
}

impl Penalty {
    /// Create a penalty.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
