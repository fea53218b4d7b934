//! Two-in-a-row up/down staircase over the trial outcomes of a session.
//!
//! - Fewer than two outcomes recorded: level is held at [`START_LEVEL`].
//! - Last two passed: level + 1 (no ceiling).
//! - Last two failed: level − 1, floored at [`MIN_LEVEL`].
//! - Mixed: unchanged.
//!
//! The window slides: every call looks at the two most recent outcomes, so
//! one outcome can take part in two consecutive decisions.

use tracing::info;

use crate::constants::{MIN_LEVEL, START_LEVEL};
use crate::types::Level;

/// Current level plus the append-only outcome history of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyController {
    level: Level,
    history: Vec<bool>,
}

impl Default for DifficultyController {
    fn default() -> Self {
        Self::new()
    }
}

impl DifficultyController {
    pub fn new() -> Self {
        Self {
            level: START_LEVEL,
            history: Vec::new(),
        }
    }

    /// Level for the next trial.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Every outcome recorded so far, oldest first.
    pub fn history(&self) -> &[bool] {
        &self.history
    }

    /// Append `outcome` and return the level for the next trial.
    pub fn record_and_advance(&mut self, outcome: bool) -> Level {
        self.history.push(outcome);
        let previous = self.level;
        self.level = match self.history[..] {
            [.., before, last] => next_level(self.level, before, last),
            _ => START_LEVEL,
        };
        if self.level != previous {
            info!(from = previous, to = self.level, "level change");
        }
        self.level
    }
}

/// Staircase step given the two most recent outcomes.
#[inline(always)]
pub fn next_level(level: Level, before: bool, last: bool) -> Level {
    match (before, last) {
        (true, true) => level + 1,
        (false, false) => level.saturating_sub(1).max(MIN_LEVEL),
        _ => level,
    }
}
