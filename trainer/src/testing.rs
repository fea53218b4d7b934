//! Deterministic collaborators for tests and headless runs.
//!
//! - [`ScriptedInput`]: replays a fixed list of key events, then fails.
//! - [`ScriptedRandom`]: replays fixed draws, then returns `low`.
//! - [`RecordingSurface`]: in-memory character buffer plus a write log.
//! - [`RecordingClock`]: records requested sleeps without sleeping.

use std::collections::VecDeque;
use std::time::Duration;

use crate::error::{CwmError, Result};
use crate::io::{Attribute, Clock, InputSource, KeyEvent, RandomSource, Surface, Style};

/// Replays queued events. Polling past the end yields
/// [`CwmError::InputExhausted`], which ends whatever loop was waiting.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<KeyEvent>,
    consumed: usize,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of events handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Events not yet polled.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_blocking(&mut self) -> Result<KeyEvent> {
        match self.events.pop_front() {
            Some(event) => {
                self.consumed += 1;
                Ok(event)
            }
            None => Err(CwmError::InputExhausted {
                consumed: self.consumed,
            }),
        }
    }
}

/// Replays queued draws verbatim, without clamping to the requested range.
/// Once the script runs out every draw returns `low`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<i32>,
    requests: Vec<(i32, i32)>,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = i32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            requests: Vec::new(),
        }
    }

    /// Every `(low, high)` range requested, in order.
    pub fn requests(&self) -> &[(i32, i32)] {
        &self.requests
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        self.requests.push((low, high));
        self.draws.pop_front().unwrap_or(low)
    }
}

/// Records sleeps instead of performing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingClock {
    pub sleeps: Vec<Duration>,
}

impl RecordingClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Duration {
        self.sleeps.iter().sum()
    }
}

impl Clock for RecordingClock {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}

/// One `write_str` call as seen by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteRecord {
    pub row: i32,
    pub col: i32,
    pub text: String,
    pub style: Style,
    pub attribute: Attribute,
}

/// In-memory surface. Keeps the current screen contents and a log of all
/// non-blank writes.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    rows: u16,
    cols: u16,
    buffer: Vec<Vec<char>>,
    pub writes: Vec<WriteRecord>,
    pub refreshes: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

impl RecordingSurface {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            buffer: vec![vec![' '; cols as usize]; rows as usize],
            writes: Vec::new(),
            refreshes: 0,
        }
    }

    /// Current screen, one string per row.
    pub fn screen(&self) -> Vec<String> {
        self.buffer.iter().map(|row| row.iter().collect()).collect()
    }

    /// Current contents of one row with trailing blanks removed.
    pub fn line(&self, row: usize) -> String {
        self.buffer[row].iter().collect::<String>().trim_end().to_string()
    }

    /// Whether `text` appears anywhere on the current screen.
    pub fn shows(&self, text: &str) -> bool {
        self.screen().iter().any(|line| line.contains(text))
    }

    /// How many logged writes carried exactly `text`.
    pub fn count_writes(&self, text: &str) -> usize {
        self.writes.iter().filter(|w| w.text == text).count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    fn write_str(
        &mut self,
        row: i32,
        col: i32,
        text: &str,
        style: Style,
        attribute: Attribute,
    ) -> Result<()> {
        if row >= 0 && (row as usize) < self.buffer.len() {
            let line = &mut self.buffer[row as usize];
            for (i, ch) in text.chars().enumerate() {
                let c = col + i as i32;
                if c >= 0 && (c as usize) < line.len() {
                    line[c as usize] = ch;
                }
            }
        }
        if !text.trim().is_empty() {
            self.writes.push(WriteRecord {
                row,
                col,
                text: text.to_string(),
                style,
                attribute,
            });
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.refreshes += 1;
        Ok(())
    }
}
