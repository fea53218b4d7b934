//! Collaborator contracts: rendering surface, blocking input, clock and random
//! source, plus the [`TaskContext`] that threads them through every component.
//!
//! The task components never reach for a terminal or a global RNG. Everything
//! observable goes through these traits, so tests can script input and random
//! draws (see [`crate::testing`]) and the binary can plug in the terminal
//! (see [`crate::terminal`]).

use std::time::Duration;

use crate::error::Result;
use crate::types::Timings;

/// Discrete input events the task recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    Up,
    Down,
    Left,
    Right,
    /// Space: select the cursor position during recall.
    Confirm,
    Yes,
    No,
    Continue,
    Quit,
    /// Anything else. Never advances any state.
    Other,
}

/// Colour scheme of a write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Red on white; used for all task screens.
    #[default]
    Task,
    /// Yellow on blue.
    Banner,
}

/// Text attribute of a write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Attribute {
    #[default]
    Plain,
    Bold,
}

/// A character-cell surface the task draws on.
///
/// Implementors provide three primitives; the layout helpers used by the
/// task are provided on top of them.
pub trait Surface {
    /// (rows, cols) of the drawable area.
    fn size(&self) -> (u16, u16);

    /// Write `text` starting at absolute (row, col). Out-of-bounds parts are
    /// clipped by the implementor.
    fn write_str(
        &mut self,
        row: i32,
        col: i32,
        text: &str,
        style: Style,
        attribute: Attribute,
    ) -> Result<()>;

    /// Make pending writes visible.
    fn refresh(&mut self) -> Result<()>;

    /// Overwrite the whole surface with `ch`.
    fn fill(&mut self, ch: char, style: Style) -> Result<()> {
        let (rows, cols) = self.size();
        let line: String = std::iter::repeat(ch)
            .take(cols.saturating_sub(1) as usize)
            .collect();
        for row in 0..rows {
            self.write_str(row as i32, 0, &line, style, Attribute::Plain)?;
        }
        self.refresh()
    }

    /// Write `text` horizontally centred, `row_offset` rows from the middle.
    fn print_centered(
        &mut self,
        text: &str,
        style: Style,
        row_offset: i32,
        col_offset: i32,
        attribute: Attribute,
    ) -> Result<()> {
        let (row, col) = centered_origin(self.size(), text.chars().count(), row_offset, col_offset);
        self.write_str(row, col, text, style, attribute)?;
        self.refresh()
    }

    /// Write a single character at absolute (row, col).
    fn write_cell(&mut self, row: i32, col: i32, ch: char, style: Style) -> Result<()> {
        let mut buf = [0u8; 4];
        self.write_str(row, col, ch.encode_utf8(&mut buf), style, Attribute::Plain)
    }
}

/// Absolute origin of a `width`-wide text centred on a `(rows, cols)` surface.
#[inline(always)]
pub fn centered_origin(size: (u16, u16), width: usize, row_offset: i32, col_offset: i32) -> (i32, i32) {
    let (rows, cols) = (size.0 as i32, size.1 as i32);
    (
        rows / 2 + row_offset,
        (cols - width as i32).div_euclid(2) + col_offset,
    )
}

/// Blocking source of discrete key events.
pub trait InputSource {
    /// Block until the next event arrives.
    fn poll_blocking(&mut self) -> Result<KeyEvent>;
}

/// Blocking delays.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Uniform integers, seeded once per process.
pub trait RandomSource {
    /// Uniform draw from `low..=high`.
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;
}

/// Wall-clock [`Clock`] backed by `std::thread::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Everything a task component needs: the four collaborators and the
/// presentation timings. Borrowed, so callers keep ownership of the doubles.
pub struct TaskContext<'a> {
    pub surface: &'a mut dyn Surface,
    pub input: &'a mut dyn InputSource,
    pub clock: &'a mut dyn Clock,
    pub rng: &'a mut dyn RandomSource,
    pub timings: Timings,
}

impl<'a> TaskContext<'a> {
    pub fn new(
        surface: &'a mut dyn Surface,
        input: &'a mut dyn InputSource,
        clock: &'a mut dyn Clock,
        rng: &'a mut dyn RandomSource,
        timings: Timings,
    ) -> Self {
        Self {
            surface,
            input,
            clock,
            rng,
            timings,
        }
    }

    /// Poll until one of `allowed` arrives and return it. Everything else is
    /// dropped without side effects.
    pub fn wait_for(&mut self, allowed: &[KeyEvent]) -> Result<KeyEvent> {
        loop {
            let event = self.input.poll_blocking()?;
            if allowed.contains(&event) {
                return Ok(event);
            }
        }
    }

    /// Clear the surface to the task background.
    pub fn clear(&mut self) -> Result<()> {
        self.surface.fill(crate::constants::GLYPH_BLANK, Style::Task)
    }

    /// Centred task-style text at `row_offset`.
    pub fn say(&mut self, text: &str, row_offset: i32) -> Result<()> {
        self.surface
            .print_centered(text, Style::Task, row_offset, 0, Attribute::Plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_origin() {
        // 24x80 surface, 4-wide text: row 12, col 38.
        assert_eq!(centered_origin((24, 80), 4, 0, 0), (12, 38));
        assert_eq!(centered_origin((24, 80), 4, 1, 0), (13, 38));
        assert_eq!(centered_origin((24, 80), 3, -10, 2), (2, 40));
    }

    #[test]
    fn test_centered_origin_wider_than_surface() {
        let (_, col) = centered_origin((10, 4), 7, 0, 0);
        assert_eq!(col, -2);
    }
}
