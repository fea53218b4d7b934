//! Recall: for each remembered location, in order, the user moves a star over
//! the 4×4 grid and confirms a cell.

use tracing::debug;

use crate::constants::*;
use crate::error::Result;
use crate::io::{centered_origin, KeyEvent, Style, TaskContext};
use crate::types::{Location, Sequence};

/// Events that advance the recall prompt. Everything else is ignored.
const RECALL_KEYS: [KeyEvent; 5] = [
    KeyEvent::Up,
    KeyEvent::Down,
    KeyEvent::Left,
    KeyEvent::Right,
    KeyEvent::Confirm,
];

/// Cursor over the recall grid. Moves clamp at the edges, no wraparound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// Apply a movement event. Non-movement events leave the cursor alone.
    pub fn apply(&mut self, event: KeyEvent) {
        let last = RECALL_SIDE - 1;
        match event {
            KeyEvent::Up => self.row = self.row.saturating_sub(1),
            KeyEvent::Down => self.row = (self.row + 1).min(last),
            KeyEvent::Left => self.col = self.col.saturating_sub(1),
            KeyEvent::Right => self.col = (self.col + 1).min(last),
            _ => {}
        }
    }

    /// The location under the cursor, `row * 4 + col`.
    pub fn location(self) -> Location {
        Location::from_row_col(self.row, self.col).unwrap_or_default()
    }
}

/// Prompt for every item of `sequence` in order. True only if every
/// selection matches the item at the same position.
pub fn validate(ctx: &mut TaskContext<'_>, sequence: &Sequence) -> Result<bool> {
    let mut result = true;
    for (i, &expected) in sequence.iter().enumerate() {
        let selected = prompt_location(ctx, i + 1)?;
        let correct = selected == expected;
        debug!(item = i + 1, %expected, %selected, correct, "recall");
        let feedback = if correct {
            RECALL_CORRECT_TEXT
        } else {
            RECALL_INCORRECT_TEXT
        };
        ctx.say(feedback, RECALL_FEEDBACK_OFFSET)?;
        ctx.clock.sleep(ctx.timings.feedback);
        result = result && correct;
    }
    Ok(result)
}

/// Run one cursor prompt and return the confirmed location.
fn prompt_location(ctx: &mut TaskContext<'_>, ordinal: usize) -> Result<Location> {
    ctx.clear()?;
    ctx.say(&format!("Where was location {}?", ordinal), LOCATION_PROMPT_OFFSET)?;
    ctx.say(RECALL_HINT_TEXT, RECALL_HINT_OFFSET)?;

    let mut cursor = Cursor::default();
    loop {
        draw_cursor_grid(ctx, cursor)?;
        match ctx.wait_for(&RECALL_KEYS)? {
            KeyEvent::Confirm => return Ok(cursor.location()),
            movement => cursor.apply(movement),
        }
    }
}

/// Redraw the empty grid and put the star at the cursor.
fn draw_cursor_grid(ctx: &mut TaskContext<'_>, cursor: Cursor) -> Result<()> {
    let empty: String = std::iter::repeat(GLYPH_OFF).take(RECALL_SIDE).collect();
    for i in 0..RECALL_SIDE {
        ctx.say(&empty, RECALL_GRID_TOP_OFFSET + i as i32)?;
    }
    let (top, left) = centered_origin(ctx.surface.size(), RECALL_SIDE, RECALL_GRID_TOP_OFFSET, 0);
    ctx.surface.write_cell(
        top + cursor.row as i32,
        left + cursor.col as i32,
        GLYPH_ON,
        Style::Task,
    )?;
    ctx.surface.refresh()
}
