//! Core data types: stimulus grids, recall locations, sequences and timings.

use std::fmt;
use std::time::Duration;

use crate::constants::*;

/// Sequence length of a trial. Always ≥ [`MIN_LEVEL`].
pub type Level = u32;

/// Ordered locations to memorize in one trial; repeats allowed.
pub type Sequence = Vec<Location>;

/// One cell of a stimulus grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Off,
    On,
}

impl Cell {
    /// Map a binary draw to a cell: 0 → Off, anything else → On.
    #[inline(always)]
    pub fn from_draw(draw: i32) -> Self {
        if draw == 0 {
            Cell::Off
        } else {
            Cell::On
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Off => GLYPH_OFF,
            Cell::On => GLYPH_ON,
        }
    }
}

/// 8×8 binary stimulus, indexed `cells[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub cells: [[Cell; STIMULUS_SIZE]; STIMULUS_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// All-Off grid.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Off; STIMULUS_SIZE]; STIMULUS_SIZE],
        }
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True iff every row is a horizontal palindrome, i.e. the grid is
    /// mirror-symmetric about its vertical centre line.
    pub fn is_mirror_symmetric(&self) -> bool {
        self.cells.iter().all(|row| {
            (0..STIMULUS_HALF).all(|c| row[c] == row[STIMULUS_SIZE - 1 - c])
        })
    }

    /// Render one row as glyphs, e.g. `"O**OO**O"`.
    pub fn row_string(&self, row: usize) -> String {
        self.cells[row].iter().map(|c| c.glyph()).collect()
    }
}

/// A generated grid together with its ground-truth label.
///
/// The label records which generator produced the grid. An asymmetric-mode
/// grid that happens to be palindromic still carries `symmetric == false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stimulus {
    pub grid: Grid,
    pub symmetric: bool,
}

/// A cell of the 4×4 recall grid, `row * 4 + col` in [0, 15].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location(u8);

impl Location {
    /// Validate an index. Returns `None` outside [0, 15].
    pub fn new(index: usize) -> Option<Self> {
        if index < NUM_LOCATIONS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Location at (row, col). Returns `None` if either is outside [0, 3].
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < RECALL_SIDE && col < RECALL_SIDE {
            Some(Self((row * RECALL_SIDE + col) as u8))
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn row(self) -> usize {
        self.index() / RECALL_SIDE
    }

    #[inline(always)]
    pub fn col(self) -> usize {
        self.index() % RECALL_SIDE
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation intervals. All delays are blocking sleeps on the session thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// How long a to-be-remembered location is shown.
    pub location_display: Duration,
    /// Blank interval after a location is cleared.
    pub location_gap: Duration,
    /// How long judgment and recall feedback stays on screen.
    pub feedback: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            location_display: Duration::from_millis(LOCATION_DISPLAY_MS),
            location_gap: Duration::from_millis(LOCATION_GAP_MS),
            feedback: Duration::from_millis(FEEDBACK_MS),
        }
    }
}
