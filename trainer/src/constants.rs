//! Task constants: grid geometry, staircase bounds, presentation timings and
//! the fixed on-screen texts.
//!
//! Layout offsets are row offsets from the vertical centre of the surface, as
//! consumed by [`Surface::print_centered`](crate::io::Surface::print_centered).

/// Side length of the symmetry stimulus grid.
pub const STIMULUS_SIZE: usize = 8;

/// Columns drawn at random per symmetric row; the other half is the mirror.
pub const STIMULUS_HALF: usize = STIMULUS_SIZE / 2;

/// Side length of the recall grid.
pub const RECALL_SIDE: usize = 4;

/// Number of addressable recall locations: 4 × 4 = 16.
pub const NUM_LOCATIONS: usize = RECALL_SIDE * RECALL_SIDE;

/// Judgment rounds per symmetry set.
pub const JUDGMENTS_PER_SET: usize = 3;

/// Level every session starts at (and is held at for the first two trials).
pub const START_LEVEL: u32 = 2;

/// The staircase never goes below this level.
pub const MIN_LEVEL: u32 = 1;

/// How long a to-be-remembered location stays on screen.
pub const LOCATION_DISPLAY_MS: u64 = 650;

/// Blank interval after a location is cleared.
pub const LOCATION_GAP_MS: u64 = 500;

/// How long "Right"/"Wrong" and "Correct"/"Incorrect" stay on screen.
pub const FEEDBACK_MS: u64 = 500;

/// Glyph for an OFF cell (and empty recall cells).
pub const GLYPH_OFF: char = 'O';

/// Glyph for an ON cell, the remembered location and the recall cursor.
pub const GLYPH_ON: char = '*';

/// Background fill character.
pub const GLYPH_BLANK: char = ' ';

// ── Layout (row offsets from centre) ────────────────────────────────────

pub const TITLE_OFFSET: i32 = -10;
pub const LEVEL_OFFSET: i32 = 0;
pub const BEGIN_HINT_OFFSET: i32 = 1;

pub const STIMULUS_TOP_OFFSET: i32 = 0;
pub const JUDGMENT_PROMPT_OFFSET: i32 = 8;
pub const JUDGMENT_HINT_OFFSET: i32 = 9;

pub const LOCATION_PROMPT_OFFSET: i32 = 0;
pub const RECALL_GRID_TOP_OFFSET: i32 = 1;
pub const RECALL_HINT_OFFSET: i32 = 5;
pub const RECALL_FEEDBACK_OFFSET: i32 = 6;

// ── Texts ───────────────────────────────────────────────────────────────

pub const TITLE_TEXT: &str = "Complex Working Memory Span Testing and Training Program";
pub const BEGIN_HINT_TEXT: &str = "Press c to enter testing or q to quit.";
pub const JUDGMENT_PROMPT_TEXT: &str = "Is this pattern symmetrical?";
pub const JUDGMENT_HINT_TEXT: &str = "y/n";
pub const JUDGMENT_RIGHT_TEXT: &str = "Right";
pub const JUDGMENT_WRONG_TEXT: &str = "Wrong";
pub const LOCATION_PROMPT_TEXT: &str = "Remember the location of the star.";
pub const RECALL_HINT_TEXT: &str = "Use the arrow keys to move the star and press space to select.";
pub const RECALL_CORRECT_TEXT: &str = "Correct";
pub const RECALL_INCORRECT_TEXT: &str = "Incorrect";
