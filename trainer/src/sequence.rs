//! Spatial sequence generation: draw a location, show it, clear, repeat.

use tracing::debug;

use crate::constants::*;
use crate::error::Result;
use crate::io::TaskContext;
use crate::stimulus::generate_location;
use crate::types::{Level, Location, Sequence};

/// Draw one location and present it. The draw happens only after the
/// previous item has been shown and cleared.
pub fn next_location(ctx: &mut TaskContext<'_>) -> Result<Location> {
    let location = generate_location(&mut *ctx.rng);
    debug!(%location, "present location");
    present_location(ctx, location)?;
    Ok(location)
}

/// `level` locations, each drawn independently (duplicates allowed) and
/// presented before the next one is drawn.
pub fn generate_sequence(ctx: &mut TaskContext<'_>, level: Level) -> Result<Sequence> {
    let mut sequence = Vec::with_capacity(level as usize);
    for _ in 0..level {
        sequence.push(next_location(ctx)?);
    }
    Ok(sequence)
}

/// The 4 rows of the recall grid with `*` at `location`, `O` elsewhere.
pub fn location_rows(location: Location) -> [String; RECALL_SIDE] {
    std::array::from_fn(|row| {
        (0..RECALL_SIDE)
            .map(|col| {
                if row == location.row() && col == location.col() {
                    GLYPH_ON
                } else {
                    GLYPH_OFF
                }
            })
            .collect()
    })
}

/// Show the location for the display interval, then clear and hold blank.
fn present_location(ctx: &mut TaskContext<'_>, location: Location) -> Result<()> {
    ctx.clear()?;
    ctx.say(LOCATION_PROMPT_TEXT, LOCATION_PROMPT_OFFSET)?;
    for (i, line) in location_rows(location).iter().enumerate() {
        ctx.say(line, RECALL_GRID_TOP_OFFSET + i as i32)?;
    }
    ctx.clock.sleep(ctx.timings.location_display);
    ctx.clear()?;
    ctx.clock.sleep(ctx.timings.location_gap);
    Ok(())
}
