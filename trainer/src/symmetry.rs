//! Symmetry judgment sub-task: three rounds of "is this grid symmetric?".

use tracing::debug;

use crate::constants::*;
use crate::error::Result;
use crate::io::{KeyEvent, TaskContext};
use crate::stimulus::generate_stimulus;
use crate::types::Stimulus;

/// Responses accepted while a stimulus is on screen.
const JUDGMENT_KEYS: [KeyEvent; 2] = [KeyEvent::Yes, KeyEvent::No];

/// Run one set of [`JUDGMENTS_PER_SET`] rounds. True only if every round was
/// answered correctly. All rounds run even after a wrong answer.
pub fn run_set(ctx: &mut TaskContext<'_>) -> Result<bool> {
    let mut result = true;
    for round in 0..JUDGMENTS_PER_SET {
        let correct = judge_round(ctx)?;
        debug!(round, correct, "symmetry judgment");
        result = result && correct;
    }
    Ok(result)
}

/// One round: generate, present, wait for y/n, score, show feedback, clear.
pub fn judge_round(ctx: &mut TaskContext<'_>) -> Result<bool> {
    let stimulus = generate_stimulus(&mut *ctx.rng);
    debug!(
        symmetric = stimulus.symmetric,
        mirrored = stimulus.grid.is_mirror_symmetric(),
        "stimulus"
    );
    display_stimulus(ctx, &stimulus)?;
    ctx.say(JUDGMENT_PROMPT_TEXT, JUDGMENT_PROMPT_OFFSET)?;
    ctx.say(JUDGMENT_HINT_TEXT, JUDGMENT_HINT_OFFSET)?;

    let answer = ctx.wait_for(&JUDGMENT_KEYS)?;
    let correct = score_answer(answer, stimulus.symmetric);
    let feedback = if correct {
        JUDGMENT_RIGHT_TEXT
    } else {
        JUDGMENT_WRONG_TEXT
    };
    ctx.say(feedback, JUDGMENT_HINT_OFFSET)?;
    ctx.clock.sleep(ctx.timings.feedback);
    ctx.clear()?;
    Ok(correct)
}

/// An answer is right iff it matches the label the stimulus was generated with.
#[inline(always)]
pub fn score_answer(answer: KeyEvent, symmetric: bool) -> bool {
    match answer {
        KeyEvent::Yes => symmetric,
        KeyEvent::No => !symmetric,
        _ => false,
    }
}

/// Clear and draw the 8 grid rows centred, starting at the middle row.
fn display_stimulus(ctx: &mut TaskContext<'_>, stimulus: &Stimulus) -> Result<()> {
    ctx.clear()?;
    for row in 0..STIMULUS_SIZE {
        let line = stimulus.grid.row_string(row);
        ctx.say(&line, STIMULUS_TOP_OFFSET + row as i32)?;
    }
    Ok(())
}
