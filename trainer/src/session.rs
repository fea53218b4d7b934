//! Session loop: continue/quit prompt, trial, staircase update, repeat.
//!
//! The prompt between trials is the only exit point. Nothing survives the
//! session beyond the returned [`SessionSummary`].

use tracing::info;

use crate::constants::*;
use crate::error::Result;
use crate::io::{Attribute, KeyEvent, Style, TaskContext};
use crate::staircase::DifficultyController;
use crate::trial::run_trial;
use crate::types::Level;

const BEGIN_KEYS: [KeyEvent; 2] = [KeyEvent::Continue, KeyEvent::Quit];

/// What the session did, derived from the controller when the user quits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub trials: usize,
    pub passes: usize,
    pub final_level: Level,
    pub peak_level: Level,
}

/// Show the start screen for `level` and wait for c/q. True means continue.
pub fn begin_prompt(ctx: &mut TaskContext<'_>, level: Level) -> Result<bool> {
    ctx.clear()?;
    ctx.surface
        .print_centered(TITLE_TEXT, Style::Banner, TITLE_OFFSET, 0, Attribute::Bold)?;
    ctx.say(&format!("Current level: {}", level), LEVEL_OFFSET)?;
    ctx.say(BEGIN_HINT_TEXT, BEGIN_HINT_OFFSET)?;
    Ok(ctx.wait_for(&BEGIN_KEYS)? == KeyEvent::Continue)
}

/// Run trials until the user quits at the prompt.
pub fn run_session(
    ctx: &mut TaskContext<'_>,
    controller: &mut DifficultyController,
) -> Result<SessionSummary> {
    let mut peak_level = controller.level();
    while begin_prompt(ctx, controller.level())? {
        let report = run_trial(ctx, controller.level())?;
        let next = controller.record_and_advance(report.passed);
        peak_level = peak_level.max(next);
    }
    ctx.clear()?;

    let history = controller.history();
    let summary = SessionSummary {
        trials: history.len(),
        passes: history.iter().filter(|&&ok| ok).count(),
        final_level: controller.level(),
        peak_level,
    };
    info!(
        trials = summary.trials,
        passes = summary.passes,
        final_level = summary.final_level,
        peak_level = summary.peak_level,
        "session ended"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingClock, RecordingSurface, ScriptedInput, ScriptedRandom};
    use crate::types::Timings;

    #[test]
    fn test_quit_runs_no_trial() {
        let mut surface = RecordingSurface::default();
        let mut input = ScriptedInput::new([KeyEvent::Other, KeyEvent::Yes, KeyEvent::Quit]);
        let mut clock = RecordingClock::new();
        let mut rng = ScriptedRandom::default();
        let mut controller = DifficultyController::new();
        let summary = {
            let mut ctx = TaskContext::new(
                &mut surface,
                &mut input,
                &mut clock,
                &mut rng,
                Timings::default(),
            );
            run_session(&mut ctx, &mut controller).unwrap()
        };
        assert_eq!(summary.trials, 0);
        assert_eq!(summary.final_level, 2);
        assert_eq!(summary.peak_level, 2);
        assert!(rng.requests().is_empty());
        assert_eq!(surface.count_writes("Current level: 2"), 1);
        assert_eq!(surface.count_writes(TITLE_TEXT), 1);
    }

    #[test]
    fn test_begin_prompt_answers() {
        let mut surface = RecordingSurface::default();
        let mut input = ScriptedInput::new([KeyEvent::Continue, KeyEvent::No, KeyEvent::Quit]);
        let mut clock = RecordingClock::new();
        let mut rng = ScriptedRandom::default();
        let mut ctx = TaskContext::new(
            &mut surface,
            &mut input,
            &mut clock,
            &mut rng,
            Timings::default(),
        );
        assert!(begin_prompt(&mut ctx, 3).unwrap());
        assert!(!begin_prompt(&mut ctx, 3).unwrap());
    }
}
