//! One complete trial: symmetry sets interleaved with location presentation,
//! followed by recall of the whole sequence.

use tracing::info;

use crate::error::Result;
use crate::io::TaskContext;
use crate::recall::validate;
use crate::sequence::next_location;
use crate::symmetry::run_set;
use crate::types::{Level, Sequence};

/// Result of one trial.
///
/// `passed` is the trial outcome fed to the staircase: the AND of every
/// symmetry judgment and every recall item. The component flags are kept for
/// logging only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialReport {
    pub level: Level,
    pub sequence: Sequence,
    /// Pass/fail of each symmetry set, in presentation order.
    pub symmetry_sets: Vec<bool>,
    pub recall_passed: bool,
    pub passed: bool,
}

impl TrialReport {
    pub fn symmetry_passed(&self) -> bool {
        self.symmetry_sets.iter().all(|&ok| ok)
    }
}

/// Run a trial at `level`: `level` × (symmetry set, then one location), then
/// recall. No partial credit.
pub fn run_trial(ctx: &mut TaskContext<'_>, level: Level) -> Result<TrialReport> {
    let mut result = true;
    let mut sequence = Vec::with_capacity(level as usize);
    let mut symmetry_sets = Vec::with_capacity(level as usize);

    for _ in 0..level {
        let set_passed = run_set(ctx)?;
        symmetry_sets.push(set_passed);
        result = set_passed && result;
        sequence.push(next_location(ctx)?);
    }

    let recall_passed = validate(ctx, &sequence)?;
    result = recall_passed && result;

    let report = TrialReport {
        level,
        sequence,
        symmetry_sets,
        recall_passed,
        passed: result,
    };
    info!(
        level,
        passed = report.passed,
        symmetry = report.symmetry_passed(),
        recall = report.recall_passed,
        "trial complete"
    );
    Ok(report)
}
