//! End-to-end trials and sessions driven by scripted input and random draws.
//!
//! Every judgment round here uses a symmetric stimulus: coin draw 1 followed
//! by 32 cell draws of 0. The correct answer is therefore always `Yes`.

use cwm::constants::*;
use cwm::error::CwmError;
use cwm::io::{KeyEvent, TaskContext};
use cwm::recall::validate;
use cwm::session::run_session;
use cwm::staircase::DifficultyController;
use cwm::testing::{RecordingClock, RecordingSurface, ScriptedInput, ScriptedRandom};
use cwm::trial::run_trial;
use cwm::types::{Location, Timings};

/// Draws for one trial: per location, three symmetric rounds then the location.
fn trial_draws(locations: &[usize]) -> Vec<i32> {
    let mut draws = Vec::new();
    for &loc in locations {
        for _ in 0..JUDGMENTS_PER_SET {
            draws.push(1);
            draws.extend(std::iter::repeat(0).take(32));
        }
        draws.push(loc as i32);
    }
    draws
}

/// Cursor path from (0, 0) to `loc`, then confirm.
fn select(loc: usize) -> Vec<KeyEvent> {
    let mut keys = vec![KeyEvent::Down; loc / 4];
    keys.extend(vec![KeyEvent::Right; loc % 4]);
    keys.push(KeyEvent::Confirm);
    keys
}

/// Keys for one trial: judgments (the very first one wrong if `miss_judgment`)
/// followed by recall of `answers`.
fn trial_keys(locations: &[usize], answers: &[usize], miss_judgment: bool) -> Vec<KeyEvent> {
    let mut keys = Vec::new();
    for i in 0..locations.len() {
        for round in 0..JUDGMENTS_PER_SET {
            let wrong = miss_judgment && i == 0 && round == 0;
            keys.push(if wrong { KeyEvent::No } else { KeyEvent::Yes });
        }
    }
    for &answer in answers {
        keys.extend(select(answer));
    }
    keys
}

struct Harness {
    surface: RecordingSurface,
    input: ScriptedInput,
    clock: RecordingClock,
    rng: ScriptedRandom,
}

impl Harness {
    fn new(draws: Vec<i32>, keys: Vec<KeyEvent>) -> Self {
        Self {
            surface: RecordingSurface::default(),
            input: ScriptedInput::new(keys),
            clock: RecordingClock::new(),
            rng: ScriptedRandom::new(draws),
        }
    }

    fn ctx(&mut self) -> TaskContext<'_> {
        TaskContext::new(
            &mut self.surface,
            &mut self.input,
            &mut self.clock,
            &mut self.rng,
            Timings::default(),
        )
    }
}

#[test]
fn recall_matching_sequence_passes() {
    let sequence: Vec<Location> = [5, 12].iter().map(|&i| Location::new(i).unwrap()).collect();
    let mut keys = select(5);
    keys.extend(select(12));
    let mut h = Harness::new(vec![], keys);
    assert!(validate(&mut h.ctx(), &sequence).unwrap());
}

#[test]
fn recall_single_mismatch_fails() {
    let sequence: Vec<Location> = [5, 12].iter().map(|&i| Location::new(i).unwrap()).collect();
    let mut keys = select(5);
    keys.extend(select(11));
    let mut h = Harness::new(vec![], keys);
    assert!(!validate(&mut h.ctx(), &sequence).unwrap());
    assert_eq!(h.surface.count_writes(RECALL_INCORRECT_TEXT), 1);
}

#[test]
fn trial_passes_when_everything_is_right() {
    let mut h = Harness::new(trial_draws(&[5, 12]), trial_keys(&[5, 12], &[5, 12], false));
    let report = run_trial(&mut h.ctx(), 2).unwrap();
    assert!(report.passed);
    assert_eq!(report.sequence.len(), 2);
    assert_eq!(h.input.remaining(), 0);
    assert_eq!(h.rng.remaining(), 0);
}

#[test]
fn trial_fails_on_one_wrong_recall_item() {
    let mut h = Harness::new(trial_draws(&[5, 12]), trial_keys(&[5, 12], &[5, 11], false));
    let report = run_trial(&mut h.ctx(), 2).unwrap();
    assert!(report.symmetry_passed());
    assert!(!report.recall_passed);
    assert!(!report.passed);
}

#[test]
fn trial_presents_then_recalls_in_order() {
    let mut h = Harness::new(trial_draws(&[3, 3, 0]), trial_keys(&[3, 3, 0], &[3, 3, 0], false));
    let report = run_trial(&mut h.ctx(), 3).unwrap();
    assert!(report.passed);
    assert_eq!(h.surface.count_writes(LOCATION_PROMPT_TEXT), 3);
    assert_eq!(h.surface.count_writes(JUDGMENT_PROMPT_TEXT), 9);
    assert_eq!(h.surface.count_writes("Where was location 3?"), 1);
}

#[test]
fn session_follows_staircase_scenario() {
    // Outcomes pass, pass, fail, fail: levels 2, 2, 3, 3, then 2.
    let trials: [(&[usize], &[usize], bool); 4] = [
        (&[1, 2], &[1, 2], false),
        (&[4, 8], &[4, 8], false),
        (&[0, 15, 7], &[0, 15, 7], true),
        (&[9, 9, 9], &[9, 9, 6], false),
    ];
    let mut draws = Vec::new();
    let mut keys = Vec::new();
    for (locations, answers, miss) in trials {
        draws.extend(trial_draws(locations));
        keys.push(KeyEvent::Continue);
        keys.extend(trial_keys(locations, answers, miss));
    }
    keys.push(KeyEvent::Quit);

    let mut h = Harness::new(draws, keys);
    let mut controller = DifficultyController::new();
    let summary = run_session(&mut h.ctx(), &mut controller).unwrap();

    assert_eq!(controller.history(), &[true, true, false, false]);
    assert_eq!(summary.trials, 4);
    assert_eq!(summary.passes, 2);
    assert_eq!(summary.final_level, 2);
    assert_eq!(summary.peak_level, 3);
    assert_eq!(h.surface.count_writes("Current level: 2"), 3);
    assert_eq!(h.surface.count_writes("Current level: 3"), 2);
    assert_eq!(h.input.remaining(), 0);
}

#[test]
fn session_aborts_when_input_fails_mid_trial() {
    let keys = vec![KeyEvent::Continue, KeyEvent::Yes];
    let mut h = Harness::new(trial_draws(&[0, 0]), keys);
    let mut controller = DifficultyController::new();
    let err = run_session(&mut h.ctx(), &mut controller).unwrap_err();
    assert!(matches!(err, CwmError::InputExhausted { consumed: 2 }));
    assert!(controller.history().is_empty());
}

#[test]
fn presentation_uses_configured_timings() {
    let mut h = Harness::new(trial_draws(&[0]), trial_keys(&[0], &[0], false));
    let timings = Timings::default();
    run_trial(&mut h.ctx(), 1).unwrap();
    // 3 judgment feedbacks, display + gap, 1 recall feedback.
    assert_eq!(
        h.clock.sleeps,
        vec![
            timings.feedback,
            timings.feedback,
            timings.feedback,
            timings.location_display,
            timings.location_gap,
            timings.feedback,
        ]
    );
    assert_eq!(
        h.clock.total(),
        timings.feedback * 4 + timings.location_display + timings.location_gap
    );
}
