//! Staircase simulation: drive the real [`DifficultyController`] with
//! Bernoulli trial outcomes from a [`SyntheticParticipant`].
//!
//! Sessions are independent, so a batch runs them in parallel with seeds
//! `seed, seed + 1, ...`; results are reproducible for a given seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::staircase::DifficultyController;
use crate::types::Level;

use super::participant::SyntheticParticipant;

/// One simulated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionTrace {
    pub seed: u64,
    /// Level each trial ran at.
    pub levels: Vec<Level>,
    pub outcomes: Vec<bool>,
    /// Level the next trial would run at.
    pub final_level: Level,
}

/// Aggregate over a batch of sessions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchSummary {
    pub sessions: usize,
    pub trials: usize,
    pub mean_final_level: f64,
    pub min_final_level: Level,
    pub max_final_level: Level,
    /// Mean trial level over the second half of each session.
    pub mean_tail_level: f64,
    pub pass_rate: f64,
}

/// Run `trials` trials for one participant.
pub fn simulate_session(participant: &SyntheticParticipant, trials: usize, seed: u64) -> SessionTrace {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut controller = DifficultyController::new();
    let mut levels = Vec::with_capacity(trials);

    for _ in 0..trials {
        let level = controller.level();
        let passed = rng.random::<f64>() < participant.pass_probability(level);
        levels.push(level);
        controller.record_and_advance(passed);
    }

    SessionTrace {
        seed,
        levels,
        outcomes: controller.history().to_vec(),
        final_level: controller.level(),
    }
}

/// Run `sessions` independent sessions in parallel.
pub fn simulate_batch(
    participant: &SyntheticParticipant,
    trials: usize,
    sessions: usize,
    seed: u64,
) -> Vec<SessionTrace> {
    (0..sessions)
        .into_par_iter()
        .map(|i| simulate_session(participant, trials, seed.wrapping_add(i as u64)))
        .collect()
}

/// Summary statistics of a batch. An empty batch yields zeros.
pub fn summarize(traces: &[SessionTrace]) -> BatchSummary {
    let sessions = traces.len();
    let trials = traces.first().map_or(0, |t| t.levels.len());
    if sessions == 0 {
        return BatchSummary {
            sessions,
            trials,
            mean_final_level: 0.0,
            min_final_level: 0,
            max_final_level: 0,
            mean_tail_level: 0.0,
            pass_rate: 0.0,
        };
    }

    let finals: Vec<Level> = traces.iter().map(|t| t.final_level).collect();
    let mean_final_level = finals.iter().map(|&l| l as f64).sum::<f64>() / sessions as f64;

    let mut tail_sum = 0.0;
    let mut tail_count = 0usize;
    let mut passes = 0usize;
    let mut total = 0usize;
    for trace in traces {
        let tail = &trace.levels[trace.levels.len() / 2..];
        tail_sum += tail.iter().map(|&l| l as f64).sum::<f64>();
        tail_count += tail.len();
        passes += trace.outcomes.iter().filter(|&&ok| ok).count();
        total += trace.outcomes.len();
    }

    BatchSummary {
        sessions,
        trials,
        mean_final_level,
        min_final_level: finals.iter().copied().min().unwrap_or(0),
        max_final_level: finals.iter().copied().max().unwrap_or(0),
        mean_tail_level: if tail_count > 0 {
            tail_sum / tail_count as f64
        } else {
            0.0
        },
        pass_rate: if total > 0 {
            passes as f64 / total as f64
        } else {
            0.0
        },
    }
}
