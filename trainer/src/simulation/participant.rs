//! Synthetic participant: a psychometric pass-probability curve over levels.

use serde::Serialize;

use crate::types::Level;

/// Participant whose chance of passing a trial falls off around `span`.
///
/// P(pass | L) = (1 − lapse) / (1 + exp(slope · (L − span − 0.5)))
///
/// so a trial at `L == span` passes with probability just above one half
/// (for moderate slopes) and `lapse` caps the ceiling below 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SyntheticParticipant {
    /// Level at which performance starts to break down.
    pub span: f64,
    /// Steepness of the breakdown; large values approach a step function.
    pub slope: f64,
    /// Probability of failing a trial regardless of level.
    pub lapse: f64,
}

impl Default for SyntheticParticipant {
    fn default() -> Self {
        Self {
            span: 4.0,
            slope: 1.5,
            lapse: 0.05,
        }
    }
}

impl SyntheticParticipant {
    pub fn pass_probability(&self, level: Level) -> f64 {
        let x = self.slope * (level as f64 - self.span - 0.5);
        ((1.0 - self.lapse) / (1.0 + x.exp())).clamp(0.0, 1.0)
    }
}
