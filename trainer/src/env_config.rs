//! Environment configuration for the `cwm` binary.
//!
//! `cwm` takes no command-line flags. The few knobs it has are read once at
//! startup; missing or unparsable values fall back to the defaults.
//! Unparsable values are kept in [`EnvConfig::rejected`] and reported by
//! [`EnvConfig::log_rejected`] once logging is up.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CWM_SEED` | OS entropy | fixed RNG seed |
//! | `CWM_LOCATION_DISPLAY_MS` | 650 | location display interval |
//! | `CWM_LOCATION_GAP_MS` | 500 | blank interval after a location |
//! | `CWM_FEEDBACK_MS` | 500 | feedback display interval |
//! | `CWM_LOG` | unset | log file path; logging is off when unset |

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::constants::*;
use crate::types::Timings;

/// Settings read from the environment.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EnvConfig {
    pub seed: Option<u64>,
    pub timings: Timings,
    pub log_path: Option<PathBuf>,
    /// `(variable, raw value)` pairs that failed to parse.
    pub rejected: Vec<(String, String)>,
}

impl EnvConfig {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut rejected = Vec::new();
        let seed = parse_var(&lookup, "CWM_SEED", &mut rejected);
        let mut millis = |key: &str, default: u64| {
            Duration::from_millis(parse_var(&lookup, key, &mut rejected).unwrap_or(default))
        };
        let timings = Timings {
            location_display: millis("CWM_LOCATION_DISPLAY_MS", LOCATION_DISPLAY_MS),
            location_gap: millis("CWM_LOCATION_GAP_MS", LOCATION_GAP_MS),
            feedback: millis("CWM_FEEDBACK_MS", FEEDBACK_MS),
        };
        Self {
            seed,
            timings,
            log_path: lookup("CWM_LOG")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            rejected,
        }
    }

    /// Emit one warning per rejected value. Call after the subscriber is
    /// installed.
    pub fn log_rejected(&self) {
        for (key, value) in &self.rejected {
            warn!(key = %key, value = %value, "ignoring unparsable environment value");
        }
    }
}

/// Parse `key` if set. Unparsable values are recorded in `rejected` and
/// treated as unset.
fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    rejected: &mut Vec<(String, String)>,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            rejected.push((key.to_string(), raw));
            None
        }
    }
}
