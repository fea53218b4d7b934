//! Offline staircase simulation.
//!
//! - [`participant`]: synthetic pass-probability curve
//! - [`engine`]: single sessions, parallel batches and their summary

pub mod engine;
pub mod participant;

pub use engine::{simulate_batch, simulate_session, summarize, BatchSummary, SessionTrace};
pub use participant::SyntheticParticipant;
