//! Interactive complex working-memory span trainer.
//!
//! No command-line flags; see `cwm::env_config` for the environment knobs.

use cwm::env_config::EnvConfig;
use cwm::error::Result;
use cwm::io::{SystemClock, TaskContext};
use cwm::logging::init_file_logging;
use cwm::random::SeededRandom;
use cwm::session::{run_session, SessionSummary};
use cwm::staircase::DifficultyController;
use cwm::terminal::{install_panic_hook, TerminalGuard, TerminalInput, TerminalSurface};

fn run(config: &EnvConfig) -> Result<SessionSummary> {
    let mut rng = SeededRandom::new(config.seed);
    let mut controller = DifficultyController::new();

    let _guard = TerminalGuard::acquire()?;
    let mut surface = TerminalSurface::new();
    let mut input = TerminalInput;
    let mut clock = SystemClock;
    let mut ctx = TaskContext::new(
        &mut surface,
        &mut input,
        &mut clock,
        &mut rng,
        config.timings,
    );
    run_session(&mut ctx, &mut controller)
}

fn main() {
    let config = EnvConfig::from_env();
    if let Some(path) = &config.log_path {
        if let Err(e) = init_file_logging(path) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
    config.log_rejected();
    install_panic_hook();
    tracing::info!(seed = ?config.seed, "session start");

    // The guard inside `run` has restored the terminal by the time we print.
    match run(&config) {
        Ok(summary) => {
            println!(
                "Trials: {}  Passed: {}  Final level: {}  Peak level: {}",
                summary.trials, summary.passes, summary.final_level, summary.peak_level
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "session aborted");
            eprintln!("cwm: {}", e);
            std::process::exit(1);
        }
    }
}
