//! # CWM — Complex Working-Memory Span Trainer
//!
//! A complex span task: the user judges whether 8×8 patterns are mirror
//! symmetric while memorizing a growing sequence of locations on a 4×4 grid,
//! then recalls the sequence in order. The sequence length ("level") follows a
//! two-in-a-row up/down staircase.
//!
//! ## Components
//!
//! | Component | Module | Entry point |
//! |-----------|--------|-------------|
//! | Stimulus generator | [`stimulus`] | [`stimulus::generate_symmetric`], [`stimulus::generate_asymmetric`], [`stimulus::generate_location`] |
//! | Symmetry judge | [`symmetry`] | [`symmetry::run_set`] (3 rounds, AND) |
//! | Spatial sequence | [`sequence`] | [`sequence::generate_sequence`], [`sequence::next_location`] |
//! | Recall validator | [`recall`] | [`recall::validate`] |
//! | Trial runner | [`trial`] | [`trial::run_trial`] |
//! | Difficulty controller | [`staircase`] | [`staircase::DifficultyController::record_and_advance`] |
//! | Session loop | [`session`] | [`session::run_session`] |
//!
//! ## Collaborators
//!
//! Components never touch the terminal or a global RNG. They receive a
//! [`io::TaskContext`] bundling a [`io::Surface`], an [`io::InputSource`], a
//! [`io::Clock`] and a [`io::RandomSource`]. The `cwm` binary wires in
//! [`terminal`] and [`random`]; tests use the scripted doubles in [`testing`].
//!
//! ## Binaries
//!
//! - `cwm`: the interactive trainer (configured through [`env_config`]).
//! - `cwm-simulate`: runs the staircase against a synthetic participant
//!   ([`simulation`]).

pub mod constants;
pub mod env_config;
pub mod error;
pub mod io;
pub mod logging;
pub mod random;
pub mod recall;
pub mod sequence;
pub mod session;
pub mod simulation;
pub mod staircase;
pub mod stimulus;
pub mod symmetry;
pub mod terminal;
pub mod testing;
pub mod trial;
pub mod types;
