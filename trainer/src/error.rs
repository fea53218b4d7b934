//! Error type shared by the task components and their collaborators.
//!
//! Unrecognized input is not an error; it is ignored and polled again.

/// Failures that abort a session.
#[derive(thiserror::Error, Debug)]
pub enum CwmError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("interrupted by user")]
    Interrupted,
    #[error("scripted input exhausted after {consumed} events")]
    InputExhausted { consumed: usize },
    #[error("cannot initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, CwmError>;
