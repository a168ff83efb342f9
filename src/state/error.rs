//! Domain errors raised by the coordinator

use thiserror::Error;

/// Caller-input errors, surfaced synchronously and never retried
///
/// The command surface validates against the same catalog and duration
/// range before calling, so in normal operation neither variant fires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatorError {
    #[error("unknown theme id: {0}")]
    UnknownTheme(String),

    #[error("duration must be between 1 and 120 minutes, got {0}")]
    InvalidDuration(u64),
}
