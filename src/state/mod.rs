//! State management module
//!
//! This module contains the countdown core and the coordinator that keeps
//! countdown, cadence, and audio cues synchronized.

pub mod coordinator;
pub mod countdown_state;
pub mod error;

// Re-export main types
pub use coordinator::{CadencePhase, CoordinatorOptions, DisplaySnapshot, TimerCoordinator};
pub use countdown_state::{
    CountdownState, DEFAULT_DURATION_MINUTES, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES,
};
pub use error::CoordinatorError;
