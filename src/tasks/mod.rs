//! Background tasks module
//!
//! This module contains the cadence task that runs alongside the console.

pub mod cadence;

// Re-export main functions
pub use cadence::cadence_task;
