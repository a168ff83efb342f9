//! Countdown state structure and invariants

/// Default countdown duration in minutes
pub const DEFAULT_DURATION_MINUTES: u64 = 25;

/// Smallest accepted countdown duration in minutes
pub const MIN_DURATION_MINUTES: u64 = 1;

/// Largest accepted countdown duration in minutes
pub const MAX_DURATION_MINUTES: u64 = 120;

/// Countdown state for a single focus session
///
/// `time_left_seconds` only moves while the countdown is running and
/// positive; `alert_has_fired` latches at the zero-crossing and re-arms
/// whenever the remaining time is set away from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    pub time_left_seconds: u64,
    pub total_seconds: u64,
    pub is_running: bool,
    pub alert_has_fired: bool,
}

impl CountdownState {
    /// Create an idle countdown of the default duration
    pub fn new() -> Self {
        Self::with_total(DEFAULT_DURATION_MINUTES * 60)
    }

    /// Create an idle countdown of the given total length in seconds
    pub fn with_total(total_seconds: u64) -> Self {
        Self {
            time_left_seconds: total_seconds,
            total_seconds,
            is_running: false,
            alert_has_fired: false,
        }
    }

    /// Check whether the cadence driver should be delivering ticks
    pub fn is_ticking(&self) -> bool {
        self.is_running && self.time_left_seconds > 0
    }

    /// Reset to a full, stopped countdown and re-arm the alert
    pub fn reset(&mut self) {
        self.time_left_seconds = self.total_seconds;
        self.is_running = false;
        self.alert_has_fired = false;
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new()
    }
}
