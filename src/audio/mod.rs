//! Audio playback module
//!
//! This module contains the cue abstraction used by the coordinator and
//! the rodio-backed implementation used by the binary.

pub mod cues;
pub mod rodio_backend;

// Re-export main types
pub use cues::{
    AudioBackend, AudioCue, AudioCueSet, CueOptions, SilentBackend, SilentCue, ALERT_VOLUME,
    MENU_CLICK_VOLUME, WORK_LOOP_VOLUME,
};
pub use rodio_backend::RodioBackend;
