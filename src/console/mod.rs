//! Interactive console module
//!
//! This module contains the command surface and the status renderer that
//! together replace the page's buttons, dialog, and circular display.

pub mod commands;
pub mod render;

// Re-export main functions
pub use commands::{command_loop, parse_command, Command, SettingsDraft};
pub use render::{format_clock, render_task};
