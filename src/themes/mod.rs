//! Theme catalog module
//!
//! Read-only theme configuration: display names, asset references,
//! color tokens, and particle presets.

pub mod catalog;

// Re-export main types
pub use catalog::{
    ParticlePreset, ThemeCatalog, ThemeColors, ThemeConfig, ThemeSounds, DEFAULT_THEME_ID,
};
