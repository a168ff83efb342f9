//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "bonfire")]
#[command(about = "A themed focus timer with audio cues")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Initial countdown duration in minutes
    #[arg(short, long, default_value = "25")]
    pub duration: u64,

    /// Theme to start with, overriding the saved selection
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Directory containing the theme audio assets
    #[arg(long, default_value = "assets/sounds")]
    pub sounds_dir: PathBuf,

    /// TOML file with additional theme definitions
    #[arg(long)]
    pub themes_file: Option<PathBuf>,

    /// Master volume in percent
    #[arg(long, default_value = "100")]
    pub volume: u8,

    /// Disable audio playback entirely
    #[arg(short, long)]
    pub mute: bool,

    /// Directory for the saved theme selection (defaults to the user config directory)
    #[arg(long)]
    pub state_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page() {
        let config = Config::try_parse_from(["bonfire"]).unwrap();
        assert_eq!(config.duration, 25);
        assert_eq!(config.volume, 100);
        assert_eq!(config.theme, None);
        assert!(!config.mute);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "bonfire",
            "-d",
            "50",
            "-t",
            "shadowColossus",
            "--volume",
            "40",
            "-m",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.duration, 50);
        assert_eq!(config.theme, Some("shadowColossus".to_string()));
        assert_eq!(config.volume, 40);
        assert!(config.mute);
        assert_eq!(config.log_level(), "debug");
    }
}
