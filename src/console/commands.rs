//! Command parsing and dispatch for the interactive console
//!
//! Stdin commands stand in for the page's buttons and settings dialog.
//! Button-style commands click the menu cue the way the buttons do; the
//! `set` command commits a settings draft as one unit.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::state::{CoordinatorError, TimerCoordinator};

use super::render::format_clock;

/// A parsed console command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Pause,
    Restart,
    Theme(String),
    Duration(u64),
    Set(SettingsDraft),
    Themes,
    Status,
    Help,
    Quit,
}

/// Uncommitted settings edited as a unit
///
/// Parsed from one `set` line and applied only as a whole; an invalid
/// line never reaches the coordinator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDraft {
    pub theme: Option<String>,
    pub duration_minutes: Option<u64>,
}

impl SettingsDraft {
    /// Check whether the draft changes anything
    pub fn is_empty(&self) -> bool {
        self.theme.is_none() && self.duration_minutes.is_none()
    }

    /// Apply theme first, then duration, the way the settings dialog commits
    pub fn apply(&self, coordinator: &TimerCoordinator) -> Result<(), CoordinatorError> {
        if let Some(theme) = &self.theme {
            coordinator.set_theme(theme)?;
        }
        if let Some(minutes) = self.duration_minutes {
            coordinator.set_duration(minutes)?;
        }
        Ok(())
    }
}

/// Parse one non-empty console line
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let word = parts.next().unwrap_or_default();

    match word {
        "start" => Ok(Command::Start),
        "pause" => Ok(Command::Pause),
        "restart" => Ok(Command::Restart),
        "theme" => parts
            .next()
            .map(|id| Command::Theme(id.to_string()))
            .ok_or_else(|| "Usage: theme <id>".to_string()),
        "duration" => {
            let raw = parts
                .next()
                .ok_or_else(|| "Usage: duration <minutes>".to_string())?;
            raw.parse()
                .map(Command::Duration)
                .map_err(|_| format!("Not a number of minutes: {}", raw))
        }
        "set" => parse_draft(parts),
        "themes" => Ok(Command::Themes),
        "status" => Ok(Command::Status),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command: {} (try 'help')", other)),
    }
}

fn parse_draft<'a>(pairs: impl Iterator<Item = &'a str>) -> Result<Command, String> {
    let mut draft = SettingsDraft::default();

    for pair in pairs {
        match pair.split_once('=') {
            Some(("theme", value)) if !value.is_empty() => {
                draft.theme = Some(value.to_string());
            }
            Some(("duration", value)) => {
                let minutes = value
                    .parse()
                    .map_err(|_| format!("Not a number of minutes: {}", value))?;
                draft.duration_minutes = Some(minutes);
            }
            _ => {
                return Err(format!(
                    "Unknown setting: {} (expected theme=<id> and/or duration=<minutes>)",
                    pair
                ));
            }
        }
    }

    if draft.is_empty() {
        return Err("Usage: set theme=<id> duration=<minutes>".to_string());
    }
    Ok(Command::Set(draft))
}

/// Read commands from stdin and drive the coordinator until quit or EOF
pub async fn command_loop(coordinator: Arc<TimerCoordinator>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("Console input closed");
                break;
            }
            Err(e) => {
                warn!("Failed to read console input: {}", e);
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Ok(Command::Quit) => break,
            Ok(command) => dispatch(&coordinator, command),
            Err(message) => println!("{}", message),
        }
    }
}

fn dispatch(coordinator: &TimerCoordinator, command: Command) {
    match command {
        Command::Start => {
            coordinator.play_menu_click();
            coordinator.start();
        }
        Command::Pause => {
            coordinator.play_menu_click();
            coordinator.pause();
        }
        Command::Restart => {
            coordinator.play_menu_click();
            coordinator.restart();
        }
        Command::Theme(id) => report(coordinator.set_theme(&id)),
        Command::Duration(minutes) => report(coordinator.set_duration(minutes)),
        Command::Set(draft) => report(draft.apply(coordinator)),
        Command::Themes => {
            let active = coordinator.theme_id();
            for (id, theme) in coordinator.catalog().iter() {
                let marker = if *id == active { "*" } else { " " };
                println!(" {} {:<16} {}", marker, id, theme.name);
            }
        }
        Command::Status => {
            let snapshot = coordinator.snapshot();
            println!(
                "{} | {} of {} | {:.0}% | {}",
                snapshot.theme_name,
                format_clock(snapshot.time_left_seconds),
                format_clock(snapshot.total_seconds),
                snapshot.progress_percent(),
                if snapshot.is_running { "running" } else { "paused" },
            );
        }
        Command::Help => print_help(),
        Command::Quit => {}
    }
}

fn report(result: Result<(), CoordinatorError>) {
    if let Err(e) = result {
        println!("{}", e);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  start | pause | restart          drive the countdown");
    println!("  theme <id>                       switch theme");
    println!("  duration <minutes>               set a new countdown length (1-120)");
    println!("  set theme=<id> duration=<m>      apply settings together");
    println!("  themes                           list available themes");
    println!("  status                           show the current countdown");
    println!("  quit                             exit");
}
