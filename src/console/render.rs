//! Countdown status rendering

use chrono::Local;
use tokio::sync::watch;

use crate::state::DisplaySnapshot;

/// Format seconds as MM:SS
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Build the status line for one snapshot
///
/// Mirrors the page layout in one line: local date and time, theme name,
/// remaining time, remaining share, run state.
pub fn render_line(snapshot: &DisplaySnapshot) -> String {
    format!(
        "[{}] {} | {} | {:.0}% | {}",
        Local::now().format("%b %-d, %Y %-I:%M:%S %p"),
        snapshot.theme_name,
        format_clock(snapshot.time_left_seconds),
        snapshot.progress_percent(),
        if snapshot.is_running { "running" } else { "paused" },
    )
}

/// Print one status line per display update until the channel closes
pub async fn render_task(mut display_rx: watch::Receiver<DisplaySnapshot>) {
    loop {
        let snapshot = display_rx.borrow_and_update().clone();
        println!("{}", render_line(&snapshot));

        if display_rx.changed().await.is_err() {
            break;
        }
    }
}
