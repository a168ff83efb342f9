//! Bonfire - a themed focus timer for the terminal
//!
//! This is the main entry point for the bonfire application.

use std::sync::Arc;

use tracing::{info, warn};

use bonfire::{
    audio::{AudioBackend, RodioBackend, SilentBackend},
    config::Config,
    console::command_loop,
    console::render_task,
    state::{CoordinatorOptions, TimerCoordinator},
    storage::{FileKeyStore, InMemoryKeyStore, PersistentKeyStore},
    tasks::cadence_task,
    themes::ThemeCatalog,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("bonfire={}", config.log_level()))
        .init();

    info!("Starting bonfire focus timer");
    info!(
        "Configuration: duration={}min, volume={}%, sounds_dir={}",
        config.duration,
        config.volume,
        config.sounds_dir.display()
    );

    let mut catalog = ThemeCatalog::builtin();
    if let Some(path) = &config.themes_file {
        match catalog.merge_from_toml_file(path) {
            Ok(count) => info!("Loaded {} themes from {}", count, path.display()),
            Err(e) => {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
    }

    let backend: Box<dyn AudioBackend> = if config.mute {
        info!("Audio muted");
        Box::new(SilentBackend)
    } else {
        Box::new(RodioBackend::new(config.sounds_dir.clone()))
    };

    let store: Box<dyn PersistentKeyStore> = match &config.state_dir {
        Some(dir) => Box::new(FileKeyStore::new(dir.clone())),
        None => match FileKeyStore::in_user_config() {
            Some(store) => Box::new(store),
            None => {
                warn!("No user config directory, theme selection will not persist");
                Box::new(InMemoryKeyStore::new())
            }
        },
    };

    let coordinator = Arc::new(TimerCoordinator::new(
        catalog,
        backend,
        store,
        CoordinatorOptions {
            theme_override: config.theme.clone(),
            duration_minutes: config.duration,
            master_volume: config.volume,
        },
    )?);

    // Start the cadence background task
    tokio::spawn(cadence_task(Arc::clone(&coordinator)));

    // Start the status renderer
    tokio::spawn(render_task(coordinator.display_updates()));

    info!("Commands:");
    info!("  start | pause | restart       - drive the countdown");
    info!("  theme <id> | duration <min>   - change one setting");
    info!("  set theme=<id> duration=<m>   - apply settings together");
    info!("  themes | status | help | quit");

    // Run the console until quit/EOF or a shutdown signal
    tokio::select! {
        _ = command_loop(Arc::clone(&coordinator)) => {
            info!("Console closed");
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    coordinator.teardown();
    info!("Shutdown complete");
    Ok(())
}
