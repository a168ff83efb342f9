//! Countdown and audio-cue coordination
//!
//! The coordinator owns the countdown state, the active theme, and the
//! three audio cues, and keeps them synchronized across ticks, theme
//! swaps, and duration changes. All operations are synchronous and
//! return immediately; observers receive state through a watch channel.

use std::sync::{Mutex, MutexGuard};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::audio::{AudioBackend, AudioCueSet};
use crate::state::countdown_state::{
    CountdownState, DEFAULT_DURATION_MINUTES, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES,
};
use crate::state::error::CoordinatorError;
use crate::storage::{PersistentKeyStore, SELECTED_THEME_KEY};
use crate::themes::{ThemeCatalog, DEFAULT_THEME_ID};

/// Cadence driver phase published by the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CadencePhase {
    Idle,
    Ticking,
    Shutdown,
}

/// Snapshot of the observable countdown state for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySnapshot {
    pub theme_id: String,
    pub theme_name: String,
    pub time_left_seconds: u64,
    pub total_seconds: u64,
    pub is_running: bool,
}

impl DisplaySnapshot {
    /// Share of the countdown still remaining, in percent
    pub fn progress_percent(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        self.time_left_seconds as f64 / self.total_seconds as f64 * 100.0
    }
}

/// Startup options for the coordinator
#[derive(Debug, Clone)]
pub struct CoordinatorOptions {
    /// Theme to use instead of the stored selection
    pub theme_override: Option<String>,
    /// Initial countdown duration in minutes
    pub duration_minutes: u64,
    /// Master volume in percent, scaling every cue
    pub master_volume: u8,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            theme_override: None,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            master_volume: 100,
        }
    }
}

/// State mutated together under one lock
struct CoordinatorInner {
    countdown: CountdownState,
    theme_id: String,
    cues: Option<AudioCueSet>,
    torn_down: bool,
}

/// Coordinates the countdown, the cadence driver, and the audio cues
///
/// Shared as `Arc<TimerCoordinator>` between the cadence task and the
/// command surface; mutation happens only through these methods.
pub struct TimerCoordinator {
    inner: Mutex<CoordinatorInner>,
    catalog: ThemeCatalog,
    backend: Box<dyn AudioBackend>,
    store: Box<dyn PersistentKeyStore>,
    master_volume: u8,
    cadence_tx: watch::Sender<CadencePhase>,
    display_tx: watch::Sender<DisplaySnapshot>,
    /// Keep the receivers alive to prevent channel closure
    _cadence_rx: watch::Receiver<CadencePhase>,
    _display_rx: watch::Receiver<DisplaySnapshot>,
}

impl TimerCoordinator {
    /// Create a coordinator with its starting theme resolved and cues loaded
    ///
    /// The theme comes from the override when given, else from the stored
    /// selection when it names a catalog entry, else the default. The
    /// initial duration passes through the same range rule as
    /// [`set_duration`](Self::set_duration).
    pub fn new(
        catalog: ThemeCatalog,
        backend: Box<dyn AudioBackend>,
        store: Box<dyn PersistentKeyStore>,
        options: CoordinatorOptions,
    ) -> Result<Self, CoordinatorError> {
        let minutes = options.duration_minutes;
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
            return Err(CoordinatorError::InvalidDuration(minutes));
        }

        let theme_id = match options.theme_override {
            Some(id) => id,
            None => resolve_stored_theme(&catalog, store.as_ref()),
        };
        let theme = catalog
            .get(&theme_id)
            .ok_or_else(|| CoordinatorError::UnknownTheme(theme_id.clone()))?
            .clone();

        let cues = AudioCueSet::for_theme(backend.as_ref(), &theme, options.master_volume);
        let inner = CoordinatorInner {
            countdown: CountdownState::with_total(minutes * 60),
            theme_id,
            cues: Some(cues),
            torn_down: false,
        };

        let (cadence_tx, cadence_rx) = watch::channel(CadencePhase::Idle);
        let (display_tx, display_rx) = watch::channel(make_snapshot(&catalog, &inner));

        info!(
            "Coordinator initialized: theme={}, duration={}min",
            inner.theme_id, minutes
        );

        Ok(Self {
            inner: Mutex::new(inner),
            catalog,
            backend,
            store,
            master_volume: options.master_volume,
            cadence_tx,
            display_tx,
            _cadence_rx: cadence_rx,
            _display_rx: display_rx,
        })
    }

    /// Begin or resume the countdown; a no-op while already running
    pub fn start(&self) {
        let mut inner = self.lock();
        if inner.torn_down || inner.countdown.is_running {
            return;
        }
        inner.countdown.is_running = true;

        if inner.countdown.time_left_seconds > 0 {
            if let Some(cues) = inner.cues.as_mut() {
                if !cues.work_loop.is_playing() {
                    cues.work_loop.play();
                }
            }
            self.set_phase(CadencePhase::Ticking);
        }

        info!(
            "Countdown started: {}s remaining",
            inner.countdown.time_left_seconds
        );
        self.publish(&inner);
    }

    /// Pause the countdown, keeping the work loop position; a no-op while paused
    pub fn pause(&self) {
        let mut inner = self.lock();
        if inner.torn_down || !inner.countdown.is_running {
            return;
        }
        inner.countdown.is_running = false;

        if let Some(cues) = inner.cues.as_mut() {
            cues.work_loop.pause();
        }
        self.set_phase(CadencePhase::Idle);

        info!(
            "Countdown paused: {}s remaining",
            inner.countdown.time_left_seconds
        );
        self.publish(&inner);
    }

    /// Stop and refill the countdown, re-arming the alert
    pub fn restart(&self) {
        let mut inner = self.lock();
        if inner.torn_down {
            return;
        }
        inner.countdown.reset();

        if let Some(cues) = inner.cues.as_mut() {
            cues.work_loop.stop();
            cues.alert.stop();
        }
        self.set_phase(CadencePhase::Idle);

        info!("Countdown restarted to {}s", inner.countdown.total_seconds);
        self.publish(&inner);
    }

    /// Advance the countdown by one second
    ///
    /// Decrements while time remains; the tick that lands on zero stops
    /// the work loop and plays the alert exactly once. Ticks while paused
    /// or at zero change nothing.
    pub fn tick(&self) {
        let mut inner = self.lock();
        if inner.torn_down || !inner.countdown.is_running || inner.countdown.time_left_seconds == 0
        {
            return;
        }

        inner.countdown.time_left_seconds -= 1;
        if inner.countdown.time_left_seconds == 0 {
            if let Some(cues) = inner.cues.as_mut() {
                cues.work_loop.stop();
            }
            if !inner.countdown.alert_has_fired {
                inner.countdown.alert_has_fired = true;
                if let Some(cues) = inner.cues.as_mut() {
                    cues.alert.play();
                }
                info!("Countdown reached zero, alert played");
            }
            self.set_phase(CadencePhase::Idle);
        } else {
            debug!("Tick: {}s remaining", inner.countdown.time_left_seconds);
        }

        self.publish(&inner);
    }

    /// Switch to another theme, replacing the audio cues
    ///
    /// The countdown itself is untouched; an actively running work loop
    /// carries over to the new theme's track. The selection is persisted
    /// and the new theme's menu click plays as confirmation.
    pub fn set_theme(&self, theme_id: &str) -> Result<(), CoordinatorError> {
        let theme = self
            .catalog
            .get(theme_id)
            .ok_or_else(|| CoordinatorError::UnknownTheme(theme_id.to_string()))?
            .clone();

        let mut inner = self.lock();
        if inner.torn_down {
            return Ok(());
        }

        if inner.theme_id == theme_id {
            // Same selection: nothing to rebuild, still confirm audibly.
            if let Some(cues) = inner.cues.as_mut() {
                cues.menu_click.play();
            }
            return Ok(());
        }

        // Fully release the old set before binding the new one, so two
        // work loops never overlap.
        if let Some(mut old) = inner.cues.take() {
            old.release();
        }
        let mut cues = AudioCueSet::for_theme(self.backend.as_ref(), &theme, self.master_volume);
        if inner.countdown.is_ticking() {
            cues.work_loop.play();
        }
        cues.menu_click.play();
        inner.cues = Some(cues);
        inner.theme_id = theme_id.to_string();

        if let Err(e) = self.store.set(SELECTED_THEME_KEY, theme_id) {
            warn!("Failed to persist theme selection: {}", e);
        }

        info!("Theme changed to {} ({})", theme_id, theme.name);
        self.publish(&inner);
        Ok(())
    }

    /// Replace the countdown with a fresh one of the given duration
    ///
    /// Rejects durations outside 1..=120 minutes; this is the only path
    /// that changes the total.
    pub fn set_duration(&self, minutes: u64) -> Result<(), CoordinatorError> {
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
            return Err(CoordinatorError::InvalidDuration(minutes));
        }

        let mut inner = self.lock();
        if inner.torn_down {
            return Ok(());
        }
        inner.countdown = CountdownState::with_total(minutes * 60);

        if let Some(cues) = inner.cues.as_mut() {
            cues.work_loop.stop();
            cues.alert.stop();
        }
        self.set_phase(CadencePhase::Idle);

        info!("Countdown duration set to {} minutes", minutes);
        self.publish(&inner);
        Ok(())
    }

    /// Play the menu click of the active theme, fire-and-forget
    pub fn play_menu_click(&self) {
        let mut inner = self.lock();
        if let Some(cues) = inner.cues.as_mut() {
            cues.menu_click.play();
        }
    }

    /// Stop the cadence driver and release all audio; safe to call twice
    pub fn teardown(&self) {
        let mut inner = self.lock();
        if inner.torn_down {
            debug!("Teardown already performed");
            return;
        }
        inner.torn_down = true;
        inner.countdown.is_running = false;

        if let Some(mut cues) = inner.cues.take() {
            cues.release();
        }
        self.set_phase(CadencePhase::Shutdown);
        info!("Coordinator torn down");
    }

    /// Current observable state
    pub fn snapshot(&self) -> DisplaySnapshot {
        let inner = self.lock();
        make_snapshot(&self.catalog, &inner)
    }

    /// Subscribe to display snapshots
    pub fn display_updates(&self) -> watch::Receiver<DisplaySnapshot> {
        self.display_tx.subscribe()
    }

    /// Subscribe to cadence phases
    pub fn cadence_phases(&self) -> watch::Receiver<CadencePhase> {
        self.cadence_tx.subscribe()
    }

    /// Check whether the cadence driver should be delivering ticks
    pub fn is_ticking(&self) -> bool {
        let inner = self.lock();
        !inner.torn_down && inner.countdown.is_ticking()
    }

    /// Id of the active theme
    pub fn theme_id(&self) -> String {
        self.lock().theme_id.clone()
    }

    /// The catalog this coordinator validates against
    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    fn lock(&self) -> MutexGuard<'_, CoordinatorInner> {
        // A poisoned lock still holds valid countdown data.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set_phase(&self, phase: CadencePhase) {
        if let Err(e) = self.cadence_tx.send(phase) {
            warn!("Failed to send cadence phase: {}", e);
        }
    }

    fn publish(&self, inner: &CoordinatorInner) {
        if let Err(e) = self.display_tx.send(make_snapshot(&self.catalog, inner)) {
            warn!("Failed to send display update: {}", e);
        }
    }
}

/// Read the stored theme id, falling back to the default when absent or unknown
fn resolve_stored_theme(catalog: &ThemeCatalog, store: &dyn PersistentKeyStore) -> String {
    match store.get(SELECTED_THEME_KEY) {
        Some(id) if catalog.contains(&id) => {
            debug!("Restored saved theme: {}", id);
            id
        }
        Some(id) => {
            debug!("Saved theme {:?} not in catalog, using default", id);
            DEFAULT_THEME_ID.to_string()
        }
        None => DEFAULT_THEME_ID.to_string(),
    }
}

fn make_snapshot(catalog: &ThemeCatalog, inner: &CoordinatorInner) -> DisplaySnapshot {
    DisplaySnapshot {
        theme_id: inner.theme_id.clone(),
        theme_name: catalog
            .get(&inner.theme_id)
            .map(|theme| theme.name.clone())
            .unwrap_or_else(|| inner.theme_id.clone()),
        time_left_seconds: inner.countdown.time_left_seconds,
        total_seconds: inner.countdown.total_seconds,
        is_running: inner.countdown.is_running,
    }
}
