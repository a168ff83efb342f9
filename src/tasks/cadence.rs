//! Countdown cadence background task

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

use crate::state::{CadencePhase, TimerCoordinator};

/// Fixed tick period of the countdown
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that advances the countdown once per elapsed second
///
/// Waits idle until the coordinator enters the ticking phase, then drives
/// `tick()` on a one-second interval until the phase changes or the
/// countdown runs out. Best-effort cadence: a busy host may delay ticks,
/// but they are delivered in order from this single task.
pub async fn cadence_task(coordinator: Arc<TimerCoordinator>) {
    info!("Starting cadence task");
    let mut phase_rx = coordinator.cadence_phases();

    loop {
        let phase = *phase_rx.borrow_and_update();
        match phase {
            CadencePhase::Shutdown => break,
            CadencePhase::Idle => {
                if phase_rx.changed().await.is_err() {
                    break;
                }
            }
            CadencePhase::Ticking => {
                debug!("Cadence ticking");
                // interval_at so the first decrement lands a full period
                // after start, not immediately
                let mut ticks = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
                loop {
                    tokio::select! {
                        _ = ticks.tick() => {
                            coordinator.tick();
                            if !coordinator.is_ticking() {
                                break;
                            }
                        }
                        changed = phase_rx.changed() => {
                            if changed.is_err() || *phase_rx.borrow() != CadencePhase::Ticking {
                                break;
                            }
                        }
                    }
                }
                debug!("Cadence idle");
            }
        }
    }

    info!("Cadence task stopped");
}
