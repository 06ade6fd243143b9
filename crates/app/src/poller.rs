//! Periodic sensor polling.
//!
//! The poller ticks on a fixed period for as long as it runs. Pausing
//! auto-refresh on the service does not stop the timer: ticks keep firing
//! and skip the update. Stopping the poller aborts the task.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::ports::{SensorSource, SensorTable};
use crate::services::sensor_tab::SensorTabService;

/// Default period between two polls of the sensor values.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Handle on a running poller task.
///
/// Dropping the handle aborts the task.
pub struct PollerHandle {
    handle: Option<JoinHandle<()>>,
    ticks: Arc<AtomicU64>,
}

impl PollerHandle {
    /// Number of timer ticks so far, including the ones skipped while paused.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }

    /// Whether the poller task is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Abort the poller task.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("sensor poller aborted");
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn the polling loop for `service`.
///
/// The first tick fires one full `period` after spawning. A zero period is
/// raised to one millisecond.
pub fn spawn<S, T>(service: Arc<SensorTabService<S, T>>, period: Duration) -> PollerHandle
where
    S: SensorSource + Send + Sync + 'static,
    T: SensorTable + Send + Sync + 'static,
{
    let period = period.max(Duration::from_millis(1));
    let ticks = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&ticks);
    let start = Instant::now() + period;

    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(start, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let tick = counter.fetch_add(1, Ordering::SeqCst) + 1;
            if !service.poll_tick().await {
                tracing::trace!(tick, "auto-refresh paused, skipping poll");
            }
        }
    });

    tracing::info!(period_ms = period.as_millis(), "sensor poller started");

    PollerHandle {
        handle: Some(handle),
        ticks,
    }
}
