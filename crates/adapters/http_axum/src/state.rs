//! Shared application state for axum handlers.

use std::sync::Arc;
use std::time::Duration;

use sensortab_adapter_table_html::HtmlSensorTable;
use sensortab_app::ports::SensorSource;
use sensortab_app::services::sensor_tab::SensorTabService;

/// The sensors tab service, rendering into the HTML table widget.
pub type SensorTab<S> = SensorTabService<S, HtmlSensorTable>;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so `S` does not need to be `Clone`.
pub struct AppState<S> {
    /// Sensors tab service, shared with the poller.
    pub sensor_tab: Arc<SensorTab<S>>,
    /// Page auto-reload period, in seconds.
    pub refresh_seconds: u64,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            sensor_tab: Arc::clone(&self.sensor_tab),
            refresh_seconds: self.refresh_seconds,
        }
    }
}

impl<S> AppState<S>
where
    S: SensorSource + Send + Sync + 'static,
{
    /// Create the state from a service already shared with the poller.
    ///
    /// The page reloads every `poll_interval`, rounded up to whole seconds.
    pub fn new(sensor_tab: Arc<SensorTab<S>>, poll_interval: Duration) -> Self {
        Self {
            sensor_tab,
            refresh_seconds: refresh_seconds(poll_interval),
        }
    }
}

fn refresh_seconds(poll_interval: Duration) -> u64 {
    let millis = poll_interval.as_millis().div_ceil(1000).max(1);
    u64::try_from(millis).unwrap_or(u64::MAX)
}
