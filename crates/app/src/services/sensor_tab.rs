//! Sensor tab service — use-cases behind the sensors tab of an entity.
//!
//! The service owns the sensor metadata map and the auto-refresh flag, and
//! feeds the table widget. Its load and poll paths never return errors:
//! failures are logged and the table is left as it was, so the next poll
//! (or a manual refresh) retries.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use sensortab_domain::error::SensorTabError;
use sensortab_domain::metadata::SensorMetadataMap;
use sensortab_domain::refresh::RefreshState;
use sensortab_domain::row::SensorRow;
use sensortab_domain::sensor::SensorDescriptor;

use crate::ports::{SensorSource, SensorTable};

/// Application service for one entity's sensor table.
pub struct SensorTabService<S, T> {
    source: S,
    table: T,
    metadata: RwLock<SensorMetadataMap>,
    refresh_active: AtomicBool,
}

impl<S, T> SensorTabService<S, T>
where
    S: SensorSource,
    T: SensorTable,
{
    /// Create a new service reading from `source` and rendering into `table`.
    ///
    /// Auto-refresh starts active.
    pub fn new(source: S, table: T) -> Self {
        Self {
            source,
            table,
            metadata: RwLock::new(SensorMetadataMap::new()),
            refresh_active: AtomicBool::new(true),
        }
    }

    /// The source sensors are read from.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The table widget rows are rendered into.
    #[must_use]
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Load metadata, then hide empty rows.
    ///
    /// Mirrors the first display of the tab; the periodic poller is started
    /// separately by the caller.
    pub async fn initialize(&self) {
        self.load_metadata().await;
        let filter_empty = self.table.toggle_filter_empty();
        tracing::debug!(filter_empty, "sensor tab initialized");
    }

    /// Fetch sensor metadata and store it, overwriting known sensors.
    ///
    /// On success the table is refreshed with current values and tooltips
    /// are re-bound, in that order. On failure the metadata is left as is.
    pub async fn load_metadata(&self) {
        match self.try_load_metadata().await {
            Ok(loaded) => {
                tracing::info!(loaded, "sensor metadata loaded");
                self.update_sensors_now().await;
                self.table.bind_tooltips();
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load sensor metadata, keeping previous metadata");
            }
        }
    }

    async fn try_load_metadata(&self) -> Result<usize, SensorTabError> {
        let records = self.source.fetch_metadata().await?;

        let mut metadata = self.metadata.write().await;
        let mut loaded = 0;
        for record in records {
            match SensorDescriptor::from_record(record) {
                Ok(descriptor) => {
                    metadata.insert(descriptor);
                    loaded += 1;
                }
                Err(err) => tracing::warn!(%err, "skipping invalid sensor record"),
            }
        }
        Ok(loaded)
    }

    /// Fetch current values and push them, joined with metadata, to the table.
    ///
    /// Sensors without metadata get the stub fallback row. A failed fetch
    /// leaves the table untouched.
    pub async fn update_sensors_now(&self) {
        let values = match self.source.fetch_values().await {
            Ok(values) => values,
            Err(err) => {
                tracing::warn!(%err, "failed to fetch sensor values, table not updated");
                return;
            }
        };

        let rows: Vec<SensorRow> = {
            let metadata = self.metadata.read().await;
            values
                .into_iter()
                .filter(|(name, _)| !name.is_empty())
                .map(|(name, value)| metadata.row_for(name, value))
                .collect()
        };

        let update = self.table.update(rows);
        tracing::debug!(
            added = update.added,
            updated = update.updated,
            removed = update.removed,
            "sensor table updated"
        );
    }

    /// Manual refresh, regardless of the auto-refresh state.
    pub async fn refresh_sensors(&self) {
        self.update_sensors_now().await;
    }

    /// Run one poll tick: update the table when auto-refresh is active.
    ///
    /// Returns whether an update was attempted.
    pub async fn poll_tick(&self) -> bool {
        if !self.refresh_state().is_active() {
            return false;
        }
        self.update_sensors_now().await;
        true
    }

    /// Current auto-refresh state.
    #[must_use]
    pub fn refresh_state(&self) -> RefreshState {
        RefreshState::from_active(self.refresh_active.load(Ordering::SeqCst))
    }

    /// Enable or pause auto-refresh.
    pub fn enable_auto_refresh(&self, enabled: bool) {
        self.refresh_active.store(enabled, Ordering::SeqCst);
        tracing::info!(state = %RefreshState::from_active(enabled), "auto-refresh set");
    }

    /// Flip auto-refresh, returning the new state.
    pub fn toggle_auto_refresh(&self) -> RefreshState {
        let was_active = self.refresh_active.fetch_xor(true, Ordering::SeqCst);
        let state = RefreshState::from_active(was_active).toggled();
        tracing::info!(%state, "auto-refresh toggled");
        state
    }

    /// Flip hiding of rows with empty values, returning the new setting.
    pub fn toggle_filter_empty(&self) -> bool {
        self.table.toggle_filter_empty()
    }

    /// Look up the stored descriptor of a sensor.
    pub async fn descriptor(&self, name: &str) -> Option<SensorDescriptor> {
        self.metadata.read().await.get(name).cloned()
    }

    /// Number of sensors with known metadata.
    pub async fn metadata_len(&self) -> usize {
        self.metadata.read().await.len()
    }
}
