//! In-memory port implementations shared by the unit tests.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use sensortab_domain::error::SensorTabError;
use sensortab_domain::row::SensorRow;
use sensortab_domain::sensor::SensorRecord;
use sensortab_domain::value::SensorValues;

use crate::ports::{SensorSource, SensorTable, TableUpdate};

fn unreachable_backend() -> SensorTabError {
    SensorTabError::Network(Box::new(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "backend unreachable",
    )))
}

/// Source answering with canned responses; `None` means the request fails.
pub(crate) struct StubSource {
    metadata: Mutex<Option<Vec<SensorRecord>>>,
    values: Mutex<Option<SensorValues>>,
    pub(crate) metadata_fetches: AtomicUsize,
    pub(crate) value_fetches: AtomicUsize,
}

impl Default for StubSource {
    fn default() -> Self {
        Self {
            metadata: Mutex::new(Some(Vec::new())),
            values: Mutex::new(Some(SensorValues::new())),
            metadata_fetches: AtomicUsize::new(0),
            value_fetches: AtomicUsize::new(0),
        }
    }
}

impl StubSource {
    pub(crate) fn with_metadata(self, records: Vec<SensorRecord>) -> Self {
        self.set_metadata(Some(records));
        self
    }

    pub(crate) fn with_values(self, values: SensorValues) -> Self {
        self.set_values(Some(values));
        self
    }

    pub(crate) fn set_metadata(&self, records: Option<Vec<SensorRecord>>) {
        *self.metadata.lock().unwrap() = records;
    }

    pub(crate) fn set_values(&self, values: Option<SensorValues>) {
        *self.values.lock().unwrap() = values;
    }

    pub(crate) fn value_fetches(&self) -> usize {
        self.value_fetches.load(Ordering::SeqCst)
    }
}

impl SensorSource for StubSource {
    fn fetch_metadata(
        &self,
    ) -> impl Future<Output = Result<Vec<SensorRecord>, SensorTabError>> + Send {
        self.metadata_fetches.fetch_add(1, Ordering::SeqCst);
        let result = self
            .metadata
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(unreachable_backend);
        async { result }
    }

    fn fetch_values(&self) -> impl Future<Output = Result<SensorValues, SensorTabError>> + Send {
        self.value_fetches.fetch_add(1, Ordering::SeqCst);
        let result = self
            .values
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(unreachable_backend);
        async { result }
    }
}

/// Table recording every update it receives.
#[derive(Default)]
pub(crate) struct RecordingTable {
    updates: Mutex<Vec<Vec<SensorRow>>>,
    tooltip_bindings: AtomicUsize,
    filter_empty: AtomicBool,
}

impl RecordingTable {
    pub(crate) fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    pub(crate) fn last_rows(&self) -> Option<Vec<SensorRow>> {
        self.updates.lock().unwrap().last().cloned()
    }

    pub(crate) fn tooltip_bindings(&self) -> usize {
        self.tooltip_bindings.load(Ordering::SeqCst)
    }

    pub(crate) fn filter_empty(&self) -> bool {
        self.filter_empty.load(Ordering::SeqCst)
    }
}

impl SensorTable for RecordingTable {
    fn update(&self, rows: Vec<SensorRow>) -> TableUpdate {
        let added = rows.len();
        self.updates.lock().unwrap().push(rows);
        TableUpdate {
            added,
            ..TableUpdate::default()
        }
    }

    fn bind_tooltips(&self) {
        self.tooltip_bindings.fetch_add(1, Ordering::SeqCst);
    }

    fn toggle_filter_empty(&self) -> bool {
        !self.filter_empty.fetch_xor(true, Ordering::SeqCst)
    }
}
