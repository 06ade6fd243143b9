//! Sensor metadata map — descriptors keyed by sensor name.
//!
//! Entries are overwritten on reload and never evicted: a sensor that
//! disappears from the backend keeps its last known descriptor.

use std::collections::HashMap;

use crate::row::SensorRow;
use crate::sensor::SensorDescriptor;
use crate::value::SensorValue;

/// In-memory mapping from sensor name to [`SensorDescriptor`].
#[derive(Debug, Clone, Default)]
pub struct SensorMetadataMap {
    descriptors: HashMap<String, SensorDescriptor>,
}

impl SensorMetadataMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a descriptor under its name, returning the one it replaced.
    pub fn insert(&mut self, descriptor: SensorDescriptor) -> Option<SensorDescriptor> {
        self.descriptors.insert(descriptor.name.clone(), descriptor)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SensorDescriptor> {
        self.descriptors.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Join a live value with the metadata of its sensor.
    ///
    /// Unknown sensors get the partial fallback row.
    #[must_use]
    pub fn row_for(&self, name: String, value: SensorValue) -> SensorRow {
        match self.descriptors.get(&name) {
            Some(descriptor) => SensorRow::with_descriptor(descriptor.clone(), value),
            None => SensorRow::fallback(name, value),
        }
    }
}
