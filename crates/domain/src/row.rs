//! Sensor rows: what the table widget displays for one sensor.

use serde::{Deserialize, Serialize};

use crate::sensor::{SensorActions, SensorDescriptor};
use crate::value::SensorValue;

/// One table row: a live value joined with its sensor's metadata.
///
/// `id` is the sensor name; it is the stable row identity used when
/// updating the table and is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRow {
    pub id: String,
    pub descriptor: SensorDescriptor,
    pub actions: SensorActions,
    pub value: SensorValue,
}

impl SensorRow {
    /// Row for a sensor with known metadata.
    #[must_use]
    pub fn with_descriptor(descriptor: SensorDescriptor, value: SensorValue) -> Self {
        Self {
            id: descriptor.name.clone(),
            actions: descriptor.actions.clone(),
            descriptor,
            value,
        }
    }

    /// Partial row for a sensor whose metadata is unknown: stub descriptor,
    /// no actions.
    #[must_use]
    pub fn fallback(name: impl Into<String>, value: SensorValue) -> Self {
        let name = name.into();
        Self {
            descriptor: SensorDescriptor::stub(name.clone()),
            id: name,
            actions: SensorActions::new(),
            value,
        }
    }

    /// Whether the value cell is empty (used by the empty-row filter).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
