//! Sensor descriptors — the static metadata of a sensor.
//!
//! Descriptors are built from the records returned by the entity's sensors
//! endpoint. Only links keyed with [`ACTION_LINK_PREFIX`] become actions;
//! every other link is ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{SensorTabError, ValidationError};

/// Link-key prefix marking a sensor action (`action:json`, `action:open`, …).
pub const ACTION_LINK_PREFIX: &str = "action:";

/// Action name → URL.
pub type SensorActions = BTreeMap<String, String>;

/// A sensor record as served by the sensors endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub sensor_type: Option<String>,
    #[serde(default)]
    pub links: BTreeMap<String, String>,
}

/// Static metadata describing a single sensor.
///
/// A *stub* descriptor carries only the name; it stands in for sensors whose
/// metadata has not been loaded (yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorDescriptor {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub sensor_type: Option<String>,
    pub actions: SensorActions,
}

impl SensorDescriptor {
    /// Create a builder for constructing a [`SensorDescriptor`].
    #[must_use]
    pub fn builder() -> SensorDescriptorBuilder {
        SensorDescriptorBuilder::default()
    }

    /// Name-only descriptor used when no metadata is known.
    #[must_use]
    pub fn stub(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sensor_type: None,
            actions: SensorActions::new(),
        }
    }

    /// Whether this descriptor carries nothing but the name.
    #[must_use]
    pub fn is_stub(&self) -> bool {
        self.description.is_none() && self.sensor_type.is_none() && self.actions.is_empty()
    }

    /// Build a descriptor from a sensors-endpoint record, keeping only the
    /// `action:` links (prefix stripped).
    ///
    /// # Errors
    ///
    /// Returns [`SensorTabError::Validation`] when the record has no name.
    pub fn from_record(record: SensorRecord) -> Result<Self, SensorTabError> {
        let descriptor = Self {
            actions: action_links(&record.links),
            name: record.name,
            description: record.description,
            sensor_type: record.sensor_type,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SensorTabError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), SensorTabError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptySensorName.into());
        }
        Ok(())
    }
}

/// Extract the `action:<name>` links into an action map keyed by `<name>`.
#[must_use]
pub fn action_links(links: &BTreeMap<String, String>) -> SensorActions {
    links
        .iter()
        .filter_map(|(key, url)| {
            key.strip_prefix(ACTION_LINK_PREFIX)
                .map(|action| (action.to_string(), url.clone()))
        })
        .collect()
}

/// Step-by-step builder for [`SensorDescriptor`].
#[derive(Debug, Default)]
pub struct SensorDescriptorBuilder {
    name: Option<String>,
    description: Option<String>,
    sensor_type: Option<String>,
    actions: SensorActions,
}

impl SensorDescriptorBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn sensor_type(mut self, sensor_type: impl Into<String>) -> Self {
        self.sensor_type = Some(sensor_type.into());
        self
    }

    #[must_use]
    pub fn action(mut self, key: impl Into<String>, url: impl Into<String>) -> Self {
        self.actions.insert(key.into(), url.into());
        self
    }

    /// Consume the builder, validate, and return a [`SensorDescriptor`].
    ///
    /// # Errors
    ///
    /// Returns [`SensorTabError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<SensorDescriptor, SensorTabError> {
        let descriptor = SensorDescriptor {
            name: self.name.unwrap_or_default(),
            description: self.description,
            sensor_type: self.sensor_type,
            actions: self.actions,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}
