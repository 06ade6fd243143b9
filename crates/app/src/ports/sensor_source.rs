//! Sensor source port — where sensor metadata and values come from.

use std::future::Future;

use sensortab_domain::error::SensorTabError;
use sensortab_domain::sensor::SensorRecord;
use sensortab_domain::value::SensorValues;

/// Read-only access to one entity's sensors.
pub trait SensorSource {
    /// Fetch the sensor records (name, description, type, links).
    fn fetch_metadata(
        &self,
    ) -> impl Future<Output = Result<Vec<SensorRecord>, SensorTabError>> + Send;

    /// Fetch the current value of every sensor, keyed by sensor name.
    fn fetch_values(&self) -> impl Future<Output = Result<SensorValues, SensorTabError>> + Send;
}

impl<T: SensorSource + Send + Sync> SensorSource for std::sync::Arc<T> {
    fn fetch_metadata(
        &self,
    ) -> impl Future<Output = Result<Vec<SensorRecord>, SensorTabError>> + Send {
        (**self).fetch_metadata()
    }

    fn fetch_values(&self) -> impl Future<Output = Result<SensorValues, SensorTabError>> + Send {
        (**self).fetch_values()
    }
}
