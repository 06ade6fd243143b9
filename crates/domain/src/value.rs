//! Live sensor values and their display formatting.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Numeric values are displayed with at most this many decimal places.
pub const DISPLAY_DECIMAL_PLACES: i32 = 4;

/// Sensor name → current value, as served by the sensor-values endpoint.
pub type SensorValues = BTreeMap<String, SensorValue>;

/// The current value of a sensor, any JSON value the backend reports.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorValue(Value);

impl SensorValue {
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Access the raw JSON value.
    #[must_use]
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    /// Whether the value renders as an empty cell (`null` or `""`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::String(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Text shown in the value column, before HTML escaping.
    ///
    /// Numbers are rounded to [`DISPLAY_DECIMAL_PLACES`]; strings pass through
    /// verbatim, `null` is empty, anything else is compact JSON.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.0 {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            Value::Number(number) => format_number(number, DISPLAY_DECIMAL_PLACES),
            other => other.to_string(),
        }
    }
}

impl From<Value> for SensorValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// Round `value` to at most `places` decimal places.
///
/// Values too large to scale are returned unchanged.
#[must_use]
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    // avoid displaying "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn format_number(number: &Number, places: i32) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(float) => round_to_places(float, places).to_string(),
        None => number.to_string(),
    }
}
