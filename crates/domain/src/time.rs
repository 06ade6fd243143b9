//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for the table's "last updated" marker.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp as a wall-clock time (`HH:MM:SS UTC`).
#[must_use]
pub fn clock_time(ts: Timestamp) -> String {
    ts.format("%H:%M:%S UTC").to_string()
}
