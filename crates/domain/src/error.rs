//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SensorTabError`] at the port boundary via `From`.

/// Boxed source error carried across port boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error for sensor tab operations.
#[derive(Debug, thiserror::Error)]
pub enum SensorTabError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A request to the sensor backend failed, timed out, or returned a
    /// non-success status.
    #[error("network failure")]
    Network(#[source] BoxError),

    /// The backend answered but the body could not be decoded.
    #[error("invalid payload")]
    Payload(#[source] BoxError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Sensor names are row identities and must not be empty.
    #[error("sensor name must not be empty")]
    EmptySensorName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_validation_error() {
        let err = SensorTabError::from(ValidationError::EmptySensorName);
        assert_eq!(err.to_string(), "validation error");
    }

    #[test]
    fn should_expose_validation_error_as_source() {
        use std::error::Error as _;

        let err = SensorTabError::from(ValidationError::EmptySensorName);
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "sensor name must not be empty");
    }

    #[test]
    fn should_wrap_network_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = SensorTabError::Network(Box::new(io));
        assert_eq!(err.to_string(), "network failure");
    }
}
