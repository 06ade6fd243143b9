//! HTTP source error types.

use sensortab_domain::error::SensorTabError;

/// Errors raised while talking to the entity's REST endpoints.
#[derive(Debug, thiserror::Error)]
pub enum HttpSourceError {
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: &'static str },

    #[error("request failed")]
    Request(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("unable to decode response body")]
    Decode(#[source] serde_json::Error),
}

impl From<HttpSourceError> for SensorTabError {
    fn from(err: HttpSourceError) -> Self {
        match err {
            HttpSourceError::Decode(_) => Self::Payload(Box::new(err)),
            other => Self::Network(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_decode_error_to_payload() {
        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: SensorTabError = HttpSourceError::Decode(decode).into();
        assert!(matches!(err, SensorTabError::Payload(_)));
    }

    #[test]
    fn should_map_status_error_to_network() {
        let err: SensorTabError = HttpSourceError::Status {
            url: "http://localhost/sensors".to_string(),
            status: 503,
        }
        .into();
        assert!(matches!(err, SensorTabError::Network(_)));
    }

    #[test]
    fn should_name_url_and_status_in_message() {
        let err = HttpSourceError::Status {
            url: "http://localhost/sensors".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "http://localhost/sensors answered with status 404"
        );
    }
}
