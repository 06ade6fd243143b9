//! Configuration for the HTTP sensor source.

use reqwest::Url;
use serde::Deserialize;

use crate::HttpSourceError;

/// Default sensors link of the entity.
pub const DEFAULT_SENSORS_URL: &str = "http://localhost:8081/v1/applications/app/entities/entity/sensors";

/// Default sensor values link of the entity.
pub const DEFAULT_SENSOR_VALUES_URL: &str =
    "http://localhost:8081/v1/applications/app/entities/entity/sensors/current-state";

/// Where to fetch sensors from, and how long to wait for an answer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpSourceConfig {
    /// URL returning the sensor descriptors.
    pub sensors_url: String,
    /// URL returning the current value of every sensor.
    pub sensor_values_url: String,
    /// Request timeout, in seconds.
    pub timeout_secs: u32,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            sensors_url: DEFAULT_SENSORS_URL.to_string(),
            sensor_values_url: DEFAULT_SENSOR_VALUES_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl HttpSourceConfig {
    /// Check both URLs are absolute `http(s)` URLs.
    ///
    /// # Errors
    ///
    /// Returns [`HttpSourceError::InvalidUrl`] naming the first offending URL.
    pub fn validate(&self) -> Result<(), HttpSourceError> {
        self.urls().map(|_| ())
    }

    pub(crate) fn urls(&self) -> Result<(Url, Url), HttpSourceError> {
        Ok((
            parse_url(&self.sensors_url)?,
            parse_url(&self.sensor_values_url)?,
        ))
    }
}

fn parse_url(raw: &str) -> Result<Url, HttpSourceError> {
    let invalid = |reason| HttpSourceError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|_| invalid("not an absolute URL"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(invalid("scheme must be http or https")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_local_entity() {
        let config = HttpSourceConfig::default();
        assert_eq!(config.sensors_url, DEFAULT_SENSORS_URL);
        assert_eq!(config.sensor_values_url, DEFAULT_SENSOR_VALUES_URL);
        assert_eq!(config.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let config: HttpSourceConfig = toml::from_str(
            r#"sensors_url = "https://brooklyn.example.com/v1/applications/a/entities/e/sensors""#,
        )
        .unwrap();
        assert_eq!(
            config.sensors_url,
            "https://brooklyn.example.com/v1/applications/a/entities/e/sensors"
        );
        assert_eq!(config.sensor_values_url, DEFAULT_SENSOR_VALUES_URL);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn should_reject_relative_url() {
        let config = HttpSourceConfig {
            sensor_values_url: "/v1/sensors/current-state".to_string(),
            ..HttpSourceConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("/v1/sensors/current-state"));
    }

    #[test]
    fn should_reject_non_http_scheme() {
        let config = HttpSourceConfig {
            sensors_url: "ftp://example.com/sensors".to_string(),
            ..HttpSourceConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(HttpSourceError::InvalidUrl {
                reason: "scheme must be http or https",
                ..
            })
        ));
    }
}
