//! # sensortab-adapter-http-reqwest
//!
//! Fetches an entity's sensors over HTTP using
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Endpoints
//!
//! | Link | Response |
//! |------|----------|
//! | sensors | `[{"name", "description", "type", "links": {"action:<name>": url}}]` |
//! | sensor values | `{"<sensor name>": <any JSON value>, …}` |
//!
//! Non-2xx answers, timeouts and connection failures are reported as
//! network failures; undecodable bodies as payload errors.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `sensortab-app` and `sensortab-domain`.

mod config;
mod error;

pub use config::HttpSourceConfig;
pub use error::HttpSourceError;

use std::time::Duration;

use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use sensortab_app::ports::SensorSource;
use sensortab_domain::error::SensorTabError;
use sensortab_domain::sensor::SensorRecord;
use sensortab_domain::value::SensorValues;

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("sensortab/", env!("CARGO_PKG_VERSION"));

/// [`SensorSource`] reading one entity's sensors over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSensorSource {
    client: reqwest::Client,
    sensors_url: Url,
    sensor_values_url: Url,
}

impl HttpSensorSource {
    /// Build a source from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpSourceError::InvalidUrl`] when a configured URL is not an
    /// absolute `http(s)` URL, or [`HttpSourceError::Request`] when the HTTP
    /// client cannot be built.
    pub fn new(config: &HttpSourceConfig) -> Result<Self, HttpSourceError> {
        let (sensors_url, sensor_values_url) = config.urls()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(u64::from(config.timeout_secs)))
            .build()?;

        Ok(Self {
            client,
            sensors_url,
            sensor_values_url,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, HttpSourceError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "sensor endpoint answered");

        if !status.is_success() {
            return Err(HttpSourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(HttpSourceError::Decode)
    }
}

impl SensorSource for HttpSensorSource {
    async fn fetch_metadata(&self) -> Result<Vec<SensorRecord>, SensorTabError> {
        Ok(self.get_json(&self.sensors_url).await?)
    }

    async fn fetch_values(&self) -> Result<SensorValues, SensorTabError> {
        Ok(self.get_json(&self.sensor_values_url).await?)
    }
}
