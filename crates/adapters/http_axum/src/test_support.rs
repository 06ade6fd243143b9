//! Stub source and request helpers for router tests.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use sensortab_adapter_table_html::HtmlSensorTable;
use sensortab_app::ports::SensorSource;
use sensortab_app::services::sensor_tab::SensorTabService;
use sensortab_domain::error::SensorTabError;
use sensortab_domain::sensor::SensorRecord;
use sensortab_domain::value::SensorValues;

use crate::state::AppState;

/// Source answering every fetch with the same payloads.
pub(crate) struct FixedSource {
    records: Vec<SensorRecord>,
    values: SensorValues,
}

impl SensorSource for FixedSource {
    async fn fetch_metadata(&self) -> Result<Vec<SensorRecord>, SensorTabError> {
        Ok(self.records.clone())
    }

    async fn fetch_values(&self) -> Result<SensorValues, SensorTabError> {
        Ok(self.values.clone())
    }
}

pub(crate) fn state_with(
    records: serde_json::Value,
    values: serde_json::Value,
) -> AppState<FixedSource> {
    let source = FixedSource {
        records: serde_json::from_value(records).unwrap(),
        values: serde_json::from_value(values).unwrap(),
    };
    let service = SensorTabService::new(source, HtmlSensorTable::new());
    AppState::new(Arc::new(service), Duration::from_millis(3000))
}

pub(crate) async fn request(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub(crate) async fn post(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub(crate) async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
