//! Server-side rendered sensors tab (no JavaScript).
//!
//! The page reloads itself every poll period; toolbar buttons POST to the
//! control routes, which redirect back to `/`.

use askama::Template;
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};

use sensortab_app::ports::SensorSource;
use sensortab_domain::time::clock_time;

use crate::error::DashboardError;
use crate::state::AppState;

/// Build the dashboard sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: SensorSource + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::<S>))
        .route("/sensors/refresh", post(refresh::<S>))
        .route("/sensors/auto-refresh", post(toggle_auto_refresh::<S>))
        .route("/sensors/filter-empty", post(toggle_filter_empty::<S>))
        .route("/sensors/metadata", post(reload_metadata::<S>))
}

/// Sensors tab template.
#[derive(Template)]
#[template(path = "sensors_tab.html")]
pub struct SensorsTabTemplate {
    refresh_seconds: u64,
    auto_refresh: bool,
    refresh_state: String,
    filter_empty: bool,
    metadata_count: usize,
    last_updated: String,
    table: String,
}

/// Rendered page, or the rendering failure.
pub struct SensorsTabPage(SensorsTabTemplate);

impl IntoResponse for SensorsTabPage {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => DashboardError::from(err).into_response(),
        }
    }
}

/// `GET /` — the sensors tab.
pub async fn index<S>(State(state): State<AppState<S>>) -> Result<SensorsTabPage, DashboardError>
where
    S: SensorSource + Send + Sync + 'static,
{
    let tab = &state.sensor_tab;
    let table = tab.table();
    let refresh_state = tab.refresh_state();
    let metadata_count = tab.metadata_len().await;

    Ok(SensorsTabPage(SensorsTabTemplate {
        refresh_seconds: state.refresh_seconds,
        auto_refresh: refresh_state.is_active(),
        refresh_state: refresh_state.to_string(),
        filter_empty: table.filter_empty(),
        metadata_count,
        last_updated: table
            .last_updated()
            .map_or_else(|| "never".to_string(), clock_time),
        table: table.render()?,
    }))
}

/// `POST /sensors/refresh` — poll the values once (PRG).
pub async fn refresh<S>(State(state): State<AppState<S>>) -> Redirect
where
    S: SensorSource + Send + Sync + 'static,
{
    state.sensor_tab.refresh_sensors().await;
    Redirect::to("/")
}

/// `POST /sensors/auto-refresh` — pause or resume the poller (PRG).
pub async fn toggle_auto_refresh<S>(State(state): State<AppState<S>>) -> Redirect
where
    S: SensorSource + Send + Sync + 'static,
{
    state.sensor_tab.toggle_auto_refresh();
    Redirect::to("/")
}

/// `POST /sensors/filter-empty` — hide or show rows with empty values (PRG).
pub async fn toggle_filter_empty<S>(State(state): State<AppState<S>>) -> Redirect
where
    S: SensorSource + Send + Sync + 'static,
{
    state.sensor_tab.toggle_filter_empty();
    Redirect::to("/")
}

/// `POST /sensors/metadata` — reload the sensor descriptors (PRG).
pub async fn reload_metadata<S>(State(state): State<AppState<S>>) -> Redirect
where
    S: SensorSource + Send + Sync + 'static,
{
    state.sensor_tab.load_metadata().await;
    Redirect::to("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_text, post, request, state_with};
    use axum::http::StatusCode;
    use serde_json::json;

    fn app() -> (Router, AppState<crate::test_support::FixedSource>) {
        let state = state_with(
            json!([{
                "name": "cpu.load",
                "description": "CPU load",
                "type": "Double",
                "links": {"action:json": "/j"}
            }]),
            json!({"cpu.load": 0.512_345, "note": ""}),
        );
        (routes().with_state(state.clone()), state)
    }

    #[tokio::test]
    async fn should_render_page_with_meta_refresh_and_table() {
        let (app, state) = app();
        state.sensor_tab.initialize().await;

        let response = request(app, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("<meta http-equiv=\"refresh\" content=\"3\">"));
        assert!(body.contains("<table id=\"sensors-table\""));
        assert!(body.contains("<td class=\"sensor-value\">0.5123</td>"));
        assert!(body.contains("Pause auto-refresh"));
        assert!(body.contains("Show empty values"));
        assert!(!body.contains("id=\"note\""));
    }

    #[tokio::test]
    async fn should_show_placeholder_before_first_update() {
        let (app, _state) = app();

        let body = body_text(request(app, "/").await).await;

        assert!(body.contains("No sensors to display"));
        assert!(body.contains("last updated never"));
    }

    #[tokio::test]
    async fn should_toggle_auto_refresh_and_redirect() {
        let (app, state) = app();

        let response = post(app, "/sensors/auto-refresh").await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/");
        assert!(!state.sensor_tab.refresh_state().is_active());
    }

    #[tokio::test]
    async fn should_toggle_filter_empty_and_redirect() {
        let (app, state) = app();

        let response = post(app, "/sensors/filter-empty").await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(state.sensor_tab.table().filter_empty());
    }

    #[tokio::test]
    async fn should_refresh_values_on_demand() {
        let (app, state) = app();

        let response = post(app, "/sensors/refresh").await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let row = state.sensor_tab.table().row("cpu.load").unwrap();
        assert!(row.descriptor.is_stub());
    }

    #[tokio::test]
    async fn should_reload_metadata_on_demand() {
        let (app, state) = app();

        let response = post(app, "/sensors/metadata").await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.sensor_tab.metadata_len().await, 1);
        let row = state.sensor_tab.table().row("cpu.load").unwrap();
        assert_eq!(row.actions.get("json").map(String::as_str), Some("/j"));
    }
}
