//! JSON view of the sensors tab.

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;
use serde::Serialize;

use sensortab_app::ports::SensorSource;
use sensortab_domain::row::SensorRow;
use sensortab_domain::sensor::{SensorActions, SensorDescriptor};
use sensortab_domain::value::SensorValue;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the API sub-router, nested under `/api`.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: SensorSource + Send + Sync + 'static,
{
    Router::new()
        .route("/sensors", get(list::<S>))
        .route("/sensors/{*id}", get(get_one::<S>))
        .route("/state", get(tab_state::<S>))
}

/// A displayed row, with its value as shown in the table.
#[derive(Debug, Serialize)]
pub struct SensorRowView {
    pub id: String,
    pub descriptor: SensorDescriptor,
    pub actions: SensorActions,
    pub value: SensorValue,
    pub display_value: String,
}

impl From<SensorRow> for SensorRowView {
    fn from(row: SensorRow) -> Self {
        Self {
            display_value: row.value.display_text(),
            id: row.id,
            descriptor: row.descriptor,
            actions: row.actions,
            value: row.value,
        }
    }
}

/// Toolbar settings and counters.
#[derive(Debug, Serialize)]
pub struct TabStateView {
    pub auto_refresh: bool,
    pub filter_empty: bool,
    pub rows: usize,
    pub metadata: usize,
}

/// `GET /api/sensors` — the rows currently displayed.
pub async fn list<S>(State(state): State<AppState<S>>) -> Json<Vec<SensorRowView>>
where
    S: SensorSource + Send + Sync + 'static,
{
    let rows = state.sensor_tab.table().visible_rows();
    Json(rows.into_iter().map(SensorRowView::from).collect())
}

/// `GET /api/sensors/{id}` — one row, hidden or not.
///
/// The id spans the rest of the path, so sensor names may contain `/`.
pub async fn get_one<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<SensorRowView>, ApiError>
where
    S: SensorSource + Send + Sync + 'static,
{
    state
        .sensor_tab
        .table()
        .row(&id)
        .map(|row| Json(row.into()))
        .ok_or(ApiError::SensorNotFound(id))
}

/// `GET /api/state` — auto-refresh and filter settings.
pub async fn tab_state<S>(State(state): State<AppState<S>>) -> Json<TabStateView>
where
    S: SensorSource + Send + Sync + 'static,
{
    let tab = &state.sensor_tab;
    Json(TabStateView {
        auto_refresh: tab.refresh_state().is_active(),
        filter_empty: tab.table().filter_empty(),
        rows: tab.table().rows().len(),
        metadata: tab.metadata_len().await,
    })
}
