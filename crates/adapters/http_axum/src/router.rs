//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use sensortab_app::ports::SensorSource;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the JSON view under `/api` and merges the sensors tab at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: SensorSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
