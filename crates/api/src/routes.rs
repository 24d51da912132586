use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes for the metrics path and `/healthcheck/{label}`.
///
/// `metrics_path` must start with `/` and must not fall under
/// `/healthcheck/`.
pub fn create_api_routes(state: AppState, metrics_path: &str) -> Router {
    Router::new()
        .route("/healthcheck/{label}", get(handlers::get_probe_health))
        .route(metrics_path, get(handlers::get_metrics))
        .with_state(state)
}
