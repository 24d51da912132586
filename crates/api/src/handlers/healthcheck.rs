use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ferrous_sidecar_domain::DomainError;
use tracing::instrument;

use crate::{dto::ProbeHealthResponse, errors::ApiError, state::AppState};

/// 200 when the probe's latest query succeeded, 503 otherwise (including
/// before its first run).
#[instrument(skip(state), name = "api_probe_health")]
pub async fn get_probe_health(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> Result<Response, ApiError> {
    let unit = state
        .probes
        .get(&label)
        .ok_or(DomainError::ProbeNotFound(label))?;

    let result = unit.latest();
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((status, Json(ProbeHealthResponse::new(unit.option(), &result))).into_response())
}
