//! Health endpoint.

use axum::Json;
use roster_api_models::HealthStatus;

pub(crate) async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
