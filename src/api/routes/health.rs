//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (catalog is readable)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the policy catalog can be read, otherwise the catalog
/// error as a 503.
pub async fn readiness(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    state.catalog.check()?;
    Ok(StatusCode::OK)
}

/// GET /health
///
/// Full health status with catalog details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let checked = state.catalog.check();
    let catalog_ok = checked.is_ok();
    let policies = checked.map(|catalog| catalog.len()).unwrap_or(0);

    Json(HealthResponse {
        status: if catalog_ok { "healthy" } else { "degraded" }.to_string(),
        catalog: if catalog_ok { "ok" } else { "error" }.to_string(),
        policies,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
