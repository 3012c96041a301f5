//! Predict Route
//!
//! - POST /predict - Rank the policy catalog for a health profile
//!
//! The body is the form payload: every field is usually a string, and
//! values that do not parse are ignored rather than rejected. Only a body
//! that is not JSON at all is an error.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::scoring::{recommend, HealthProfile, Recommendations};

/// POST /predict
pub async fn predict(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Recommendations>> {
    let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    let profile = HealthProfile::from_json(&body);
    let catalog = state.catalog.current();
    let result = recommend(&profile, catalog.policies(), state.limits);

    tracing::debug!(
        risk_score = result.risk_score,
        primary = result.recommendations.len(),
        more = result.more_recommendations.len(),
        budget = ?profile.budget,
        "Prediction served"
    );

    Ok(Json(result))
}
