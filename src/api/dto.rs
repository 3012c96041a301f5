//! Data Transfer Objects
//!
//! Response types for the API endpoints that are not domain types.
//! `POST /predict` answers with [`crate::scoring::Recommendations`] directly.

use serde::Serialize;

pub use crate::scoring::{Recommendation, Recommendations};

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "ok" or "error"
    pub catalog: String,
    /// Number of policies currently loaded
    pub policies: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
