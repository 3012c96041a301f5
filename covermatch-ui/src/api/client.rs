//! HTTP API Client
//!
//! Talks to the CoverMatch server's `/predict` endpoint.

use gloo_net::http::Request;
use serde_json::Value;
use std::fmt;

use crate::state::form::RecommendationInput;
use crate::state::recommendation::PredictResponse;

/// Local storage key that overrides the API base URL
pub const API_BASE_KEY: &str = "covermatch_api_url";

/// Same origin as the page
pub const DEFAULT_API_BASE: &str = "";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Why a prediction request produced no recommendations
#[derive(Clone, Debug, PartialEq)]
pub enum PredictError {
    /// Server answered with a non-success status
    Server(String),
    /// Request never completed or the body was unreadable
    Network(String),
}

impl PredictError {
    /// Text shown in place of the cards
    pub fn message(&self) -> String {
        match self {
            Self::Server(msg) => format!("Error: {}", msg),
            Self::Network(msg) => format!("Network error: {}", msg),
        }
    }
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Request recommendations for the submitted form
pub async fn predict(input: &RecommendationInput) -> Result<PredictResponse, PredictError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/predict", api_base))
        .json(input)
        .map_err(|e| PredictError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| PredictError::Network(e.to_string()))?;

    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| PredictError::Network(e.to_string()))?;

    interpret_response(ok, &body)
}

/// Turn a status flag and raw body into a response or an error
///
/// The body must be JSON whatever the status; an unparseable body counts as a
/// network failure.
pub fn interpret_response(ok: bool, body: &str) -> Result<PredictResponse, PredictError> {
    let data: Value =
        serde_json::from_str(body).map_err(|e| PredictError::Network(e.to_string()))?;

    if !ok {
        return Err(PredictError::Server(server_message(&data)));
    }

    serde_json::from_value(data).map_err(|e| PredictError::Network(e.to_string()))
}

/// The body's `error` field, or "Unknown" when it is missing or empty
fn server_message(data: &Value) -> String {
    match data.get("error") {
        Some(Value::String(msg)) if !msg.is_empty() => msg.clone(),
        Some(Value::Null) | Some(Value::Bool(false)) | Some(Value::String(_)) | None => {
            "Unknown".to_string()
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => "Unknown".to_string(),
        Some(other) => other.to_string(),
    }
}
