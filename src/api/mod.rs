//! CoverMatch REST API
//!
//! HTTP API layer for CoverMatch, built with Axum.
//!
//! # Endpoints
//!
//! ## Prediction
//! - `POST /predict` - Risk score and ranked policy recommendations
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Frontend
//! - Everything else is served from the built UI directory when it exists
//!
//! # Example
//!
//! ```rust,ignore
//! use covermatch::api::{serve, AppState};
//! use covermatch::catalog::CatalogStore;
//! use covermatch::config::Config;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let catalog = Arc::new(CatalogStore::new(
//!         &config.catalog.policies_csv,
//!         &config.catalog.default_url,
//!     ));
//!
//!     let state = AppState::new(catalog, config.recommend.limits(), config.server.clone());
//!     serve(state).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let static_dir = PathBuf::from(&state.config.static_dir);
    let cors = cors_layer(&state.config.cors_origins);

    // Create shared state
    let shared_state = Arc::new(state);

    let router = Router::new()
        .route("/predict", post(routes::predict::predict))
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state);

    if static_dir.is_dir() {
        tracing::info!("Serving frontend from {:?}", static_dir);
        router.fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
    } else {
        tracing::warn!("Frontend directory {:?} not found, serving API only", static_dir);
        router
    }
}

/// CORS for the configured origins; permissive when none are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Start the API server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("CoverMatch listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("CoverMatch shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogStore, DEFAULT_POLICY_URL};
    use crate::config::ServerConfig;
    use crate::scoring::SelectionLimits;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const POLICIES: &str = "\
brand,policy,price,tags,remarks,coverage,url
Acme,Acme Starter,12000,\"low,young,budget\",Entry plan,3 lakh,
Acme,Acme Family,28000,\"medium,family\",Whole family,10 lakh,https://acme.example/family
Zenith,Zenith Senior,55000,\"high,senior,chronic\",Senior care,15 lakh,
Orbit,Orbit Basic,9000,low,Minimal,2 lakh,
Orbit,Orbit Premium,140000,\"high,surgery\",Top tier,1 crore,
Nova,Nova Care,22000,\"medium,bp\",BP cover,5 lakh,
Nova,Nova Shield,35000,\"medium,cancer\",Cancer rider,7 lakh,
";

    fn create_test_app(with_catalog: bool) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("policies.csv");
        if with_catalog {
            std::fs::write(&csv_path, POLICIES).unwrap();
        }

        let static_dir = dir.path().join("dist");
        std::fs::create_dir(&static_dir).unwrap();
        std::fs::write(static_dir.join("index.html"), "<html>covermatch</html>").unwrap();

        let config = ServerConfig {
            static_dir: static_dir.to_string_lossy().to_string(),
            ..Default::default()
        };
        let catalog = Arc::new(CatalogStore::new(csv_path, DEFAULT_POLICY_URL));
        let limits = SelectionLimits {
            primary: 2,
            secondary: 3,
        };

        (build_router(AppState::new(catalog, limits, config)), dir)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/predict")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(true);

        let response = app
            .oneshot(Request::builder().uri("/health/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_requires_catalog() {
        let (app, _dir) = create_test_app(true);
        let response = app
            .oneshot(Request::builder().uri("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (app, _dir) = create_test_app(false);
        let response = app
            .oneshot(Request::builder().uri("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = json_body(response).await;
        assert_eq!(body["code"], "CATALOG_ERROR");
        assert!(body["error"].as_str().unwrap().starts_with("Catalog error: "));
    }

    #[tokio::test]
    async fn test_health_full_without_catalog() {
        let (app, _dir) = create_test_app(false);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["catalog"], "error");
        assert_eq!(body["policies"], 0);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(true);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["policies"], 7);
    }

    #[tokio::test]
    async fn test_predict_form_payload() {
        let (app, _dir) = create_test_app(true);

        let response = app
            .oneshot(post_json(
                r#"{"Age": "28", "Diabetes": "0", "BloodPressureProblems": "0",
                    "AnyTransplants": "0", "AnyChronicDiseases": "0", "Height": "175",
                    "Weight": "70", "KnownAllergies": "0", "HistoryOfCancerInFamily": "0",
                    "NumberOfMajorSurgeries": "0", "budget": ""}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;

        assert_eq!(body["risk_score"], 0.56);
        let primary = body["recommendations"].as_array().unwrap();
        assert_eq!(primary.len(), 2);
        assert_eq!(primary[0]["policy"], "Acme Starter");
        assert_eq!(primary[0]["suitability"], "Suitable for low-risk users");
        assert_eq!(primary[0]["url"], DEFAULT_POLICY_URL);
        assert_eq!(body["more_recommendations"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_predict_budget_filter() {
        let (app, _dir) = create_test_app(true);

        let response = app
            .oneshot(post_json(r#"{"Age": "70", "Diabetes": "1", "AnyChronicDiseases": "1", "AnyTransplants": "1", "budget": "60000"}"#))
            .await
            .unwrap();

        let body = json_body(response).await;
        let primary = body["recommendations"].as_array().unwrap();
        assert_eq!(primary[0]["policy"], "Zenith Senior");
        assert_eq!(primary[0]["suitability"], "High suitability");
        for item in primary {
            assert!(item["price"].as_i64().unwrap() <= 60000);
        }
    }

    #[tokio::test]
    async fn test_predict_non_object_body() {
        let (app, _dir) = create_test_app(true);

        let response = app.oneshot(post_json("[1, 2, 3]")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["risk_score"], 0.0);
    }

    #[tokio::test]
    async fn test_predict_invalid_json() {
        let (app, _dir) = create_test_app(true);

        let response = app.oneshot(post_json("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_predict_without_catalog() {
        let (app, _dir) = create_test_app(false);

        let response = app.oneshot(post_json(r#"{"Age": "30"}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["recommendations"].as_array().unwrap().is_empty());
        assert!(body["more_recommendations"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_frontend_fallback() {
        let (app, _dir) = create_test_app(true);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>covermatch</html>");
    }

    #[test]
    fn test_cors_with_origins() {
        // Invalid origins are skipped rather than failing router construction
        let _layer = cors_layer(&["http://localhost:8080".to_string(), "bad\norigin".to_string()]);
    }
}
