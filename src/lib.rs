//! # CoverMatch
//!
//! Health insurance recommendation service. Ranks a CSV-backed catalog of
//! policies against a user's health profile and serves the results to the
//! Leptos frontend in `covermatch-ui`.
//!
//! ## Modules
//!
//! - [`catalog`]: Policy catalog loaded from CSV, reloaded when the file changes
//! - [`scoring`]: Risk score, per-policy scoring and recommendation selection
//! - [`api`]: REST API server with Axum (`POST /predict`, health probes)
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use covermatch::catalog::CatalogStore;
//! use covermatch::scoring::{recommend, HealthProfile, SelectionLimits};
//!
//! let store = CatalogStore::new("policies.csv", "https://example.com/");
//! let catalog = store.current();
//!
//! let profile = HealthProfile::from_json(&serde_json::json!({
//!     "Age": "42",
//!     "Diabetes": "1",
//!     "budget": "25000",
//! }));
//!
//! let result = recommend(&profile, catalog.policies(), SelectionLimits::default());
//! println!("risk = {}", result.risk_score);
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod scoring;

pub use api::{build_router, serve, ApiError, AppState};

pub use catalog::{CatalogError, CatalogStore, Policy, PolicyCatalog};

pub use scoring::{
    compute_risk_score, recommend, score_policy, suitability_note, HealthProfile, Recommendation,
    Recommendations, SelectionLimits,
};

pub use config::{
    generate_default_config, CatalogConfig, Config, ConfigError, LoggingConfig,
    RecommendConfig, ServerConfig,
};
