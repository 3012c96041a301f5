//! Policy Catalog
//!
//! The list of insurance policies the recommender ranks:
//!
//! - **policy**: The `Policy` record and the in-memory `PolicyCatalog`
//! - **loader**: CSV parsing with lenient price/tag normalization
//! - **store**: `CatalogStore`, which caches the parsed file and reloads it
//!   when the file changes on disk
//! - **error**: Error types
//!
//! # CSV layout
//!
//! ```text
//! brand,policy,price,tags,remarks,coverage,url
//! Acme Health,Acme Secure,18500,"low,young,budget",Entry plan,5 lakh cover,https://...
//! ```
//!
//! `brand`, `policy`, `price` and `tags` are required; `remarks`, `coverage`
//! and `url` are optional. Unknown columns are ignored.

pub mod error;
pub mod loader;
pub mod policy;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use loader::CatalogLoader;
pub use policy::{Policy, PolicyCatalog};
pub use store::CatalogStore;

/// Link used when a policy row has no URL of its own
pub const DEFAULT_POLICY_URL: &str = "https://www.policybazaar.com/health-insurance/";
