//! Catalog error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the policy catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The CSV file could not be opened or read
    #[error("Failed to read catalog {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// The CSV stream was malformed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required header column is missing
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
