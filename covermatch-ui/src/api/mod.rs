//! Server API

pub mod client;

pub use client::{predict, PredictError};
