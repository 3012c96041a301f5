//! State Management
//!
//! Page state, form payload, result display models and theme switching.

pub mod form;
pub mod global;
pub mod recommendation;
pub mod results;
pub mod theme;
