//! UI Components
//!
//! Leptos components for the recommendation page.

pub mod background;
pub mod policy_card;
pub mod predict_form;
pub mod results;
pub mod theme_toggle;

pub use background::BackgroundCanvas;
pub use policy_card::PolicyCard;
pub use predict_form::PredictForm;
pub use results::ResultsPanel;
pub use theme_toggle::ThemeToggle;
