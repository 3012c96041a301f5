//! Recommendation Scoring
//!
//! Turns a health profile into ranked policy recommendations:
//!
//! - **profile**: Lenient parsing of the form payload into `HealthProfile`
//! - **risk**: Additive risk score (age, conditions, surgeries, BMI)
//! - **ranking**: Per-policy scores, budget filter, primary/"more" split
//!
//! # Flow
//!
//! ```text
//! JSON body → HealthProfile → risk score → score each policy
//!           → sort (score desc, price asc) → budget filter → primary + more
//! ```

pub mod profile;
pub mod ranking;
pub mod risk;

pub use profile::HealthProfile;
pub use ranking::{
    recommend, score_policy, suitability_note, Recommendation, Recommendations,
    SelectionLimits,
};
pub use risk::{body_mass_index, compute_risk_score};
