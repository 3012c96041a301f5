//! Results Panel State
//!
//! What the results area shows between and after submissions.

use serde_json::Value;

use crate::api::PredictError;
use crate::state::recommendation::{CardModel, PredictResponse};

pub const SEARCHING_TEXT: &str = "Searching recommendations...";
pub const RISK_UNKNOWN: &str = "Risk: N/A";
pub const SHOW_MORE_LABEL: &str = "Show More Policies";
pub const HIDE_MORE_LABEL: &str = "Hide More Policies";

/// Where the current submission stands
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultsStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request in flight
    Searching,
    /// Request failed; holds the display text
    Failed(String),
    /// Cards are available
    Ready,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView {
    pub risk_text: String,
    pub status: ResultsStatus,
    pub primary: Vec<CardModel>,
    pub more: Vec<CardModel>,
    pub more_expanded: bool,
}

impl Default for ResultsView {
    fn default() -> Self {
        Self {
            risk_text: RISK_UNKNOWN.to_string(),
            status: ResultsStatus::Idle,
            primary: Vec::new(),
            more: Vec::new(),
            more_expanded: false,
        }
    }
}

impl ResultsView {
    /// Clear everything from the previous submission
    pub fn begin_search(&mut self) {
        *self = Self {
            status: ResultsStatus::Searching,
            ..Self::default()
        };
    }

    /// Record the outcome of a submission
    pub fn apply(&mut self, outcome: Result<PredictResponse, PredictError>) {
        match outcome {
            Ok(response) => {
                self.risk_text = format_risk(&response.risk_score);
                self.primary = response.recommendations.iter().map(CardModel::from).collect();
                self.more = response
                    .more_recommendations
                    .iter()
                    .map(CardModel::from)
                    .collect();
                self.more_expanded = false;
                self.status = ResultsStatus::Ready;
            }
            Err(e) => {
                self.primary.clear();
                self.more.clear();
                self.more_expanded = false;
                self.status = ResultsStatus::Failed(e.message());
            }
        }
    }

    /// The toggle is only offered when there are extra policies
    pub fn show_more_visible(&self) -> bool {
        self.status == ResultsStatus::Ready && !self.more.is_empty()
    }

    pub fn toggle_more(&mut self) {
        if self.show_more_visible() {
            self.more_expanded = !self.more_expanded;
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.more_expanded {
            HIDE_MORE_LABEL
        } else {
            SHOW_MORE_LABEL
        }
    }
}

/// `Risk: {score}`, or `Risk: N/A` for a falsy score
pub fn format_risk(score: &Value) -> String {
    match score {
        Value::Null | Value::Bool(false) => RISK_UNKNOWN.to_string(),
        Value::String(s) if s.is_empty() => RISK_UNKNOWN.to_string(),
        Value::String(s) => format!("Risk: {}", s),
        Value::Number(n) => match n.as_f64() {
            Some(x) if x == 0.0 || x.is_nan() => RISK_UNKNOWN.to_string(),
            Some(x) if x.fract() == 0.0 && x.abs() < 1e15 => format!("Risk: {}", x as i64),
            Some(x) => format!("Risk: {}", x),
            None => format!("Risk: {}", n),
        },
        other => format!("Risk: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::recommendation::Recommendation;
    use serde_json::json;

    fn rec(name: &str, suitability: &str) -> Recommendation {
        Recommendation {
            brand: "Brand".into(),
            policy: name.into(),
            suitability: suitability.into(),
            price: 10000.0,
            ..Default::default()
        }
    }

    fn response(primary: usize, more: usize) -> PredictResponse {
        PredictResponse {
            risk_score: json!(3.4),
            recommendations: (0..primary).map(|i| rec(&format!("P{}", i), "High suitability")).collect(),
            more_recommendations: (0..more).map(|i| rec(&format!("M{}", i), "")).collect(),
        }
    }

    #[test]
    fn test_begin_search_resets_everything() {
        let mut view = ResultsView::default();
        view.apply(Ok(response(2, 3)));
        view.toggle_more();
        assert!(view.more_expanded);

        view.begin_search();

        assert_eq!(view.risk_text, "Risk: N/A");
        assert_eq!(view.status, ResultsStatus::Searching);
        assert!(view.primary.is_empty());
        assert!(view.more.is_empty());
        assert!(!view.more_expanded);
        assert!(!view.show_more_visible());
    }

    #[test]
    fn test_two_primary_three_more() {
        let mut view = ResultsView::default();
        view.begin_search();
        view.apply(Ok(response(2, 3)));

        assert_eq!(view.primary.len(), 2);
        assert_eq!(view.more.len(), 3);
        assert!(view.show_more_visible());
        assert!(!view.more_expanded);
        assert_eq!(view.toggle_label(), "Show More Policies");
        assert_eq!(view.risk_text, "Risk: 3.4");
    }

    #[test]
    fn test_empty_more_keeps_toggle_hidden() {
        let mut view = ResultsView::default();
        view.begin_search();
        view.apply(Ok(response(1, 0)));

        assert!(!view.show_more_visible());
        view.toggle_more();
        assert!(!view.more_expanded);
    }

    #[test]
    fn test_toggle_relabels() {
        let mut view = ResultsView::default();
        view.apply(Ok(response(1, 1)));

        view.toggle_more();
        assert!(view.more_expanded);
        assert_eq!(view.toggle_label(), "Hide More Policies");

        view.toggle_more();
        assert!(!view.more_expanded);
        assert_eq!(view.toggle_label(), "Show More Policies");
    }

    #[test]
    fn test_server_error_display() {
        let mut view = ResultsView::default();
        view.begin_search();
        view.apply(Err(PredictError::Server("bad input".into())));

        assert_eq!(view.status, ResultsStatus::Failed("Error: bad input".into()));
        assert_eq!(view.risk_text, "Risk: N/A");
        assert!(view.primary.is_empty());
        assert!(!view.show_more_visible());
    }

    #[test]
    fn test_network_error_display() {
        let mut view = ResultsView::default();
        view.apply(Err(PredictError::Network("Failed to fetch".into())));
        assert_eq!(
            view.status,
            ResultsStatus::Failed("Network error: Failed to fetch".into())
        );
    }

    #[test]
    fn test_format_risk() {
        assert_eq!(format_risk(&json!(4.56)), "Risk: 4.56");
        assert_eq!(format_risk(&json!(7)), "Risk: 7");
        assert_eq!(format_risk(&json!(3.0)), "Risk: 3");
        assert_eq!(format_risk(&json!("high")), "Risk: high");
        assert_eq!(format_risk(&json!(true)), "Risk: true");
    }

    #[test]
    fn test_format_risk_falsy() {
        for score in [json!(null), json!(0), json!(0.0), json!(false), json!("")] {
            assert_eq!(format_risk(&score), "Risk: N/A");
        }
    }
}
