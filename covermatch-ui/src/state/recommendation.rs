//! Recommendation Cards
//!
//! Wire types for `/predict` responses and the display model each card is
//! rendered from.

use serde::{Deserialize, Deserializer};

/// Link used when a policy has no URL of its own
pub const DEFAULT_POLICY_URL: &str = "https://www.policybazaar.com/health-insurance/";

/// A recommended policy as returned by the server
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub policy: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suitability: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remarks: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coverage: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of a successful `/predict` response
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PredictResponse {
    #[serde(default)]
    pub risk_score: serde_json::Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<Recommendation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub more_recommendations: Vec<Recommendation>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Suitability band derived from the label's wording
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuitabilityTier {
    High,
    Good,
    Low,
}

impl SuitabilityTier {
    /// Classify by keyword; "high" wins over "good"
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("high") {
            Self::High
        } else if label.contains("good") {
            Self::Good
        } else {
            Self::Low
        }
    }

    /// Bar fill in percent
    pub fn fill_percent(self) -> u8 {
        match self {
            Self::High => 100,
            Self::Good => 66,
            Self::Low => 32,
        }
    }

    /// CSS background for the bar fill
    pub fn gradient(self) -> &'static str {
        match self {
            Self::High => "linear-gradient(90deg,#6ee7b7,#10b981)",
            Self::Good => "linear-gradient(90deg,#ffd166,#f59e0b)",
            Self::Low => "linear-gradient(90deg,#ff6b6b,#ff8a6b)",
        }
    }
}

/// Everything a policy card displays
#[derive(Clone, Debug, PartialEq)]
pub struct CardModel {
    pub brand: String,
    pub policy: String,
    pub suitability: String,
    pub remarks: String,
    pub coverage: String,
    pub url: String,
    pub price: String,
    pub tier: SuitabilityTier,
}

impl From<&Recommendation> for CardModel {
    fn from(rec: &Recommendation) -> Self {
        let url = match rec.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => DEFAULT_POLICY_URL.to_string(),
        };

        Self {
            brand: rec.brand.clone(),
            policy: rec.policy.clone(),
            suitability: rec.suitability.clone(),
            remarks: rec.remarks.clone(),
            coverage: rec.coverage.clone(),
            url,
            price: format_price(rec.price),
            tier: SuitabilityTier::from_label(&rec.suitability),
        }
    }
}

/// `₹ ` plus the integer part in Indian digit grouping (`1,25,000`)
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "₹ 0".to_string();
    }

    let whole = price.trunc();
    let sign = if whole < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", whole.abs());

    format!("₹ {}{}", sign, group_indian(&digits))
}

/// Last three digits, then groups of two
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_high() {
        for label in ["High suitability", "HIGH", "very high-risk fit"] {
            let tier = SuitabilityTier::from_label(label);
            assert_eq!(tier, SuitabilityTier::High);
            assert_eq!(tier.fill_percent(), 100);
            assert_eq!(tier.gradient(), "linear-gradient(90deg,#6ee7b7,#10b981)");
        }
    }

    #[test]
    fn test_tier_good() {
        let tier = SuitabilityTier::from_label("Good for medium risk");
        assert_eq!(tier, SuitabilityTier::Good);
        assert_eq!(tier.fill_percent(), 66);
        assert_eq!(tier.gradient(), "linear-gradient(90deg,#ffd166,#f59e0b)");
    }

    #[test]
    fn test_tier_high_checked_before_good() {
        assert_eq!(
            SuitabilityTier::from_label("Good, but High premium"),
            SuitabilityTier::High
        );
    }

    #[test]
    fn test_tier_other() {
        for label in ["Suitable for low-risk users", "", "excellent"] {
            let tier = SuitabilityTier::from_label(label);
            assert_eq!(tier, SuitabilityTier::Low);
            assert_eq!(tier.fill_percent(), 32);
            assert_eq!(tier.gradient(), "linear-gradient(90deg,#ff6b6b,#ff8a6b)");
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "₹ 0");
        assert_eq!(format_price(999.0), "₹ 999");
        assert_eq!(format_price(1000.0), "₹ 1,000");
        assert_eq!(format_price(125000.0), "₹ 1,25,000");
        assert_eq!(format_price(12345678.0), "₹ 1,23,45,678");
        assert_eq!(format_price(15999.75), "₹ 15,999");
        assert_eq!(format_price(-2500.0), "₹ -2,500");
        assert_eq!(format_price(f64::NAN), "₹ 0");
    }

    #[test]
    fn test_card_url_fallback() {
        let mut rec = Recommendation {
            brand: "Acme".into(),
            policy: "Acme Care".into(),
            suitability: "Good for medium risk".into(),
            price: 25000.0,
            ..Default::default()
        };

        assert_eq!(CardModel::from(&rec).url, DEFAULT_POLICY_URL);

        rec.url = Some(String::new());
        assert_eq!(CardModel::from(&rec).url, DEFAULT_POLICY_URL);

        rec.url = Some("https://acme.example/care".into());
        let card = CardModel::from(&rec);
        assert_eq!(card.url, "https://acme.example/care");
        assert_eq!(card.price, "₹ 25,000");
        assert_eq!(card.tier, SuitabilityTier::Good);
    }

    #[test]
    fn test_response_tolerates_missing_and_null_fields() {
        let body = serde_json::json!({
            "risk_score": 4.2,
            "recommendations": [
                {"brand": "Acme", "policy": "Acme Care", "price": 18000, "tags": ["low"],
                 "remarks": null, "suitability": "High suitability"}
            ],
            "more_recommendations": null
        });

        let response: PredictResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].price, 18000.0);
        assert_eq!(response.recommendations[0].remarks, "");
        assert!(response.recommendations[0].url.is_none());
        assert!(response.more_recommendations.is_empty());

        let empty: PredictResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.risk_score.is_null());
        assert!(empty.recommendations.is_empty());
    }
}
