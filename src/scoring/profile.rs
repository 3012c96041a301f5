//! Health Profile
//!
//! The prediction form posts every field as a raw string. This module turns
//! that loosely-typed JSON object into a `HealthProfile`, treating any value
//! that does not parse as absent rather than rejecting the request.

use serde_json::Value;

/// Parsed health attributes from a prediction request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthProfile {
    pub age: Option<f64>,
    pub diabetes: Option<i64>,
    pub blood_pressure_problems: Option<i64>,
    pub any_transplants: Option<i64>,
    pub any_chronic_diseases: Option<i64>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub known_allergies: Option<i64>,
    pub history_of_cancer_in_family: Option<i64>,
    pub number_of_major_surgeries: Option<i64>,
    /// Maximum acceptable premium; `None` means no budget filter
    pub budget: Option<i64>,
}

impl HealthProfile {
    /// Build a profile from a request body.
    ///
    /// Non-object bodies yield an empty profile.
    pub fn from_json(body: &Value) -> Self {
        let field = |key: &str| body.get(key).unwrap_or(&Value::Null);

        Self {
            age: as_float(field("Age")),
            diabetes: as_int(field("Diabetes")),
            blood_pressure_problems: as_int(field("BloodPressureProblems")),
            any_transplants: as_int(field("AnyTransplants")),
            any_chronic_diseases: as_int(field("AnyChronicDiseases")),
            height_cm: as_float(field("Height")),
            weight_kg: as_float(field("Weight")),
            known_allergies: as_int(field("KnownAllergies")),
            history_of_cancer_in_family: as_int(field("HistoryOfCancerInFamily")),
            number_of_major_surgeries: as_int(field("NumberOfMajorSurgeries")),
            budget: as_float(field("budget")).map(|b| b.trunc() as i64),
        }
    }

    /// Age in whole years, 0 when unknown
    pub fn age_years(&self) -> i64 {
        self.age.map(|a| a.trunc() as i64).unwrap_or(0)
    }

    /// Flags the six yes/no conditions that each add to the risk score
    pub fn condition_flags(&self) -> [Option<i64>; 6] {
        [
            self.diabetes,
            self.blood_pressure_problems,
            self.any_transplants,
            self.any_chronic_diseases,
            self.known_allergies,
            self.history_of_cancer_in_family,
        ]
    }

    pub fn has_diabetes(&self) -> bool {
        self.diabetes == Some(1)
    }

    pub fn has_blood_pressure_problems(&self) -> bool {
        self.blood_pressure_problems == Some(1)
    }

    pub fn has_chronic_diseases(&self) -> bool {
        self.any_chronic_diseases == Some(1)
    }

    pub fn has_cancer_history(&self) -> bool {
        self.history_of_cancer_in_family == Some(1)
    }

    pub fn surgeries(&self) -> i64 {
        self.number_of_major_surgeries.unwrap_or(0)
    }
}

/// Lenient float: numbers, numeric strings, booleans
fn as_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Lenient integer: integral strings, numbers (truncated), booleans
fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|v| v.is_finite()).map(|v| v.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}
