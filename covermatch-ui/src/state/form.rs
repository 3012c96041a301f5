//! Prediction Form
//!
//! Field definitions and the request payload built from them.

use serde::Serialize;

/// Raw form values, sent exactly as typed
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecommendationInput {
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Diabetes")]
    pub diabetes: String,
    #[serde(rename = "BloodPressureProblems")]
    pub blood_pressure_problems: String,
    #[serde(rename = "AnyTransplants")]
    pub any_transplants: String,
    #[serde(rename = "AnyChronicDiseases")]
    pub any_chronic_diseases: String,
    #[serde(rename = "Height")]
    pub height: String,
    #[serde(rename = "Weight")]
    pub weight: String,
    #[serde(rename = "KnownAllergies")]
    pub known_allergies: String,
    #[serde(rename = "HistoryOfCancerInFamily")]
    pub history_of_cancer_in_family: String,
    #[serde(rename = "NumberOfMajorSurgeries")]
    pub number_of_major_surgeries: String,
    pub budget: String,
}

impl Default for RecommendationInput {
    fn default() -> Self {
        let mut input = Self {
            age: String::new(),
            diabetes: String::new(),
            blood_pressure_problems: String::new(),
            any_transplants: String::new(),
            any_chronic_diseases: String::new(),
            height: String::new(),
            weight: String::new(),
            known_allergies: String::new(),
            history_of_cancer_in_family: String::new(),
            number_of_major_surgeries: String::new(),
            budget: String::new(),
        };
        for field in FieldKey::ALL {
            input.set(field, field.initial_value());
        }
        input
    }
}

impl RecommendationInput {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Age => &self.age,
            FieldKey::Diabetes => &self.diabetes,
            FieldKey::BloodPressureProblems => &self.blood_pressure_problems,
            FieldKey::AnyTransplants => &self.any_transplants,
            FieldKey::AnyChronicDiseases => &self.any_chronic_diseases,
            FieldKey::Height => &self.height,
            FieldKey::Weight => &self.weight,
            FieldKey::KnownAllergies => &self.known_allergies,
            FieldKey::HistoryOfCancerInFamily => &self.history_of_cancer_in_family,
            FieldKey::NumberOfMajorSurgeries => &self.number_of_major_surgeries,
            FieldKey::Budget => &self.budget,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::Age => &mut self.age,
            FieldKey::Diabetes => &mut self.diabetes,
            FieldKey::BloodPressureProblems => &mut self.blood_pressure_problems,
            FieldKey::AnyTransplants => &mut self.any_transplants,
            FieldKey::AnyChronicDiseases => &mut self.any_chronic_diseases,
            FieldKey::Height => &mut self.height,
            FieldKey::Weight => &mut self.weight,
            FieldKey::KnownAllergies => &mut self.known_allergies,
            FieldKey::HistoryOfCancerInFamily => &mut self.history_of_cancer_in_family,
            FieldKey::NumberOfMajorSurgeries => &mut self.number_of_major_surgeries,
            FieldKey::Budget => &mut self.budget,
        };
        *slot = value.into();
    }
}

/// How a field is entered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free numeric input
    Number,
    /// `0` / `1` select
    YesNo,
}

/// One form control; its DOM id is also its payload key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKey {
    Age,
    Diabetes,
    BloodPressureProblems,
    AnyTransplants,
    AnyChronicDiseases,
    Height,
    Weight,
    KnownAllergies,
    HistoryOfCancerInFamily,
    NumberOfMajorSurgeries,
    Budget,
}

impl FieldKey {
    /// Form order
    pub const ALL: [FieldKey; 11] = [
        FieldKey::Age,
        FieldKey::Diabetes,
        FieldKey::BloodPressureProblems,
        FieldKey::AnyTransplants,
        FieldKey::AnyChronicDiseases,
        FieldKey::Height,
        FieldKey::Weight,
        FieldKey::KnownAllergies,
        FieldKey::HistoryOfCancerInFamily,
        FieldKey::NumberOfMajorSurgeries,
        FieldKey::Budget,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FieldKey::Age => "Age",
            FieldKey::Diabetes => "Diabetes",
            FieldKey::BloodPressureProblems => "BloodPressureProblems",
            FieldKey::AnyTransplants => "AnyTransplants",
            FieldKey::AnyChronicDiseases => "AnyChronicDiseases",
            FieldKey::Height => "Height",
            FieldKey::Weight => "Weight",
            FieldKey::KnownAllergies => "KnownAllergies",
            FieldKey::HistoryOfCancerInFamily => "HistoryOfCancerInFamily",
            FieldKey::NumberOfMajorSurgeries => "NumberOfMajorSurgeries",
            FieldKey::Budget => "budget",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Age => "Age",
            FieldKey::Diabetes => "Diabetes",
            FieldKey::BloodPressureProblems => "Blood pressure problems",
            FieldKey::AnyTransplants => "Any transplants",
            FieldKey::AnyChronicDiseases => "Chronic diseases",
            FieldKey::Height => "Height (cm)",
            FieldKey::Weight => "Weight (kg)",
            FieldKey::KnownAllergies => "Known allergies",
            FieldKey::HistoryOfCancerInFamily => "Cancer in family",
            FieldKey::NumberOfMajorSurgeries => "Major surgeries",
            FieldKey::Budget => "Max budget (₹)",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldKey::Diabetes
            | FieldKey::BloodPressureProblems
            | FieldKey::AnyTransplants
            | FieldKey::AnyChronicDiseases
            | FieldKey::KnownAllergies
            | FieldKey::HistoryOfCancerInFamily => FieldKind::YesNo,
            _ => FieldKind::Number,
        }
    }

    /// Value before the user touches the control
    pub fn initial_value(self) -> &'static str {
        match self.kind() {
            FieldKind::YesNo => "0",
            FieldKind::Number if self == FieldKey::NumberOfMajorSurgeries => "0",
            FieldKind::Number => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_payload_keys_match_field_ids() {
        let payload = serde_json::to_value(RecommendationInput::default()).unwrap();
        let object = payload.as_object().unwrap();

        assert_eq!(object.len(), 11);
        for field in FieldKey::ALL {
            assert!(object.contains_key(field.id()), "missing {}", field.id());
        }
    }

    #[test]
    fn test_values_sent_verbatim() {
        let mut input = RecommendationInput::default();
        input.set(FieldKey::Age, " 42abc");
        input.set(FieldKey::Budget, "");
        input.set(FieldKey::Height, "170.5");

        let payload = serde_json::to_value(&input).unwrap();
        assert_eq!(payload["Age"], Value::String(" 42abc".into()));
        assert_eq!(payload["budget"], Value::String(String::new()));
        assert_eq!(payload["Height"], "170.5");
        assert_eq!(input.get(FieldKey::Age), " 42abc");
    }

    #[test]
    fn test_initial_values() {
        let input = RecommendationInput::default();
        assert_eq!(input.get(FieldKey::Diabetes), "0");
        assert_eq!(input.get(FieldKey::NumberOfMajorSurgeries), "0");
        assert_eq!(input.get(FieldKey::Age), "");
        assert_eq!(input.get(FieldKey::Budget), "");
    }

    #[test]
    fn test_field_kinds() {
        let yes_no = FieldKey::ALL
            .iter()
            .filter(|f| f.kind() == FieldKind::YesNo)
            .count();
        assert_eq!(yes_no, 6);
        assert_eq!(FieldKey::Budget.kind(), FieldKind::Number);
    }
}
