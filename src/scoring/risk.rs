//! Risk Score
//!
//! Additive risk model over age, six yes/no conditions, surgery count and
//! BMI band. Higher is riskier; a healthy 30-year-old scores about 0.6, and
//! the policy ranking switches bands at 3 and 6.

use super::profile::HealthProfile;

/// Points at age 100; scales linearly with age
const AGE_WEIGHT: f64 = 2.0;
/// Points for each condition flagged as present
const CONDITION_WEIGHT: f64 = 2.0;
/// Points per major surgery
const SURGERY_WEIGHT: f64 = 0.8;
/// Surgeries beyond this count add nothing
const MAX_COUNTED_SURGERIES: i64 = 5;

const OBESE_BMI: f64 = 30.0;
const OVERWEIGHT_BMI: f64 = 25.0;

/// Compute the risk score for a profile
pub fn compute_risk_score(profile: &HealthProfile) -> f64 {
    let mut score = 0.0;

    if let Some(age) = profile.age {
        score += (age / 100.0) * AGE_WEIGHT;
    }

    score += profile
        .condition_flags()
        .iter()
        .filter(|flag| **flag == Some(1))
        .count() as f64
        * CONDITION_WEIGHT;

    if let Some(surgeries) = profile.number_of_major_surgeries {
        score += surgeries.clamp(0, MAX_COUNTED_SURGERIES) as f64 * SURGERY_WEIGHT;
    }

    if let Some(bmi) = body_mass_index(profile) {
        if bmi >= OBESE_BMI {
            score += 2.0;
        } else if bmi >= OVERWEIGHT_BMI {
            score += 1.0;
        }
    }

    score
}

/// BMI from height in centimetres and weight in kilograms
pub fn body_mass_index(profile: &HealthProfile) -> Option<f64> {
    let height_m = profile.height_cm? / 100.0;
    let weight = profile.weight_kg?;
    if height_m > 0.0 {
        Some(weight / (height_m * height_m))
    } else {
        None
    }
}
