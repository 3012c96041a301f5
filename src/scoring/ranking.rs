//! Policy Ranking
//!
//! Scores each catalog policy against the profile, sorts by score (ties
//! broken by cheaper premium), applies the budget, and splits the result
//! into the primary list and the "more" list.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

use super::profile::HealthProfile;
use super::risk::compute_risk_score;
use crate::catalog::Policy;

/// Risk at or above which a profile is treated as high risk
pub const HIGH_RISK: f64 = 6.0;
/// Risk at or above which a profile is treated as medium risk
pub const MEDIUM_RISK: f64 = 3.0;

pub const NOTE_HIGH: &str = "High suitability";
pub const NOTE_GOOD: &str = "Good fit";
pub const NOTE_LOW_RISK: &str = "Suitable for low-risk users";

/// How many policies go in each list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionLimits {
    pub primary: usize,
    pub secondary: usize,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            primary: 5,
            secondary: 10,
        }
    }
}

/// A ranked policy with its suitability note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub policy: Policy,
    pub suitability: String,
}

/// Full ranking result for one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    /// Risk score rounded to two decimals
    pub risk_score: f64,
    pub recommendations: Vec<Recommendation>,
    pub more_recommendations: Vec<Recommendation>,
}

/// Score a single policy for a profile at the given risk
pub fn score_policy(profile: &HealthProfile, policy: &Policy, risk: f64) -> f64 {
    let mut score = 0.0;
    let age = profile.age_years();

    if risk >= HIGH_RISK {
        if policy.has_tag("high") {
            score += 3.0;
        }
        if policy.has_tag("senior") && age >= 55 {
            score += 2.0;
        }
        if policy.has_tag("chronic") && profile.has_chronic_diseases() {
            score += 2.0;
        }
        if policy.has_tag("diabetes") && profile.has_diabetes() {
            score += 2.0;
        }
    } else if risk >= MEDIUM_RISK {
        if policy.has_tag("medium") {
            score += 3.0;
        }
        if policy.has_tag("family") {
            score += 1.0;
        }
        if policy.has_tag("chronic") && profile.has_chronic_diseases() {
            score += 1.5;
        }
    } else {
        if policy.has_tag("low") {
            score += 3.0;
        }
        if policy.has_tag("young") && age < 35 {
            score += 1.5;
        }
        if policy.has_tag("budget") {
            score += 1.0;
        }
    }

    if policy.has_tag("surgery") && profile.surgeries() > 0 {
        score += 1.5;
    }
    if policy.has_tag("bp") && profile.has_blood_pressure_problems() {
        score += 1.5;
    }
    if policy.has_tag("cancer") && profile.has_cancer_history() {
        score += 1.5;
    }

    if policy.price > affordable_premium(risk) * 2 {
        score -= 1.0;
    }

    score
}

/// Premium considered affordable for the risk band
fn affordable_premium(risk: f64) -> i64 {
    if risk < MEDIUM_RISK {
        30_000
    } else if risk < HIGH_RISK {
        40_000
    } else {
        50_000
    }
}

/// Suitability note shown on the card
pub fn suitability_note(policy: &Policy, risk: f64) -> &'static str {
    if policy.has_tag("high") {
        NOTE_HIGH
    } else if risk >= MEDIUM_RISK {
        NOTE_GOOD
    } else {
        NOTE_LOW_RISK
    }
}

/// Rank the catalog for a profile and pick the primary and "more" lists.
///
/// Primary holds the best `limits.primary` policies within budget, topped up
/// from the unfiltered ranking (by policy name) when the budget leaves too
/// few. The "more" list continues the in-budget ranking and is likewise
/// topped up with any policy not already shown.
pub fn recommend(
    profile: &HealthProfile,
    policies: &[Policy],
    limits: SelectionLimits,
) -> Recommendations {
    let risk = compute_risk_score(profile);

    let mut scored: Vec<(f64, usize)> = policies
        .iter()
        .enumerate()
        .map(|(idx, policy)| (score_policy(profile, policy, risk), idx))
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| policies[a.1].price.cmp(&policies[b.1].price))
    });

    let ranked: Vec<usize> = scored.into_iter().map(|(_, idx)| idx).collect();
    let within_budget: Vec<usize> = ranked
        .iter()
        .copied()
        .filter(|&idx| profile.budget.map_or(true, |b| policies[idx].price <= b))
        .collect();

    let mut primary: Vec<usize> = within_budget.iter().copied().take(limits.primary).collect();
    if primary.len() < limits.primary {
        let mut names: HashSet<&str> = primary
            .iter()
            .map(|&idx| policies[idx].policy.as_str())
            .collect();
        for &idx in &ranked {
            if primary.len() >= limits.primary {
                break;
            }
            if names.insert(policies[idx].policy.as_str()) {
                primary.push(idx);
            }
        }
    }

    let mut secondary: Vec<usize> = within_budget
        .iter()
        .copied()
        .skip(limits.primary)
        .take(limits.secondary)
        .collect();
    if secondary.len() < limits.secondary {
        for &idx in &ranked {
            if secondary.len() >= limits.secondary {
                break;
            }
            if !primary.contains(&idx) && !secondary.contains(&idx) {
                secondary.push(idx);
            }
        }
    }

    let annotate = |indices: Vec<usize>| -> Vec<Recommendation> {
        indices
            .into_iter()
            .map(|idx| Recommendation {
                policy: policies[idx].clone(),
                suitability: suitability_note(&policies[idx], risk).to_string(),
            })
            .collect()
    };

    Recommendations {
        risk_score: (risk * 100.0).round() / 100.0,
        recommendations: annotate(primary),
        more_recommendations: annotate(secondary),
    }
}
