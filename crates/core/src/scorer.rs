// crates/core/src/scorer.rs
//! Linear scoring over WoE-encoded features.

use std::collections::BTreeMap;

use crate::binning::BinningArtifact;
use crate::model::ModelArtifact;
use crate::types::ApplicantInput;

/// Model output for one applicant: the log-odds of default plus the
/// signed per-feature contributions that produced it.
#[derive(Debug, Clone)]
pub struct ModelScore {
    /// intercept + Σ contributions.
    pub log_odds: f64,
    /// feature → woe × weight, for every selected feature.
    pub contributions: BTreeMap<String, f64>,
}

impl ModelScore {
    /// Default probability via the logistic link. Always in (0, 1) by
    /// construction; only the risk override may floor it afterwards.
    pub fn probability(&self) -> f64 {
        1.0 / (1.0 + (-self.log_odds).exp())
    }
}

/// Score one applicant: encode each selected feature to WoE and apply the
/// linear model.
///
/// The engine constructor guarantees every selected feature has a binning
/// table and a weight, so the lookups here cannot miss.
pub fn score(
    input: &ApplicantInput,
    binning: &BinningArtifact,
    model: &ModelArtifact,
) -> ModelScore {
    let mut contributions = BTreeMap::new();
    let mut log_odds = model.intercept;

    for feature in &model.selected_features {
        let raw = raw_feature_value(input, feature);
        let (Some(woe), Some(weight)) = (binning.encode(feature, raw), model.weights.get(feature))
        else {
            continue;
        };
        let contribution = woe * weight;
        log_odds += contribution;
        contributions.insert(feature.clone(), contribution);
    }

    ModelScore {
        log_odds,
        contributions,
    }
}

/// Map a selected-feature name to its raw input value.
///
/// Unknown names score as 0.0 WoE-space input; they are already rejected
/// by artifact validation, this is just the total function the compiler
/// wants.
fn raw_feature_value(input: &ApplicantInput, feature: &str) -> f64 {
    match feature {
        "grade_numeric" => input.grade_numeric,
        "int_rate" => input.int_rate,
        "inq_last_6mths" => input.inq_last_6mths,
        "revol_util" => input.revol_util,
        "installment" => input.installment,
        "dti" => input.dti,
        "open_acc" => input.open_acc,
        "loan_amnt" => input.loan_amnt,
        "annual_inc" => input.annual_inc,
        "credit_history_months" => input.credit_history_months,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::{default_binning, default_model};

    fn input() -> ApplicantInput {
        ApplicantInput {
            applicant_id: "scorer_test".to_string(),
            grade_numeric: 3.0,
            int_rate: 13.5,
            inq_last_6mths: 0.0,
            revol_util: 25.0,
            installment: 350.0,
            dti: 15.0,
            open_acc: 8.0,
            loan_amnt: 15000.0,
            annual_inc: 50000.0,
            credit_history_months: 120.0,
        }
    }

    #[test]
    fn test_contributions_cover_selected_features() {
        let result = score(&input(), &default_binning(), &default_model());
        assert_eq!(result.contributions.len(), 6);
    }

    #[test]
    fn test_log_odds_is_intercept_plus_contributions() {
        let model = default_model();
        let result = score(&input(), &default_binning(), &model);
        let total: f64 = result.contributions.values().sum();
        assert!((result.log_odds - (model.intercept + total)).abs() < 1e-12);
    }

    #[test]
    fn test_known_contribution_values() {
        // grade 3 → bin [2,4) → WoE -0.3, weight 0.9
        let result = score(&input(), &default_binning(), &default_model());
        let grade = result.contributions["grade_numeric"];
        assert!((grade - (-0.27)).abs() < 1e-12, "got {grade}");
        // credit history 120 → bin [120,240) → WoE -0.45, weight 0.85
        let hist = result.contributions["credit_history_months"];
        assert!((hist - (-0.3825)).abs() < 1e-12, "got {hist}");
    }

    #[test]
    fn test_probability_in_open_unit_interval() {
        let result = score(&input(), &default_binning(), &default_model());
        let p = result.probability();
        assert!(p > 0.0 && p < 1.0, "probability {p} out of (0,1)");
    }

    #[test]
    fn test_probability_monotone_in_log_odds() {
        let low = ModelScore {
            log_odds: -2.0,
            contributions: BTreeMap::new(),
        };
        let high = ModelScore {
            log_odds: 1.0,
            contributions: BTreeMap::new(),
        };
        assert!(low.probability() < high.probability());
    }
}
