// crates/core/src/explain.rs
//! Explanation generation from per-feature contributions.
//!
//! Contributions are ranked by magnitude; the strongest protective
//! (negative) and adverse (positive) factors are rendered through a fixed
//! feature → phrase table. Features without a phrase mapping are skipped
//! silently so an unknown feature can never malform the sentence.

use std::collections::BTreeMap;

use crate::types::{RiskLevel, WarningCode};

/// Maximum factors quoted per direction.
const MAX_FACTORS: usize = 3;

/// Fixed phrase table: feature → (favorable phrase, adverse phrase).
fn phrases(feature: &str) -> Option<(&'static str, &'static str)> {
    match feature {
        "grade_numeric" => Some(("strong credit grade", "subprime credit grade")),
        "int_rate" => Some(("favorable interest rate", "high interest rate")),
        "inq_last_6mths" => Some((
            "no recent credit inquiries",
            "multiple recent credit inquiries",
        )),
        "revol_util" => Some(("low credit utilization", "high credit utilization")),
        "dti" => Some(("low debt-to-income ratio", "elevated debt burden")),
        "credit_history_months" => Some(("long credit history", "limited credit history")),
        _ => None,
    }
}

/// Human-readable phrase for a triggered warning.
fn warning_phrase(code: WarningCode) -> &'static str {
    match code {
        WarningCode::LoanToIncomeHigh => "loan amount high relative to income",
        WarningCode::InstallmentToIncomeHigh => "monthly payment burden is significant",
        WarningCode::DtiHigh => "elevated debt-to-income ratio",
        WarningCode::ShortCreditHistory => "credit history shorter than one year",
    }
}

fn intro(risk_level: RiskLevel) -> &'static str {
    match risk_level {
        RiskLevel::Low => "Low default risk",
        RiskLevel::Medium => "Moderate default risk",
        RiskLevel::High => "High default risk",
    }
}

/// Build the explanation sentence.
///
/// Deterministic: factors are ordered by |contribution| descending with
/// the feature name as tie-breaker, so identical inputs always produce
/// the identical sentence.
pub fn explain(
    contributions: &BTreeMap<String, f64>,
    warnings: &[WarningCode],
    risk_level: RiskLevel,
) -> String {
    let mut ranked: Vec<(&str, f64)> = contributions
        .iter()
        .map(|(name, &value)| (name.as_str(), value))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let mut favorable = Vec::new();
    let mut adverse = Vec::new();
    for (feature, contribution) in ranked {
        let Some((good, bad)) = phrases(feature) else {
            continue; // unmapped feature: excluded, never an error
        };
        if contribution < 0.0 && favorable.len() < MAX_FACTORS {
            favorable.push(good);
        } else if contribution > 0.0 && adverse.len() < MAX_FACTORS {
            adverse.push(bad);
        }
    }

    let mut clauses = vec![intro(risk_level).to_string()];
    if !favorable.is_empty() {
        clauses.push(format!("due to {}", favorable.join(", ")));
    }
    if !adverse.is_empty() {
        clauses.push(format!("however, {}", adverse.join(", ")));
    }
    if !warnings.is_empty() {
        let listed: Vec<&str> = warnings.iter().map(|&w| warning_phrase(w)).collect();
        clauses.push(format!("concerns: {}", listed.join(", ")));
    }

    format!("{}.", clauses.join("; "))
}
