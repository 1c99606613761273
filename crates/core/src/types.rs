// crates/core/src/types.rs
//! Input, output, and classification types for the scoring pipeline.

use serde::{Deserialize, Serialize};

/// Raw applicant attributes as received from the boundary layer.
///
/// Immutable once constructed; the engine never mutates applicant data.
/// All numeric fields are well-typed by the time this exists; shape and
/// type errors are the transport layer's problem.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApplicantInput {
    /// Unique identifier for the applicant.
    pub applicant_id: String,
    /// Credit grade as numeric (A=1 through G=7).
    pub grade_numeric: f64,
    /// Interest rate percentage.
    pub int_rate: f64,
    /// Credit inquiries in the last 6 months.
    pub inq_last_6mths: f64,
    /// Revolving line utilization percentage.
    pub revol_util: f64,
    /// Monthly installment amount.
    pub installment: f64,
    /// Debt-to-income ratio percentage.
    pub dti: f64,
    /// Number of open credit accounts.
    pub open_acc: f64,
    /// Requested loan amount.
    pub loan_amnt: f64,
    /// Annual income.
    pub annual_inc: f64,
    /// Length of credit history in months.
    pub credit_history_months: f64,
}

/// Ratios derived deterministically from [`ApplicantInput`].
///
/// Always recomputed server-side. Client-supplied values for these fields
/// are never trusted, even when present in a request payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedRatios {
    /// installment / (annual_inc / 12)
    pub installment_to_income: f64,
    /// loan_amnt / annual_inc
    pub loan_to_income: f64,
}

impl DerivedRatios {
    /// Compute both ratios from the raw input.
    ///
    /// Only called after hard validation has passed, so `annual_inc` is
    /// guaranteed >= 20,000 and the divisions are well-defined.
    pub fn from_input(input: &ApplicantInput) -> Self {
        Self {
            installment_to_income: input.installment / (input.annual_inc / 12.0),
            loan_to_income: input.loan_amnt / input.annual_inc,
        }
    }
}

/// Soft-rule warning codes. Any triggered warning activates the risk
/// override (score cap + probability floor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    LoanToIncomeHigh,
    InstallmentToIncomeHigh,
    DtiHigh,
    ShortCreditHistory,
}

impl WarningCode {
    /// Stable string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::LoanToIncomeHigh => "LOAN_TO_INCOME_HIGH",
            WarningCode::InstallmentToIncomeHigh => "INSTALLMENT_TO_INCOME_HIGH",
            WarningCode::DtiHigh => "DTI_HIGH",
            WarningCode::ShortCreditHistory => "SHORT_CREDIT_HISTORY",
        }
    }
}

/// Discrete risk tier derived from the final point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            other => Err(format!("unknown risk level: {other}")),
        }
    }
}

/// Final scoring decision for one applicant. Immutable after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringResult {
    pub applicant_id: String,
    /// Integer scorecard points, clamped to [356, 671].
    pub credit_score: i64,
    /// Default probability in [0, 1].
    pub default_probability: f64,
    pub risk_level: RiskLevel,
    pub explanation: String,
    /// Warning codes that fired during soft validation.
    pub warnings: Vec<WarningCode>,
}

/// Hard-rejection outcome: one message per violated rule.
///
/// A rejection is a distinct failure path: no [`ScoringResult`] exists
/// for a rejected application.
#[derive(Debug, Clone, Serialize)]
pub struct RejectionReport {
    pub applicant_id: String,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ApplicantInput {
        ApplicantInput {
            applicant_id: "app_001".to_string(),
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
    fn test_derived_ratios() {
        let ratios = DerivedRatios::from_input(&sample_input());
        assert!((ratios.installment_to_income - 0.084).abs() < 1e-9);
        assert!((ratios.loan_to_income - 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_warning_code_serialization() {
        let json = serde_json::to_string(&WarningCode::LoanToIncomeHigh).unwrap();
        assert_eq!(json, "\"LOAN_TO_INCOME_HIGH\"");
        assert_eq!(
            WarningCode::ShortCreditHistory.as_str(),
            "SHORT_CREDIT_HISTORY"
        );
    }

    #[test]
    fn test_risk_level_round_trip() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            let parsed: RiskLevel = level.as_str().parse().unwrap();
            assert_eq!(parsed, level);
        }
        assert!("Extreme".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_input_deserializes_ignoring_client_ratios() {
        // Clients may still send the legacy ratio fields; they are dropped
        // at the boundary and recomputed server-side.
        let json = r#"{
            "applicant_id": "app_002",
            "grade_numeric": 2, "int_rate": 9.5, "inq_last_6mths": 1,
            "revol_util": 40, "installment": 200, "dti": 12,
            "open_acc": 5, "loan_amnt": 8000, "annual_inc": 60000,
            "credit_history_months": 84,
            "installment_to_income": 99.0, "loan_to_income": 99.0
        }"#;
        let input: ApplicantInput = serde_json::from_str(json).unwrap();
        let ratios = DerivedRatios::from_input(&input);
        assert!(ratios.loan_to_income < 1.0);
    }
}
