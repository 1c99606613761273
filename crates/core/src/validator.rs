// crates/core/src/validator.rs
//! Pre-scoring business rule validation.
//!
//! Hard rules are evaluated as an accumulator: every rule is checked and
//! every violation is reported, never short-circuited. Soft rules only run
//! once the hard rules all pass, and populate warning codes instead of
//! blocking the application.

use crate::types::{ApplicantInput, DerivedRatios, WarningCode};

/// Minimum acceptable annual income.
pub const MIN_ANNUAL_INCOME: f64 = 20_000.0;
/// Maximum loan amount the product supports.
pub const MAX_LOAN_AMOUNT: f64 = 40_000.0;
/// Valid interest rate range, bounds inclusive.
pub const INT_RATE_RANGE: (f64, f64) = (5.0, 31.0);

/// Outcome of validating one applicant.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// All hard rules passed; scoring may proceed with these warnings.
    Accepted(Vec<WarningCode>),
    /// One or more hard rules violated; one message per rule.
    Rejected(Vec<String>),
}

/// Validate an applicant against the hard-rejection and warning rules.
///
/// Pure function: no side effects, deterministic for a given input.
pub fn validate(input: &ApplicantInput) -> ValidationOutcome {
    let mut errors = Vec::new();

    if input.annual_inc < MIN_ANNUAL_INCOME {
        errors.push(format!(
            "Income ${} below minimum threshold ($20,000)",
            fmt_thousands(input.annual_inc)
        ));
    }

    if input.loan_amnt > MAX_LOAN_AMOUNT {
        errors.push(format!(
            "Loan amount ${} exceeds maximum ($40,000)",
            fmt_thousands(input.loan_amnt)
        ));
    }

    if input.int_rate < INT_RATE_RANGE.0 || input.int_rate > INT_RATE_RANGE.1 {
        errors.push(format!(
            "Interest rate {}% outside valid range (5-31%)",
            fmt_num(input.int_rate)
        ));
    }

    if input.grade_numeric < 1.0 || input.grade_numeric > 7.0 {
        errors.push(format!(
            "Grade {} invalid (must be 1-7)",
            fmt_num(input.grade_numeric)
        ));
    }

    for (name, value) in numeric_fields(input) {
        if value < 0.0 {
            errors.push(format!("{name} cannot be negative"));
        }
    }

    if !errors.is_empty() {
        return ValidationOutcome::Rejected(errors);
    }

    // Soft checks: derived ratios are computed here, server-side, and only
    // after the hard rules guarantee annual_inc > 0.
    let ratios = DerivedRatios::from_input(input);
    let mut warnings = Vec::new();

    if ratios.loan_to_income > 0.50 {
        warnings.push(WarningCode::LoanToIncomeHigh);
    }
    if ratios.installment_to_income > 0.40 {
        warnings.push(WarningCode::InstallmentToIncomeHigh);
    }
    if input.dti > 60.0 {
        warnings.push(WarningCode::DtiHigh);
    }
    if input.credit_history_months < 12.0 {
        warnings.push(WarningCode::ShortCreditHistory);
    }

    ValidationOutcome::Accepted(warnings)
}

/// Every numeric field, paired with its wire name for error messages.
fn numeric_fields(input: &ApplicantInput) -> [(&'static str, f64); 10] {
    [
        ("grade_numeric", input.grade_numeric),
        ("int_rate", input.int_rate),
        ("inq_last_6mths", input.inq_last_6mths),
        ("revol_util", input.revol_util),
        ("installment", input.installment),
        ("dti", input.dti),
        ("open_acc", input.open_acc),
        ("loan_amnt", input.loan_amnt),
        ("annual_inc", input.annual_inc),
        ("credit_history_months", input.credit_history_months),
    ]
}

/// Format a dollar amount with thousands separators and no cents.
fn fmt_thousands(value: f64) -> String {
    let whole = value.round() as i64;
    let negative = whole < 0;
    let digits = whole.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}

/// Format a numeric field value, dropping a trailing ".0" for whole numbers.
fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
