// crates/core/src/engine.rs
//! The scoring engine: frozen artifacts plus the full decision pipeline.

use crate::binning::BinningArtifact;
use crate::error::ArtifactError;
use crate::explain::explain;
use crate::model::ModelArtifact;
use crate::risk::{apply_overrides, classify};
use crate::scorecard::to_points;
use crate::scorer::score;
use crate::types::{ApplicantInput, RejectionReport, ScoringResult};
use crate::validator::{validate, ValidationOutcome};

/// Stateless scoring engine over the frozen artifacts.
///
/// Construction validates the artifact set once; after that every call to
/// [`ScoringEngine::score_applicant`] is a pure function of its input, so
/// the engine can be shared read-only across concurrent requests without
/// locking.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    binning: BinningArtifact,
    model: ModelArtifact,
}

impl ScoringEngine {
    /// Build an engine, failing fast on an inconsistent artifact set.
    pub fn new(binning: BinningArtifact, model: ModelArtifact) -> Result<Self, ArtifactError> {
        binning.validate()?;
        model.validate(&binning)?;
        Ok(Self { binning, model })
    }

    /// Engine with the embedded default artifacts.
    pub fn with_defaults() -> Self {
        // The embedded artifacts are validated by tests; constructing from
        // them cannot fail at runtime.
        Self {
            binning: crate::artifacts::default_binning(),
            model: crate::artifacts::default_model(),
        }
    }

    /// Score one applicant end to end.
    ///
    /// A hard rejection is a distinct failure path: the `Err` branch
    /// carries the per-rule reasons and no [`ScoringResult`] is produced.
    pub fn score_applicant(
        &self,
        input: &ApplicantInput,
    ) -> Result<ScoringResult, RejectionReport> {
        let warnings = match validate(input) {
            ValidationOutcome::Rejected(errors) => {
                return Err(RejectionReport {
                    applicant_id: input.applicant_id.clone(),
                    errors,
                });
            }
            ValidationOutcome::Accepted(warnings) => warnings,
        };

        let model_score = score(input, &self.binning, &self.model);
        let probability = model_score.probability();
        let points = to_points(model_score.log_odds, self.model.factor, self.model.offset);

        let (final_points, final_probability) = apply_overrides(points, probability, &warnings);
        let risk_level = classify(final_points);
        let explanation = explain(&model_score.contributions, &warnings, risk_level);

        tracing::debug!(
            applicant_id = %input.applicant_id,
            log_odds = model_score.log_odds,
            raw_points = points,
            final_points,
            risk_level = %risk_level,
            warning_count = warnings.len(),
            "Scored applicant"
        );

        Ok(ScoringResult {
            applicant_id: input.applicant_id.clone(),
            credit_score: final_points,
            default_probability: final_probability,
            risk_level,
            explanation,
            warnings,
        })
    }
}
