// crates/core/src/model.rs
//! The frozen linear model artifact.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::binning::BinningArtifact;
use crate::error::ArtifactError;

/// Frozen trained model: intercept, per-feature weights, the selected
/// feature subset, and the scorecard point scaling.
///
/// Same lifecycle as [`BinningArtifact`]: loaded once at startup, shared
/// read-only, never rebound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Logistic regression intercept (log-odds at zero WoE).
    pub intercept: f64,
    /// Coefficient per selected feature, applied to the WoE value.
    pub weights: BTreeMap<String, f64>,
    /// Features the model was trained on; scoring uses exactly these.
    pub selected_features: Vec<String>,
    /// Points per unit of log-odds.
    pub factor: f64,
    /// Point offset of the scorecard transform.
    pub offset: f64,
}

impl ModelArtifact {
    /// Validate internal consistency and coverage against the binning
    /// artifact. Fails fast: a selected feature without a weight or a
    /// binning table would make scoring undefined.
    pub fn validate(&self, binning: &BinningArtifact) -> Result<(), ArtifactError> {
        if self.factor <= 0.0 {
            return Err(ArtifactError::InvalidFactor {
                factor: self.factor,
            });
        }
        for feature in &self.selected_features {
            if !self.weights.contains_key(feature) {
                return Err(ArtifactError::MissingWeight {
                    feature: feature.clone(),
                });
            }
            if !binning.features.contains_key(feature) {
                return Err(ArtifactError::MissingBinningTable {
                    feature: feature.clone(),
                });
            }
        }
        Ok(())
    }
}
