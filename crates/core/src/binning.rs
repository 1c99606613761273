// crates/core/src/binning.rs
//! Fitted monotonic binning tables for Weight-of-Evidence encoding.
//!
//! One table per feature. Interior boundaries split the real line into
//! closed-open bins `[b_{i-1}, b_i)`; the terminal bins are open-ended, so
//! every value is binned; out-of-range inputs clamp to the nearest
//! terminal bin instead of failing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;

/// Binning table for a single feature: `boundaries.len() + 1` bins,
/// each with one WoE value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureBins {
    /// Interior bin boundaries, strictly ascending.
    pub boundaries: Vec<f64>,
    /// WoE value per bin, ordered low bin to high bin.
    pub woe: Vec<f64>,
}

impl FeatureBins {
    /// Locate the bin containing `value` and return its WoE.
    ///
    /// A value exactly on a boundary belongs to the bin that starts there
    /// (closed lower edge), so boundary lookups are stable across calls.
    pub fn encode(&self, value: f64) -> f64 {
        let idx = self.boundaries.partition_point(|&b| b <= value);
        self.woe[idx]
    }

    fn validate(&self, feature: &str) -> Result<(), ArtifactError> {
        if self.woe.len() != self.boundaries.len() + 1 {
            return Err(ArtifactError::BinCountMismatch {
                feature: feature.to_string(),
                boundaries: self.boundaries.len(),
                woe_values: self.woe.len(),
                expected: self.boundaries.len() + 1,
            });
        }
        let ascending = self.boundaries.windows(2).all(|w| w[0] < w[1]);
        if !ascending {
            return Err(ArtifactError::NonMonotonicBoundaries {
                feature: feature.to_string(),
            });
        }
        Ok(())
    }
}

/// The frozen binning artifact: one table per feature.
///
/// Loaded once at process start and shared read-only; never mutated at
/// runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinningArtifact {
    /// BTreeMap keeps feature iteration order deterministic.
    pub features: BTreeMap<String, FeatureBins>,
}

impl BinningArtifact {
    /// Validate every table: bin counts consistent, boundaries ascending.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        for (feature, bins) in &self.features {
            bins.validate(feature)?;
        }
        Ok(())
    }

    /// Encode one raw feature value to its WoE, or `None` if the feature
    /// has no table.
    pub fn encode(&self, feature: &str, value: f64) -> Option<f64> {
        self.features.get(feature).map(|bins| bins.encode(value))
    }
}
