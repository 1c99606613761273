// crates/core/src/artifacts.rs
//! Loading of the frozen binning/model artifacts.
//!
//! Artifacts come from JSON files in an artifact directory, or from the
//! embedded defaults when no directory is configured. Either way they are
//! loaded exactly once, at process start, and any failure is fatal: the
//! engine never serves with a partial artifact set.

use std::collections::BTreeMap;
use std::path::Path;

use crate::binning::{BinningArtifact, FeatureBins};
use crate::error::ArtifactError;
use crate::model::ModelArtifact;

/// File name of the binning artifact inside the artifact directory.
pub const BINNING_FILE: &str = "binning.json";
/// File name of the model artifact inside the artifact directory.
pub const MODEL_FILE: &str = "model.json";

/// Load both artifacts from `dir`.
///
/// Parsing only; structural validation (boundary monotonicity, feature
/// coverage) happens when the [`crate::ScoringEngine`] is constructed.
pub fn load_artifacts(dir: &Path) -> Result<(BinningArtifact, ModelArtifact), ArtifactError> {
    let binning: BinningArtifact = load_json(&dir.join(BINNING_FILE))?;
    let model: ModelArtifact = load_json(&dir.join(MODEL_FILE))?;
    Ok((binning, model))
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ArtifactError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|e| ArtifactError::Malformed {
        path: path.to_owned(),
        message: e.to_string(),
    })
}

/// Embedded default binning tables.
///
/// These are the frozen tables from the reference scorecard fit; they let
/// the binary run without an artifact directory and anchor the golden
/// regression tests.
pub fn default_binning() -> BinningArtifact {
    let mut features = BTreeMap::new();

    features.insert(
        "grade_numeric".into(),
        FeatureBins {
            boundaries: vec![2.0, 4.0, 5.0, 6.0],
            woe: vec![-0.9, -0.3, 0.2, 0.6, 1.0],
        },
    );
    features.insert(
        "int_rate".into(),
        FeatureBins {
            boundaries: vec![8.0, 12.0, 16.0, 20.0, 25.0],
            woe: vec![-1.0, -0.6, -0.2, 0.3, 0.7, 1.1],
        },
    );
    features.insert(
        "inq_last_6mths".into(),
        FeatureBins {
            boundaries: vec![1.0, 2.0, 4.0],
            woe: vec![-0.35, -0.1, 0.25, 0.7],
        },
    );
    features.insert(
        "revol_util".into(),
        FeatureBins {
            boundaries: vec![20.0, 40.0, 60.0, 80.0],
            woe: vec![-0.5, -0.25, 0.0, 0.3, 0.65],
        },
    );
    features.insert(
        "dti".into(),
        FeatureBins {
            boundaries: vec![10.0, 20.0, 30.0, 40.0],
            woe: vec![-0.55, -0.3, 0.0, 0.3, 0.6],
        },
    );
    features.insert(
        "credit_history_months".into(),
        FeatureBins {
            boundaries: vec![24.0, 60.0, 120.0, 240.0],
            woe: vec![0.6, 0.25, -0.1, -0.45, -0.7],
        },
    );

    BinningArtifact { features }
}

/// Embedded default model, matching [`default_binning`].
pub fn default_model() -> ModelArtifact {
    let weights = BTreeMap::from([
        ("grade_numeric".to_string(), 0.9),
        ("int_rate".to_string(), 1.1),
        ("inq_last_6mths".to_string(), 0.6),
        ("revol_util".to_string(), 0.8),
        ("dti".to_string(), 0.7),
        ("credit_history_months".to_string(), 0.85),
    ]);

    ModelArtifact {
        intercept: -0.10,
        weights,
        selected_features: vec![
            "grade_numeric".to_string(),
            "int_rate".to_string(),
            "inq_last_6mths".to_string(),
            "revol_util".to_string(),
            "dti".to_string(),
            "credit_history_months".to_string(),
        ],
        factor: 72.0,
        offset: 480.0,
    }
}
