// crates/core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the frozen artifacts.
///
/// Any of these is fatal at startup: the engine must not serve requests
/// with a partial or inconsistent artifact set.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("IO error reading artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed artifact {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Bin boundaries for feature '{feature}' are not strictly ascending")]
    NonMonotonicBoundaries { feature: String },

    #[error("Feature '{feature}' has {boundaries} boundaries but {woe_values} WoE values (expected {expected})")]
    BinCountMismatch {
        feature: String,
        boundaries: usize,
        woe_values: usize,
        expected: usize,
    },

    #[error("Selected feature '{feature}' has no binning table")]
    MissingBinningTable { feature: String },

    #[error("Selected feature '{feature}' has no model weight")]
    MissingWeight { feature: String },

    #[error("Scorecard factor must be positive, got {factor}")]
    InvalidFactor { factor: f64 },
}

impl ArtifactError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
