// crates/core/src/lib.rs
//! Scoring decision engine for the lendscore service.
//!
//! Pure pipeline: validation → WoE encoding → linear scoring → scorecard
//! points → risk override → classification → explanation. The only inputs
//! are the applicant fields and the frozen artifacts loaded at startup;
//! every invocation is a deterministic function of those.

pub mod artifacts;
pub mod binning;
pub mod engine;
pub mod error;
pub mod explain;
pub mod model;
pub mod risk;
pub mod scorecard;
pub mod scorer;
pub mod types;
pub mod validator;

pub use artifacts::{default_binning, default_model, load_artifacts};
pub use binning::BinningArtifact;
pub use engine::ScoringEngine;
pub use error::ArtifactError;
pub use model::ModelArtifact;
pub use types::{
    ApplicantInput, DerivedRatios, RejectionReport, RiskLevel, ScoringResult, WarningCode,
};
pub use validator::{validate, ValidationOutcome};
