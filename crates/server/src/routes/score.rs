// crates/server/src/routes/score.rs
//! Credit scoring endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, routing::post, Json, Router};
use lendscore_core::{ApplicantInput, DerivedRatios, ScoringResult};
use lendscore_db::NewPrediction;

use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/credit/score - Score one loan application.
///
/// Hard rejections surface as 400 with the full list of reasons; accepted
/// applications return the complete scoring result. Every accepted result
/// is recorded in the prediction history, but a storage failure never
/// fails the scoring response itself.
pub async fn score_application(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ApplicantInput>,
) -> ApiResult<Json<ScoringResult>> {
    let started = Instant::now();

    let result = state.engine.score_applicant(&input)?;
    let response_time_ms = started.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(
        applicant_id = %result.applicant_id,
        credit_score = result.credit_score,
        risk_level = %result.risk_level,
        warning_count = result.warnings.len(),
        response_time_ms,
        "Application scored"
    );

    // Ratios are recomputed here, never taken from the request payload.
    let ratios = DerivedRatios::from_input(&input);
    let prediction = NewPrediction {
        result: &result,
        input: &input,
        ratios,
        response_time_ms,
    };
    if let Err(e) = state.db.insert_prediction(&prediction).await {
        tracing::warn!(
            applicant_id = %result.applicant_id,
            error = %e,
            "Failed to record prediction (non-fatal)"
        );
    }

    Ok(Json(result))
}

/// Create the scoring routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/credit/score", post(score_application))
}
