// crates/server/src/routes/predictions.rs
//! Prediction history endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use lendscore_db::PredictionRow;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

/// Query parameters for the recent-predictions endpoint.
#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub limit: Option<i64>,
}

/// GET /api/predictions/recent?limit=N - Most recent predictions, newest first.
///
/// `limit` defaults to 20 and is clamped to [1, 100].
pub async fn recent_predictions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecentParams>,
) -> ApiResult<Json<Vec<PredictionRow>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let rows = state.db.recent_predictions(limit).await?;
    Ok(Json(rows))
}

/// Create the predictions routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/predictions/recent", get(recent_predictions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_clamping() {
        assert_eq!(None.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT), 20);
        assert_eq!(Some(500).unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT), 100);
        assert_eq!(Some(0).unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT), 1);
        assert_eq!(Some(-5).unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT), 1);
    }
}
