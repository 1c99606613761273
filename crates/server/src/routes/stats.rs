// crates/server/src/routes/stats.rs
//! Aggregate prediction statistics endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use lendscore_db::StatsOverview;
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

/// Response for the stats endpoint: the history aggregates plus the
/// engine flag the monitoring side expects next to them.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub overview: StatsOverview,
    /// Always true once serving; startup is fail-fast on artifacts.
    pub model_loaded: bool,
}

/// GET /api/stats - Aggregate statistics over the prediction history.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<StatsResponse>> {
    let overview = state.db.stats_overview().await?;
    Ok(Json(StatsResponse {
        overview,
        model_loaded: true,
    }))
}

/// Create the stats routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(get_stats))
}
