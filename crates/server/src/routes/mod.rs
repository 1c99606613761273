//! API route handlers for the lendscore server.

pub mod health;
pub mod predictions;
pub mod score;
pub mod stats;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - POST /api/credit/score - Score one loan application
/// - GET /api/health - Health check
/// - GET /api/stats - Aggregate prediction statistics
/// - GET /api/predictions/recent - Most recent predictions
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", score::router())
        .nest("/api", stats::router())
        .nest("/api", predictions::router())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendscore_core::ScoringEngine;

    #[tokio::test]
    async fn test_api_routes_creation() {
        let db = lendscore_db::Database::new_in_memory()
            .await
            .expect("in-memory DB");
        let state = AppState::new(db, ScoringEngine::with_defaults());
        let _router = api_routes(state);
    }
}
