// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use lendscore_core::ScoringEngine;
use lendscore_db::Database;

/// Shared application state accessible from all route handlers.
///
/// The engine is immutable after startup, so handlers share it without
/// locking; only the database pool handles concurrent access internally.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Database handle for prediction history.
    pub db: Database,
    /// Validated scoring engine over the frozen artifacts.
    pub engine: Arc<ScoringEngine>,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(db: Database, engine: ScoringEngine) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            db,
            engine: Arc::new(engine),
        })
    }

    /// Seconds since the server started.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_creation() {
        let db = Database::new_in_memory().await.expect("in-memory DB");
        let state = AppState::new(db, ScoringEngine::with_defaults());
        assert!(state.uptime_secs() < 5);
    }
}
