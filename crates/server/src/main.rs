// crates/server/src/main.rs
//! Lendscore server binary.
//!
//! Loads the scoring artifacts, opens the prediction database, and serves
//! the REST API. Artifact loading is fail-fast: a server that starts is a
//! server with a valid engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use lendscore_core::{load_artifacts, ScoringEngine};
use lendscore_db::Database;
use lendscore_server::{create_app, AppState};
use tracing_subscriber::EnvFilter;

/// Default port for the server.
const DEFAULT_PORT: u16 = 8000;

/// Get the server port from environment or use default.
fn get_port() -> u16 {
    std::env::var("LENDSCORE_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Build the scoring engine.
///
/// With `LENDSCORE_ARTIFACT_DIR` set, loads `binning.json` and `model.json`
/// from that directory and refuses to start on any inconsistency.
/// Otherwise the embedded default artifacts are used.
fn build_engine() -> Result<ScoringEngine> {
    match std::env::var("LENDSCORE_ARTIFACT_DIR") {
        Ok(dir) => {
            let dir = PathBuf::from(dir);
            let (binning, model) = load_artifacts(&dir)
                .with_context(|| format!("loading artifacts from {}", dir.display()))?;
            let engine = ScoringEngine::new(binning, model)
                .context("artifact set failed validation")?;
            tracing::info!(artifact_dir = %dir.display(), "Loaded scoring artifacts");
            Ok(engine)
        }
        Err(_) => {
            tracing::info!("Using embedded default scoring artifacts");
            Ok(ScoringEngine::with_defaults())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    eprintln!("\nlendscore v{}\n", env!("CARGO_PKG_VERSION"));

    let engine = build_engine()?;

    let db = match std::env::var("LENDSCORE_DB") {
        Ok(path) => Database::new(std::path::Path::new(&path)).await?,
        Err(_) => Database::open_default().await?,
    };

    let state = AppState::new(db, engine);
    let app = create_app(state);

    let port = get_port();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");
    eprintln!("  -> http://localhost:{port}\n");

    axum::serve(listener, app).await?;

    Ok(())
}
