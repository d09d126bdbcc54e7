pub mod health;
pub mod ingest;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::ingest::RunReport;

/// Report of the most recent successful run, shared with the health
/// endpoint. `None` until the first run completes.
pub type LastRunStore = Arc<RwLock<Option<RunReport>>>;

/// Shared handles passed to every API handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub client: reqwest::Client,
    pub feed_url: String,
    pub last_run: LastRunStore,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/ingest", ingest::router(state.clone()))
        .nest("/health", health::router(state))
}
