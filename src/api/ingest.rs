use axum::{extract::State, http::StatusCode, routing::post, Router};
use tracing::error;

use super::AppState;
use crate::ingest;

/// Trigger a full feed ingestion run.
///
/// Downloads the configured feed, replaces the database contents in one
/// transaction and records the run for the health endpoint. Overlapping
/// triggers are not guarded against; the database's transaction isolation
/// is the only defense.
#[utoipa::path(
    post,
    path = "/api/ingest",
    responses(
        (status = 200, description = "Feed ingested and committed", body = String, content_type = "text/plain"),
        (status = 500, description = "Ingestion failed, database rolled back to its prior contents", body = String, content_type = "text/plain")
    ),
    tag = "ingest"
)]
pub async fn trigger_ingest(State(state): State<AppState>) -> (StatusCode, String) {
    match ingest::run(&state.client, &state.pool, &state.feed_url).await {
        Ok(report) => {
            let mut last_run = state.last_run.write().await;
            *last_run = Some(report);
            (StatusCode::OK, "GTFS ingestion successful".to_string())
        }
        Err(e) => {
            error!(error = %e, "Ingestion failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {e}"))
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/", post(trigger_ingest)).with_state(state)
}
