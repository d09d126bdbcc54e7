use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use super::AppState;
use crate::ingest::RunReport;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Whether the service is running
    pub healthy: bool,
    /// Report of the most recent successful ingestion, if any
    pub last_run: Option<RunReport>,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service health status", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let last_run = state.last_run.read().await.clone();
    Json(HealthResponse {
        healthy: true,
        last_run,
    })
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(health_check)).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::load::{LoadSummary, TableCount};
    use chrono::Utc;

    #[test]
    fn health_payload_serializes_last_run() {
        let response = HealthResponse {
            healthy: true,
            last_run: Some(RunReport {
                finished_at: Utc::now(),
                summary: LoadSummary {
                    tables: vec![TableCount {
                        table: "agency".to_string(),
                        rows: 1,
                    }],
                    skipped_files: vec!["calendar.txt".to_string()],
                },
            }),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["healthy"], true);
        assert_eq!(value["last_run"]["summary"]["tables"][0]["table"], "agency");
        assert_eq!(value["last_run"]["summary"]["tables"][0]["rows"], 1);
        assert_eq!(
            value["last_run"]["summary"]["skipped_files"][0],
            "calendar.txt"
        );
    }

    #[test]
    fn health_payload_before_first_run() {
        let response = HealthResponse {
            healthy: true,
            last_run: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["last_run"].is_null());
    }
}
