//! GTFS static feed ingestion pipeline.
//!
//! This module handles:
//! - Downloading the feed archive from the upstream endpoint
//! - Opening it in memory and reading its member CSVs
//! - Reconciling and coercing each member against the table registry
//! - Replacing the database contents in a single transaction

pub mod archive;
pub mod error;
pub mod fetch;
pub mod load;
pub mod tables;
pub mod transform;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;
use utoipa::ToSchema;

use archive::FeedArchive;
use error::IngestError;
use load::LoadSummary;

/// The target schema, applied verbatim at the start of every run.
const SCHEMA_SQL: &str = include_str!("../../schema.sql");

/// Report of one completed ingestion run.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RunReport {
    pub finished_at: DateTime<Utc>,
    pub summary: LoadSummary,
}

/// Run the full pipeline: fetch, open, transform and load.
pub async fn run(
    client: &reqwest::Client,
    pool: &PgPool,
    feed_url: &str,
) -> Result<RunReport, IngestError> {
    info!("Starting GTFS ingestion");

    let body = fetch::fetch_feed(client, feed_url).await?;
    let mut archive = FeedArchive::open(body)?;
    info!(members = ?archive.member_names(), "Opened feed archive");

    let summary = load::replace_feed(pool, &mut archive, SCHEMA_SQL).await?;
    info!("Ingestion complete");

    Ok(RunReport {
        finished_at: Utc::now(),
        summary,
    })
}
