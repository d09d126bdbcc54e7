use bytes::Bytes;
use tracing::info;

use super::error::IngestError;

/// Download the static feed into memory.
///
/// One GET per invocation, no retries and no conditional requests; any
/// transport error or non-success status is fatal for the run.
pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<Bytes, IngestError> {
    info!(url = %url, "Downloading GTFS feed");

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(IngestError::FetchStatus(response.status()));
    }

    let body = response.bytes().await?;
    info!(size_bytes = body.len(), "Downloaded GTFS feed");
    Ok(body)
}
