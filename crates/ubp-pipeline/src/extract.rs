//! Extraction stage
//!
//! One bounded HTTP GET against the configured endpoint. Transport errors,
//! timeouts, non-2xx statuses, and unparsable bodies all surface as `Err`;
//! the runner maps any of them to the no-data abort path. An `Ok` with an
//! empty vector means the upstream genuinely returned zero users.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::model::RawUser;
use std::time::Duration;
use tracing::info;

/// Fetch the raw user list from the source API
pub async fn extract(config: &PipelineConfig) -> Result<Vec<RawUser>> {
    info!(url = %config.api_url, "Calling source API");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let response = client
        .get(&config.api_url)
        .send()
        .await?
        .error_for_status()?;

    let body = response.text().await?;
    let users: Vec<RawUser> = serde_json::from_str(&body)?;

    info!(count = users.len(), "Fetched raw user records");
    Ok(users)
}
