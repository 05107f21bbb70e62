// crates/countries-core/src/loader/http.rs
#![cfg(feature = "fetch")]

use super::parse_countries;
use crate::config::SourceConfig;
use crate::error::{Result, SourceError};
use crate::model::Country;
use tracing::debug;

/// One GET to the configured endpoint. No headers, no parameters, no retry.
///
/// In the browser this goes through `fetch`; on native targets it needs a
/// Tokio runtime. `timeout_secs` is not applied here.
pub async fn fetch_countries(
    client: &reqwest::Client,
    config: &SourceConfig,
) -> Result<Vec<Country>> {
    debug!(endpoint = %config.endpoint, "fetching country list");
    let response = client.get(&config.endpoint).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    parse_countries(body.as_ref())
}

/// Blocking variant for the CLI. Honours `timeout_secs`; without it the
/// request may wait forever.
#[cfg(all(feature = "blocking", not(target_arch = "wasm32")))]
pub fn fetch_countries_blocking(config: &SourceConfig) -> Result<Vec<Country>> {
    use std::time::Duration;

    debug!(endpoint = %config.endpoint, timeout_secs = ?config.timeout_secs, "fetching country list");
    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout_secs.map(Duration::from_secs))
        .build()?;

    let response = client.get(&config.endpoint).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }

    let body = response.bytes()?;
    parse_countries(body.as_ref())
}
