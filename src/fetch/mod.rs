// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::{Settings, USER_AGENT};
use crate::finals::{parse_finals, Dataset};
use crate::table::extract_tables;

/// HTTP client used for the startup fetch.
pub fn client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("building HTTP client")
}

/// GET `url` once and return the body. Non-2xx statuses are errors.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    debug!("Fetching text from {}", url);
    client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status {}", url))?
        .text()
        .await
        .with_context(|| format!("Reading text from {}", url))
}

/// Fetch the finals page and build the dataset from its results table.
#[instrument(level = "info", skip(client, settings), fields(url = %settings.source_url))]
pub async fn load_dataset(client: &Client, settings: &Settings) -> Result<Dataset> {
    let url = Url::parse(&settings.source_url)
        .with_context(|| format!("parsing source URL {}", settings.source_url))?;
    let html = fetch_page(client, &url).await?;
    info!(bytes = html.len(), "fetched finals page");

    let tables = extract_tables(&html);
    let table = settings
        .table
        .select(&tables)
        .with_context(|| format!("locating results table on {}", url))?;
    let finals = parse_finals(table).with_context(|| format!("parsing results table from {}", url))?;
    Dataset::from_finals(finals)
}
