//! Status page module
//!
//! This module contains the two stages of a status check:
//! - Fetching the status page over HTTP
//! - Extracting component status records from the returned HTML

mod fetcher;
mod parser;
mod types;

pub use fetcher::{build_http_client, fetch_page};
pub use parser::{extract_statuses, parse_status_page, Extraction};
pub use types::StatusRecord;

use crate::config::SourceConfig;
use reqwest::Client;
use tokio_util::sync::CancellationToken;

/// Fetches the configured status page and extracts its status records
///
/// The response body is dropped before this function returns, whether or
/// not extraction succeeds.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `source` - URL and user agent of the status page
/// * `cancel` - Token that aborts the in-flight request when cancelled
///
/// # Returns
///
/// * `Ok(Extraction)` - Records found on the page, plus any containers
///   whose group name was missing
/// * `Err(StatusError)` - The fetch failed or the document was unreadable
pub async fn get_colo_status(
    client: &Client,
    source: &SourceConfig,
    cancel: &CancellationToken,
) -> crate::Result<Extraction> {
    let body = fetch_page(client, &source.url, &source.user_agent, cancel).await?;
    let extraction = extract_statuses(&body[..])?;
    Ok(extraction)
}
