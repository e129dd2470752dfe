//! HTTP fetcher implementation
//!
//! This module issues the single GET request for the status page:
//! - Building the HTTP client with the configured timeout
//! - Attaching the identifying user agent
//! - Rejecting any response that is not `200 OK`
//! - Aborting the request when the cancellation token fires

use crate::config::SourceConfig;
use crate::{FetchError, TransportCause};
use bytes::Bytes;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Builds an HTTP client for the status page
///
/// Redirects follow the client default. No timeout is set unless the
/// configuration provides one.
///
/// # Example
///
/// ```no_run
/// use colo_status::config::SourceConfig;
/// use colo_status::page::build_http_client;
///
/// let client = build_http_client(&SourceConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &SourceConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build()
}

/// Fetches a page and returns its body
///
/// # Errors
///
/// | Condition | Error |
/// |-----------|-------|
/// | Invalid request, network/DNS/TLS failure, timeout | `Transport` |
/// | Token cancelled before the body is read | `Transport` (`Cancelled`) |
/// | Any status other than 200 | `UnexpectedStatus` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `user_agent` - Value of the `User-Agent` header
/// * `cancel` - Token that aborts the request when cancelled
pub async fn fetch_page(
    client: &Client,
    url: &str,
    user_agent: &str,
    cancel: &CancellationToken,
) -> Result<Bytes, FetchError> {
    let transport = |source: TransportCause| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let request = client
        .get(url)
        .header(USER_AGENT, user_agent)
        .build()
        .map_err(|e| transport(e.into()))?;

    debug!("Fetching {}", url);

    let response = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(transport(TransportCause::Cancelled)),
        result = client.execute(request) => result.map_err(|e| transport(e.into()))?,
    };

    let status = response.status();
    debug!("Received {} from {}", status, url);

    if status != StatusCode::OK {
        return Err(FetchError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(transport(TransportCause::Cancelled)),
        body = response.bytes() => body.map_err(|e| transport(e.into())),
    }
}
