//! colo-status: data center status from a public status page
//!
//! This crate fetches a status page, extracts the status of every
//! non-operational component (a data center "colo" on the Cloudflare status
//! page) and renders the result as a list or a table.

pub mod config;
pub mod output;
pub mod page;

use thiserror::Error;

/// Main error type for colo-status operations
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    MissingGroups(#[from] MissingGroupNames),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while fetching the status page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportCause,
    },

    #[error("unexpected status code while fetching URL {url}: {status}")]
    UnexpectedStatus { url: String, status: u16 },
}

/// Underlying cause of a transport failure
#[derive(Debug, Error)]
pub enum TransportCause {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,
}

/// Errors raised while turning a document into status records
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("malformed document: {reason}")]
    MalformedDocument { reason: String },

    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// A component container whose group label was empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("empty group name in component container #{container_index}")]
pub struct MissingGroupName {
    /// Position of the container in document order (0 is the skipped summary)
    pub container_index: usize,
}

/// All group-name failures of one parse pass, joined into a single error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.0))]
pub struct MissingGroupNames(pub Vec<MissingGroupName>);

fn join_messages(errors: &[MissingGroupName]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias for colo-status operations
pub type Result<T> = std::result::Result<T, StatusError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use output::OutputFormat;
pub use page::{extract_statuses, fetch_page, get_colo_status, Extraction, StatusRecord};
