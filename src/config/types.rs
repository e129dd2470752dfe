use serde::Deserialize;
use std::time::Duration;

/// Status page fetched when no URL is configured
pub const DEFAULT_STATUS_PAGE_URL: &str = "https://www.cloudflarestatus.com/";

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = "https://github.com/piger/cloudflare-colo-status";

/// Main configuration structure for colo-status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
}

/// Where and how the status page is fetched
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL of the status page
    pub url: String,

    /// Value of the User-Agent header
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Overall request timeout in seconds; no timeout when absent
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_STATUS_PAGE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

impl SourceConfig {
    /// Returns the configured request timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
