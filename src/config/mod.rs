//! Configuration module for colo-status
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a built-in default, so running without a
//! file targets the public Cloudflare status page.
//!
//! # Example
//!
//! ```no_run
//! use colo_status::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("colo-status.toml")).unwrap();
//! println!("Fetching status from: {}", config.source.url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, SourceConfig, DEFAULT_STATUS_PAGE_URL, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default};
pub use validation::validate;
