//! Renderer trait and output errors

use crate::StatusRecord;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Writes status records to an output stream
///
/// Implementations must write records in the order given.
pub trait Renderer {
    fn render(&self, records: &[StatusRecord], out: &mut dyn Write) -> OutputResult<()>;
}
