//! Output module for rendering status records
//!
//! This module handles:
//! - Printing one line per record
//! - Printing a Unicode box-drawing table
//! - Selecting the renderer from the command line flag

mod list;
mod table;
mod traits;

pub use list::ListRenderer;
pub use table::TableRenderer;
pub use traits::{OutputError, OutputResult, Renderer};

use crate::page::Extraction;
use std::io::Write;

/// How status records are presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Name (Group): Status`, one record per line
    #[default]
    List,

    /// Name, Status and Group columns in a table
    Table,
}

impl OutputFormat {
    /// Chooses the format from the `--table` flag
    pub fn from_table_flag(table: bool) -> Self {
        if table {
            OutputFormat::Table
        } else {
            OutputFormat::List
        }
    }

    /// Returns the renderer for this format
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::List => Box::new(ListRenderer),
            OutputFormat::Table => Box::new(TableRenderer),
        }
    }
}

/// Renders the records of an extraction, then reports missing group names
///
/// Records from containers that had a group name are always written. If any
/// container was missing one, the joined error is returned after the output
/// has been flushed.
pub fn render_extraction(
    extraction: Extraction,
    format: OutputFormat,
    out: &mut dyn Write,
) -> crate::Result<()> {
    let (records, missing_groups) = extraction.into_parts();

    format.renderer().render(&records, out)?;
    out.flush()?;

    match missing_groups {
        Some(missing) => Err(missing.into()),
        None => Ok(()),
    }
}
