use super::traits::{OutputResult, Renderer};
use crate::StatusRecord;
use std::io::Write;

/// Prints `Name (Group): Status`, one record per line
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRenderer;

impl Renderer for ListRenderer {
    fn render(&self, records: &[StatusRecord], out: &mut dyn Write) -> OutputResult<()> {
        for record in records {
            writeln!(out, "{}", record)?;
        }
        Ok(())
    }
}
