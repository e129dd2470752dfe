use super::traits::{OutputResult, Renderer};
use crate::StatusRecord;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, Table};
use std::io::Write;

const HEADER: [&str; 3] = ["Name", "Status", "Group"];

/// Prints records as a Unicode box-drawing table with right-aligned columns
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

impl TableRenderer {
    /// Builds the table without writing it
    pub fn build(&self, records: &[StatusRecord]) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED).set_header(HEADER);

        for record in records {
            table.add_row([
                record.name.as_str(),
                record.status.as_str(),
                record.group.as_str(),
            ]);
        }

        for column in table.column_iter_mut() {
            column.set_cell_alignment(CellAlignment::Right);
        }

        table
    }
}

impl Renderer for TableRenderer {
    fn render(&self, records: &[StatusRecord], out: &mut dyn Write) -> OutputResult<()> {
        writeln!(out, "{}", self.build(records))?;
        Ok(())
    }
}
