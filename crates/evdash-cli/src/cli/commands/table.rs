//! Shared table rendering for command output.

use comfy_table::{Cell, ContentArrangement, Table};

/// Widest table printed when the terminal width is unknown.
const DEFAULT_WIDTH: u16 = 120;

pub fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<Cell>,
{
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if table.width().is_none() {
        table.set_width(DEFAULT_WIDTH);
    }
    table.set_header(header);
    table
}
