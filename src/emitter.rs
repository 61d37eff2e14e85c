// src/emitter.rs

//! Renders a [`ColorTable`] as C source.
//!
//! The output is consumed by the downstream build as-is, so the layout is
//! fixed: one row per entry with the quoted name left-justified in a
//! 24-column field, lower-case hex values, and a zero sentinel row.

use crate::config::NameMode;
use crate::table::ColorTable;
use std::io::{self, Write};

/// Width of the `"Name",` column.
pub const NAME_COLUMN_WIDTH: usize = 24;

/// Declaration of the row type, emitted ahead of the array in verbatim mode.
pub const STRUCT_DECLARATION: &str = "struct xcolor { const char *name; unsigned rgba; };";

pub const TABLE_HEADER: &str = "static struct xcolor xcolortab[] = {";
pub const TABLE_FOOTER: &str = "};";

/// Name field of the end-of-array row.
const SENTINEL_NAME: &str = "0,";

/// Quotes `name` as a C string literal.
pub fn c_string_literal(name: &str) -> String {
    let mut literal = String::with_capacity(name.len() + 2);
    literal.push('"');
    for c in name.chars() {
        if c == '"' || c == '\\' {
            literal.push('\\');
        }
        literal.push(c);
    }
    literal.push('"');
    literal
}

/// Formats one array row. `name_field` already carries its trailing comma.
pub fn format_row(name_field: &str, rgba: u32) -> String {
    format!(
        "    {{ {:<width$} 0x{:08x} }},",
        name_field,
        rgba,
        width = NAME_COLUMN_WIDTH
    )
}

/// Writes the complete table, including the sentinel row.
pub fn write_table<W: Write>(out: &mut W, table: &ColorTable) -> io::Result<()> {
    if table.mode() == NameMode::Verbatim {
        writeln!(out, "{}", STRUCT_DECLARATION)?;
        writeln!(out)?;
    }

    writeln!(out, "{}", TABLE_HEADER)?;
    for entry in table.entries() {
        let name_field = format!("{},", c_string_literal(&entry.name));
        writeln!(out, "{}", format_row(&name_field, entry.rgba))?;
    }
    writeln!(out, "{}", format_row(SENTINEL_NAME, 0))?;
    writeln!(out, "{}", TABLE_FOOTER)?;
    Ok(())
}
