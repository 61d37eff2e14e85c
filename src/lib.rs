// src/lib.rs

//! Generator for the `xcolortab[]` C table of X11 color names.
//!
//! Reads the `rgb.txt` color database and prints a static array of
//! `{ name, rgba }` rows terminated by a zero sentinel, ready to be included
//! by the C side of the project.

pub mod color;
pub mod config;
pub mod emitter;
pub mod parser;
pub mod table;

pub use config::{GeneratorConfig, NameMode};
pub use table::{ColorEntry, ColorTable};

use anyhow::Context;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// Builds the table from `input` and writes it to `out`.
///
/// The whole input is read before anything is written, so a read error
/// leaves `out` untouched. Returns the number of color rows written
/// (the sentinel is not counted).
pub fn generate<R, W>(input: R, config: &GeneratorConfig, mut out: W) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let lines = input
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context("Failed to read color database")?;
    debug!("Read {} lines", lines.len());

    let table = ColorTable::build(lines.iter().map(String::as_str), config);
    emitter::write_table(&mut out, &table).context("Failed to write color table")?;
    out.flush().context("Failed to flush color table")?;
    Ok(table.len())
}

/// Reads `config.input_path` and prints the table to stdout.
pub fn run(config: &GeneratorConfig) -> anyhow::Result<usize> {
    let file = File::open(&config.input_path).with_context(|| {
        format!(
            "Failed to open color database {}",
            config.input_path.display()
        )
    })?;
    let stdout = io::stdout();
    generate(BufReader::new(file), config, stdout.lock())
}
