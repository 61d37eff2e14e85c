// src/table.rs

//! The color table and the stages that build it.
//!
//! A table is produced by an explicit sequence of passes over a flat
//! `Vec<ColorEntry>`: parse (which also names the entry), dedupe, filter and
//! sort. Verbatim mode stops after parsing.

use crate::config::{GeneratorConfig, NameMode};
use crate::parser::parse_line;
use log::{debug, trace};
use std::collections::HashSet;

/// One row of `xcolortab[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: String,
    /// Packed `R | G << 8 | B << 16 | 0xFF << 24`.
    pub rgba: u32,
}

/// Parses every line, skipping the ones that are not color definitions.
pub fn parse_entries<'a, I>(lines: I, mode: NameMode) -> Vec<ColorEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(idx, line)| match parse_line(line, mode) {
            Ok(entry) => Some(entry),
            Err(e) => {
                trace!("Skipping line {}: {}", idx + 1, e);
                None
            }
        })
        .collect()
}

/// Keeps the first entry for each name, preserving input order.
pub fn dedupe(entries: Vec<ColorEntry>) -> Vec<ColorEntry> {
    let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|entry| {
            let first = seen.insert(entry.name.clone());
            if !first {
                debug!("Dropping duplicate color name '{}'", entry.name);
            }
            first
        })
        .collect()
}

/// True for names the `--filter` flag removes: more than one upper-case
/// character, or a trailing digit.
pub fn is_excluded_by_filter(name: &str) -> bool {
    let uppercase = name.chars().filter(|c| c.is_uppercase()).count();
    let trailing_digit = name.chars().last().is_some_and(|c| c.is_ascii_digit());
    uppercase > 1 || trailing_digit
}

/// Removes every entry matched by [`is_excluded_by_filter`].
pub fn apply_filter(entries: Vec<ColorEntry>) -> Vec<ColorEntry> {
    entries
        .into_iter()
        .filter(|entry| {
            let excluded = is_excluded_by_filter(&entry.name);
            if excluded {
                trace!("Filtered out '{}'", entry.name);
            }
            !excluded
        })
        .collect()
}

/// Sorts by name, comparing code points (case-sensitive).
pub fn sort_by_name(entries: &mut [ColorEntry]) {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
}

/// The finished, emission-ready list of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    mode: NameMode,
    entries: Vec<ColorEntry>,
}

impl ColorTable {
    /// Runs the full pipeline over the lines of a database.
    pub fn build<'a, I>(lines: I, config: &GeneratorConfig) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let parsed = parse_entries(lines, config.mode);
        debug!("Parsed {} color definitions", parsed.len());

        let entries = match config.mode {
            NameMode::Verbatim => parsed,
            NameMode::Normalize => {
                let mut entries = dedupe(parsed);
                if config.filter {
                    entries = apply_filter(entries);
                }
                sort_by_name(&mut entries);
                entries
            }
        };

        ColorTable {
            mode: config.mode,
            entries,
        }
    }

    pub fn mode(&self) -> NameMode {
        self.mode
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests;
