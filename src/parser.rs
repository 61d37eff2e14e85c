// src/parser.rs

//! Line parser and name normalizer for the X11 `rgb.txt` format.
//!
//! Each data line holds three decimal channel values followed by a name that
//! may span several words:
//!
//! ```text
//! 105 105 105		dim gray
//! ```
//!
//! Header and comment lines (`! $Xorg: rgb.txt ...`) do not start with three
//! numbers and are rejected with a [`LineError`]; callers skip them.

use crate::color::Rgb;
use crate::config::NameMode;
use crate::table::ColorEntry;
use thiserror::Error;

/// Why a line could not be turned into a [`ColorEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("line has fewer than three channel fields")]
    MissingChannel,
    #[error("channel value '{0}' is not an integer in 0..=255")]
    InvalidChannel(String),
    #[error("line has no color name")]
    MissingName,
}

/// Upper-cases the first character of `word`, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl NameMode {
    /// Joins the words of a color name according to the mode.
    pub fn join_words(self, words: &[&str]) -> String {
        match self {
            NameMode::Normalize => words.iter().map(|w| capitalize(w)).collect(),
            NameMode::Verbatim => words.join(" "),
        }
    }
}

fn parse_channel(field: Option<&str>) -> Result<u8, LineError> {
    let field = field.ok_or(LineError::MissingChannel)?;
    field
        .parse::<u8>()
        .map_err(|_| LineError::InvalidChannel(field.to_string()))
}

/// Parses one `R G B name...` line into a table entry named according to `mode`.
pub fn parse_line(line: &str, mode: NameMode) -> Result<ColorEntry, LineError> {
    let mut fields = line.split_whitespace();
    let r = parse_channel(fields.next())?;
    let g = parse_channel(fields.next())?;
    let b = parse_channel(fields.next())?;

    let words: Vec<&str> = fields.collect();
    if words.is_empty() {
        return Err(LineError::MissingName);
    }

    Ok(ColorEntry {
        name: mode.join_words(&words),
        rgba: Rgb(r, g, b).to_rgba(),
    })
}
