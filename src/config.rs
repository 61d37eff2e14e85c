// src/config.rs

//! Run configuration for the table generator.
//!
//! There is no configuration file: the database path is fixed and the only
//! knob exposed on the command line is `--filter`. Library callers can still
//! build a [`GeneratorConfig`] by hand, e.g. to read a different database.

use log::debug;
use std::path::PathBuf;

/// Location of the X11 color-name database.
pub const RGB_TXT_PATH: &str = "/etc/X11/rgb.txt";

/// The only recognized command-line flag.
pub const FILTER_FLAG: &str = "--filter";

/// How multi-word color names are turned into table names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMode {
    /// Capitalize each word and concatenate (`dark slate gray` -> `DarkSlateGray`).
    /// Entries are deduplicated, optionally filtered, and sorted by name.
    #[default]
    Normalize,
    /// Keep the words as written, joined by single spaces.
    /// Entries keep their file order and duplicates are retained.
    Verbatim,
}

/// Everything a single generation pass needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path of the `rgb.txt` database to read.
    pub input_path: PathBuf,
    /// Name handling mode.
    pub mode: NameMode,
    /// Drop compound names and names ending in a digit. Normalize mode only.
    pub filter: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            input_path: PathBuf::from(RGB_TXT_PATH),
            mode: NameMode::default(),
            filter: false,
        }
    }
}

impl GeneratorConfig {
    /// Builds the configuration for `mode` from the process arguments
    /// (program name already stripped).
    ///
    /// Only the first argument is inspected, and only in
    /// [`NameMode::Normalize`]; anything else is ignored without error.
    pub fn from_args<I, S>(mode: NameMode, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let filter = match (mode, args.next()) {
            (NameMode::Normalize, Some(first)) if first.as_ref() == FILTER_FLAG => true,
            (_, Some(other)) => {
                debug!("Ignoring argument '{}'", other.as_ref());
                false
            }
            (_, None) => false,
        };

        GeneratorConfig {
            mode,
            filter,
            ..GeneratorConfig::default()
        }
    }
}
