// src/config/options.rs
use std::path::PathBuf;

use super::consts::DEFAULT_INPUT_DIR;

/// A projection handed to the serializer after a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Emit {
    /// Mnemonic → tooltip map.
    Autocomplete,
    /// Full reference list.
    Full,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Folder that holds the `.html` reference pages (searched recursively).
    pub input_dir: PathBuf,
    /// Projections to print, in order. Empty: assemble and self-test only.
    pub emit: Vec<Emit>,
    /// 0 = warnings only, 1 = info, 2 = debug, 3+ = trace.
    pub verbosity: u8,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            emit: Vec::new(),
            verbosity: 0,
        }
    }
}
