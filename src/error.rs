// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a document produced no record. Recovered per document; the run goes on.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("failed to find table")]
    NoTable,
    #[error("failed to read instruction table")]
    NoVariants,
    #[error("could not read document: {0}")]
    Unreadable(#[from] io::Error),
}

impl SkipReason {
    /// `NoTable` and `NoVariants` are expected data problems; the rest are surprises.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, SkipReason::Unreadable(_))
    }
}

/// Corpus-level failures handed back to the caller.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("input folder {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("could not scan input folder: {0}")]
    Scan(#[from] walkdir::Error),
    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not write output: {0}")]
    Io(#[from] io::Error),
    #[error("self-test failed: {} record(s) have no source document", .0.len())]
    SelfTest(Vec<String>),
}
