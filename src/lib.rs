// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod index;
pub mod instruction;
pub mod patch;
pub mod progress;
pub mod scrape;
pub mod specs;

pub use config::Curation;
pub use error::{ScrapeError, SkipReason};
pub use instruction::Instruction;
pub use scrape::{assemble, Assembly, Document};
