// src/config/mod.rs

pub mod consts;
pub mod curation;
pub mod options;

pub use curation::{Curation, Patch};
pub use options::{Emit, ScrapeOptions};
