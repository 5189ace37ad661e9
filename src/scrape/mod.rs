// src/scrape/mod.rs
mod assemble;
mod selftest;
mod source;

pub use assemble::{assemble, find_collisions, process, Assembly, Collision, Outcome, Skipped};
pub use selftest::{self_test, SelfTest};
pub use source::{Document, Source};
