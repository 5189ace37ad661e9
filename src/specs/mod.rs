// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **page-level scraping specifications** for the x86
//! reference. It encodes *where the ground truth lives in a page* and *how to
//! extract it robustly* from hand-authored, inconsistent HTML.
//!
//! ## What lives here
//! - **Mnemonic extraction** (`mnemonic`): strip encoding noise from an
//!   opcode cell and take the uppercase mnemonic.
//! - **Table decoding** (`table`): headered tables and single-row labeled
//!   tables, tried in a fixed priority order.
//! - **Page parsing** (`document`): first table → variants, `#description`
//!   → tooltip and body, with link hardening.
//!
//! ## What does **not** live here
//! - **Ignore lists, duplicates, patches**: `config::curation` and `patch`.
//! - **Corpus walking, collision reports, self-test**: `scrape`.
//! - **Output shapes**: `index`.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::assemble → specs::document::parse
//!                           ↘ specs::table::read_table → specs::mnemonic::extract_mnemonic
//!        patch::apply (outside of specs)
//! ```
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline HTML fixtures.
//! - Keep extraction resilient to whitespace and harmless markup noise.
pub mod document;
pub mod mnemonic;
pub mod table;
