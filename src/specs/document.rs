// src/specs/document.rs
//! Scraping *spec* for one instruction reference page.
//!
//! Ground truth on a page:
//! - The **first `<table>`** lists the encodings; the opcode/instruction cell
//!   of each row names one variant and the Description column (when present)
//!   gives its short text.
//! - The **`#description` heading** is followed by the prose paragraphs that
//!   become the tooltip and body.
//!
//! The record name comes from the caller (page filename), never from content.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::consts::{
    BASE_URL, DESCRIPTION_COLUMN, DESCRIPTION_ID, MAX_DESC_PARAS, MIN_PARA_CHARS, OPCODE_COLUMNS,
};
use crate::config::Curation;
use crate::core::html::{outer_html, sel, text_of};
use crate::core::sanitize::is_blank;
use crate::error::SkipReason;
use crate::instruction::Instruction;
use crate::specs::mnemonic::extract_mnemonic;
use crate::specs::table::{read_table, Row};

static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table"));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!("#{DESCRIPTION_ID}")).unwrap_or_else(|e| panic!("description selector: {e}"))
});
static BASE: LazyLock<Url> = LazyLock::new(|| Url::parse(BASE_URL).expect("BASE_URL is a valid url"));

/// Parse one page into a record.
///
/// Fails with [`SkipReason::NoTable`] when the page has no table, and with
/// [`SkipReason::NoVariants`] when no row names a mnemonic and `id` is not on
/// the unparseable allowlist (those take their variants from the filename).
pub fn parse(id: &str, source: &str, curation: &Curation) -> Result<Instruction, SkipReason> {
    let doc = Html::parse_document(source);

    let Some(table) = doc.select(&TABLE).next() else {
        logw!("{id}: Failed to find table");
        return Err(SkipReason::NoTable);
    };

    let rows = read_table(table);
    let (mut variants, variant_descriptions) = collect_variants(&rows);

    if variants.is_empty() {
        if curation.is_unparseable(id) {
            logd!("{id}: variants taken from the filename");
            variants = id.split(':').map(|v| s!(v)).collect();
        } else {
            logw!("{id}: Failed to read instruction table");
            return Err(SkipReason::NoVariants);
        }
    }

    let paragraphs = description_paragraphs(&doc);
    let tooltip = paragraphs.first().map(|p| text_of(*p)).unwrap_or_default();
    let body: String = paragraphs
        .iter()
        .map(|p| outer_html(*p, Some(&BASE)))
        .collect();

    Ok(Instruction::new(id, variants, variant_descriptions, &tooltip, body.trim()))
}

/// Mnemonics named by the rows, plus their Description column text.
///
/// Opcode columns are tried in priority order; the first one whose cell
/// yields a mnemonic wins for that row.
pub fn collect_variants(rows: &[Row]) -> (BTreeSet<String>, IndexMap<String, String>) {
    let mut variants = BTreeSet::new();
    let mut descriptions = IndexMap::new();

    for row in rows {
        let found = OPCODE_COLUMNS
            .iter()
            .filter_map(|key| row.get(*key))
            .find_map(|cell| extract_mnemonic(cell));
        let Some(variant) = found else { continue };

        variants.insert(s!(variant));
        if let Some(desc) = row.get(DESCRIPTION_COLUMN) {
            descriptions.insert(s!(variant), desc.clone());
        }
    }
    (variants, descriptions)
}

/// Paragraphs following the `#description` heading.
///
/// Whitespace between siblings is ignored. The walk stops at the first
/// sibling with `MIN_PARA_CHARS` characters of text or fewer, or once
/// `MAX_DESC_PARAS` paragraphs are collected. Longer non-paragraph siblings
/// (tables, lists) are stepped over. No heading → no paragraphs.
pub fn description_paragraphs(doc: &Html) -> Vec<ElementRef<'_>> {
    let Some(heading) = doc.select(&DESCRIPTION).next() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for node in heading.next_siblings() {
        if out.len() == MAX_DESC_PARAS {
            break;
        }
        let (element, text) = match ElementRef::wrap(node) {
            Some(el) => (Some(el), text_of(el)),
            None => match node.value().as_text() {
                Some(t) if is_blank(t) => continue,
                Some(t) => (None, s!(&**t)),
                None => continue,
            },
        };
        if text.chars().count() <= MIN_PARA_CHARS {
            break;
        }
        if let Some(p) = element.filter(|el| el.value().name() == "p") {
            out.push(p);
        }
    }
    out
}
