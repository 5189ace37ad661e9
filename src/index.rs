// src/index.rs
//! Output projections over the sorted record list.
//!
//! Both shapes serialize straight to JSON with `serde_json`:
//! - **autocomplete**: `{"MNEMONIC": {"_": "page-id", "*": "tooltip"}, …}`
//! - **full**: `[{"id", "variants", "variant_descriptions", "text", "href"}, …]`

use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::config::consts::{BASE_URL, DOC_EXT};
use crate::core::sanitize::truncate_tooltip;
use crate::instruction::Instruction;

/// Characters left as-is in page names: unreserved plus `/`.
const NAME_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Lower-cased record name.
    #[serde(rename = "_")]
    pub canonical_id: String,
    #[serde(rename = "*")]
    pub tooltip: String,
}

/// Upper-cased name or variant → completion. Insertion order is kept.
pub type Autocomplete = IndexMap<String, Completion>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub id: String,
    pub variants: Vec<String>,
    pub variant_descriptions: IndexMap<String, String>,
    pub text: String,
    pub href: String,
}

/// Canonical reference URL for a record name.
pub fn href_for(name: &str) -> String {
    let encoded = utf8_percent_encode(name, NAME_SAFE).to_string();
    join!(BASE_URL, &encoded, ".", DOC_EXT)
}

/// Build the autocomplete map.
///
/// Each record contributes its own name, then each of its variants. Later
/// entries overwrite earlier ones with the same key, so a variant claimed by
/// two records resolves to the one later in `records` order.
pub fn autocomplete(records: &[Instruction]) -> Autocomplete {
    let mut out = Autocomplete::new();
    for record in records {
        let id = record.name.to_lowercase();
        out.insert(
            record.name.to_uppercase(),
            Completion { canonical_id: id.clone(), tooltip: record.tooltip.clone() },
        );
        for variant in &record.variants {
            let tooltip = match record.description_of(variant) {
                Some(desc) => s!(desc),
                None => truncate_tooltip(&record.tooltip),
            };
            out.insert(variant.to_uppercase(), Completion { canonical_id: id.clone(), tooltip });
        }
    }
    out
}

pub fn reference(record: &Instruction) -> Reference {
    Reference {
        id: record.name.to_lowercase(),
        variants: record.variants.iter().cloned().collect(),
        variant_descriptions: record.variant_descriptions.clone(),
        text: record.body.clone(),
        href: href_for(&record.name),
    }
}

/// Build the full reference list, one entry per record, in order.
pub fn full(records: &[Instruction]) -> Vec<Reference> {
    records.iter().map(reference).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_percent_encodes_the_name() {
        assert_eq!(href_for("ADDPS"), "https://www.felixcloutier.com/x86/ADDPS.html");
        assert_eq!(
            href_for("MOVD:MOVQ"),
            "https://www.felixcloutier.com/x86/MOVD%3AMOVQ.html"
        );
        assert_eq!(href_for("MOV-1"), "https://www.felixcloutier.com/x86/MOV-1.html");
        assert_eq!(href_for("A B"), "https://www.felixcloutier.com/x86/A%20B.html");
    }

    #[test]
    fn completion_serializes_with_short_keys() {
        let c = Completion { canonical_id: s!("addps"), tooltip: s!("Add") };
        assert_eq!(serde_json::to_string(&c).unwrap(), r#"{"_":"addps","*":"Add"}"#);
    }
}
