// src/instruction.rs
use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::core::sanitize::trim_tooltip;

/// One instruction family, as documented by one reference page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Page filename without extension; never empty.
    pub name: String,
    /// Mnemonics documented on the page; never empty for an emitted record.
    pub variants: BTreeSet<String>,
    /// Short per-variant text from the table's Description column, in table order.
    pub variant_descriptions: IndexMap<String, String>,
    /// First description paragraph as plain text.
    pub tooltip: String,
    /// Up to `MAX_DESC_PARAS` description paragraphs as markup.
    pub body: String,
}

impl Instruction {
    /// Build a record. The tooltip loses surrounding whitespace and any
    /// trailing `:`, `,` or space.
    pub fn new(
        name: impl Into<String>,
        variants: BTreeSet<String>,
        variant_descriptions: IndexMap<String, String>,
        tooltip: &str,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            variants,
            variant_descriptions,
            tooltip: trim_tooltip(tooltip),
            body: body.into(),
        }
    }

    pub fn description_of(&self, variant: &str) -> Option<&str> {
        self.variant_descriptions.get(variant).map(String::as_str)
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instruction<{}>", self.name)
    }
}
