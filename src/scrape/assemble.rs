// src/scrape/assemble.rs
use std::collections::BTreeSet;

use crate::{
    config::Curation,
    error::SkipReason,
    instruction::Instruction,
    patch,
    progress::Progress,
    specs::document,
};

use super::Source;

/// What one page turned into.
#[derive(Debug)]
pub enum Outcome {
    Record(Instruction),
    /// On the ignore or duplicate list; never parsed.
    Excluded,
    Skipped(SkipReason),
}

#[derive(Debug)]
pub struct Skipped {
    pub id: String,
    pub reason: SkipReason,
}

/// Variants of `record` that an earlier record (in name order) already claimed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    pub record: String,
    pub variants: Vec<String>,
}

/// Result of one corpus pass.
#[derive(Debug, Default)]
pub struct Assembly {
    /// Sorted by name.
    pub records: Vec<Instruction>,
    pub excluded: Vec<String>,
    pub skipped: Vec<Skipped>,
    pub collisions: Vec<Collision>,
}

impl Assembly {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.collisions.is_empty()
    }
}

/// Parse and patch one page, honoring the exclusion lists.
pub fn process<S: Source + ?Sized>(source: &S, curation: &Curation) -> Outcome {
    let id = source.id();
    if curation.is_excluded(id) {
        return Outcome::Excluded;
    }
    let parsed = source
        .load()
        .and_then(|html| document::parse(id, &html, curation));
    match parsed {
        Ok(record) => Outcome::Record(patch::apply(record, curation)),
        Err(reason) => Outcome::Skipped(reason),
    }
}

/// Turn a set of pages into the sorted record list.
///
/// A page that fails is logged and skipped; it never stops the pass.
/// Variant collisions are reported after sorting and do not remove records.
pub fn assemble<S: Source>(
    sources: &[S],
    curation: &Curation,
    mut progress: Option<&mut dyn Progress>,
) -> Assembly {
    logf!("Parsing instructions...");
    if let Some(p) = progress.as_deref_mut() {
        p.begin(sources.len());
    }

    let mut out = Assembly::default();
    for source in sources {
        let id = source.id();
        match process(source, curation) {
            Outcome::Record(record) => out.records.push(record),
            Outcome::Excluded => {
                logd!("{id}: excluded");
                out.excluded.push(s!(id));
            }
            Outcome::Skipped(reason) => {
                if reason.is_unexpected() {
                    loge!("Error parsing {id}: {reason}");
                }
                out.skipped.push(Skipped { id: s!(id), reason });
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(id);
        }
    }

    out.records.sort_by(|a, b| a.name.cmp(&b.name));
    out.collisions = find_collisions(&out.records);

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "{} records, {} skipped, {} excluded",
            out.records.len(),
            out.skipped.len(),
            out.excluded.len()
        ));
        p.finish();
    }
    out
}

/// Walk records in order and report variants already seen in an earlier record.
pub fn find_collisions(records: &[Instruction]) -> Vec<Collision> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut out = Vec::new();
    for record in records {
        let overlap: Vec<String> = record
            .variants
            .iter()
            .filter(|v| seen.contains(v.as_str()))
            .cloned()
            .collect();
        if !overlap.is_empty() {
            logw!("Overlap in instruction variants: {:?} for {}", overlap, record.name);
            out.push(Collision { record: record.name.clone(), variants: overlap });
        }
        seen.extend(record.variants.iter().map(String::as_str));
    }
    out
}
