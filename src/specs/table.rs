// src/specs/table.rs
//! Table reader: one parsed `<table>` → ordered rows of `column → cell text`.
//!
//! The reference pages use two table shapes:
//! - **Headered**: the first row names the columns and every later row is a
//!   record (the usual multi-row opcode table).
//! - **Labeled cells**: a single row whose cells each lead with an emphasized
//!   label, e.g. `<td><p><strong>Opcode</strong></p>0F C7</td>`.
//!
//! Each shape is a [`TableLayout`]; [`read_table`] tries them in priority
//! order and keeps the first one that recognizes the table.

use std::sync::LazyLock;

use indexmap::IndexMap;
use scraper::{ElementRef, Selector};

use crate::core::html::{child_elements, child_elements_named, sel, text_of, text_without};
use crate::core::sanitize::{header_key, is_blank};

/// One table record, columns in source order.
pub type Row = IndexMap<String, String>;

static TR: LazyLock<Selector> = LazyLock::new(|| sel("tr"));
static LABEL: LazyLock<Selector> = LazyLock::new(|| sel("p strong"));

/// A table-decoding strategy.
pub trait TableLayout {
    fn name(&self) -> &'static str;

    /// `None` if this layout does not recognize the table; otherwise its rows
    /// (possibly empty).
    fn decode(&self, table: ElementRef<'_>) -> Option<Vec<Row>>;
}

/// First row holds column names; every later row is zipped against them.
pub struct Headered;

/// Exactly one row whose cells carry their own emphasized labels.
pub struct LabeledCells;

const LAYOUTS: &[&dyn TableLayout] = &[&Headered, &LabeledCells];

/// Decode `table` with the first layout that recognizes it. Unrecognized → empty.
pub fn read_table(table: ElementRef<'_>) -> Vec<Row> {
    for layout in LAYOUTS {
        if let Some(rows) = layout.decode(table) {
            logd!("table decoded as {} ({} rows)", layout.name(), rows.len());
            return rows;
        }
    }
    Vec::new()
}

fn rows_of(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    table.select(&TR).collect()
}

/// Column names from the first row's direct children.
///
/// Any cell kind counts (some pages use `<td>` for headers). Stray
/// whitespace between cells is ignored.
fn discover_headers(first_row: ElementRef<'_>) -> Vec<String> {
    first_row
        .children()
        .filter_map(|child| {
            if let Some(el) = ElementRef::wrap(child) {
                Some(header_key(&text_of(el)))
            } else {
                child
                    .value()
                    .as_text()
                    .filter(|t| !is_blank(t))
                    .map(|t| header_key(t))
            }
        })
        .collect()
}

impl TableLayout for Headered {
    fn name(&self) -> &'static str {
        "headered"
    }

    fn decode(&self, table: ElementRef<'_>) -> Option<Vec<Row>> {
        let rows = rows_of(table);
        let (first, data) = rows.split_first()?;
        // A lone row has nothing to be a header for.
        if data.is_empty() {
            return None;
        }
        let headers = discover_headers(*first);
        if headers.is_empty() {
            return None;
        }

        let out = data
            .iter()
            .map(|row| {
                child_elements_named(*row, "td")
                    .zip(headers.iter())
                    .map(|(cell, name)| (name.clone(), text_of(cell)))
                    .collect::<Row>()
            })
            .filter(|row| !row.is_empty())
            .collect();
        Some(out)
    }
}

impl TableLayout for LabeledCells {
    fn name(&self) -> &'static str {
        "labeled-cells"
    }

    fn decode(&self, table: ElementRef<'_>) -> Option<Vec<Row>> {
        let rows = rows_of(table);
        let [only] = rows.as_slice() else {
            return None;
        };

        let mut row = Row::new();
        for cell in child_elements(*only).filter(|c| c.value().name() == "td") {
            let Some(label) = cell.select(&LABEL).next() else {
                logd!("labeled table cell without a label; skipped");
                continue;
            };
            row.insert(text_of(label), text_without(cell, label));
        }
        if row.is_empty() {
            return None;
        }
        Some(vec![row])
    }
}
