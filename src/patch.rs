// src/patch.rs
use crate::config::Curation;
use crate::instruction::Instruction;

/// Apply the curated corrections for `record.name`. Unlisted names pass through.
pub fn apply(mut record: Instruction, curation: &Curation) -> Instruction {
    for patch in curation.patches_for(&record.name) {
        logf!("Patching {}", record.name);
        if let Some(reminder) = &patch.reminder {
            logw!("REMINDER: {reminder}");
        }
        record.body = record.body.replace(&patch.find, &patch.replace);
        record.tooltip = record.tooltip.replace(&patch.find, &patch.replace);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Patch;
    use std::collections::BTreeSet;

    fn record(name: &str, text: &str) -> Instruction {
        Instruction::new(
            name,
            BTreeSet::from([s!(name)]),
            Default::default(),
            text,
            format!("<p>{text}</p>"),
        )
    }

    #[test]
    fn addss_gets_single_precision_wording() {
        let text = "Adds the low values and stores the double-precision result.";
        let out = apply(record("ADDSS", text), &Curation::builtin());
        assert_eq!(out.tooltip, "Adds the low values and stores the single-precision result.");
        assert_eq!(out.body, "<p>Adds the low values and stores the single-precision result.</p>");
    }

    #[test]
    fn unlisted_names_are_untouched() {
        let text = "Adds the low values and stores the double-precision result.";
        let before = record("ADDSD", text);
        let out = apply(before.clone(), &Curation::builtin());
        assert_eq!(out, before);
    }

    #[test]
    fn patches_compose_in_order() {
        let curation = Curation::empty()
            .with_patch("FOO", Patch::new("alpha", "beta"))
            .with_patch("FOO", Patch::new("beta", "gamma"));
        let out = apply(record("FOO", "alpha text"), &curation);
        assert_eq!(out.tooltip, "gamma text");
    }
}
