// src/scrape/selftest.rs
use std::collections::HashSet;

use crate::error::ScrapeError;
use crate::instruction::Instruction;

use super::Source;

/// Records whose source page could not be found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelfTest {
    pub missing: Vec<String>,
}

impl SelfTest {
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn into_result(self) -> Result<(), ScrapeError> {
        if self.passed() {
            Ok(())
        } else {
            Err(ScrapeError::SelfTest(self.missing))
        }
    }
}

/// Check that every record still has a page with exactly its name.
///
/// Misses are logged one by one; whether to stop is the caller's call.
pub fn self_test<S: Source>(records: &[Instruction], sources: &[S]) -> SelfTest {
    let present: HashSet<&str> = sources
        .iter()
        .filter(|s| s.exists())
        .map(|s| s.id())
        .collect();

    let missing: Vec<String> = records
        .iter()
        .filter(|r| !present.contains(r.name.as_str()))
        .map(|r| {
            logw!("Warning: {} has no file associated", r.name);
            r.name.clone()
        })
        .collect();

    SelfTest { missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::Document;
    use std::collections::BTreeSet;

    fn rec(name: &str) -> Instruction {
        Instruction::new(name, BTreeSet::from([s!(name)]), Default::default(), "", "")
    }

    #[test]
    fn names_must_match_exactly() {
        let docs = vec![Document::new("ADDPS", ""), Document::new("movd:movq", "")];
        let test = self_test(&[rec("ADDPS"), rec("MOVD:MOVQ")], &docs);
        assert!(!test.passed());
        assert_eq!(test.missing, vec![s!("MOVD:MOVQ")]);
        assert!(matches!(test.into_result(), Err(ScrapeError::SelfTest(m)) if m.len() == 1));
    }

    #[test]
    fn empty_corpus_passes_with_no_records() {
        let docs: Vec<Document> = Vec::new();
        assert!(self_test(&[], &docs).passed());
    }
}
