// src/file.rs
// Filesystem side of the corpus: find the `.html` pages under a folder.

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::config::consts::DOC_EXT;
use crate::error::{ScrapeError, SkipReason};
use crate::scrape::Source;

/// One page on disk. Read lazily, so excluded pages are never opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub path: PathBuf,
}

impl Source for Entry {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Cow<'_, str>, SkipReason> {
        Ok(Cow::Owned(fs::read_to_string(&self.path)?))
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }
}

#[derive(Clone, Debug)]
pub struct Corpus {
    root: PathBuf,
    entries: Vec<Entry>,
}

impl Corpus {
    /// Recursively collect `*.html` files under `root`, sorted by path so
    /// repeated runs see the same order. Symlinked folders are not entered.
    pub fn scan(root: impl AsRef<Path>) -> Result<Self, ScrapeError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(ScrapeError::NotADirectory(root));
        }

        let mut entries = Vec::new();
        for item in WalkDir::new(&root) {
            let item = item?;
            if item.file_type().is_dir() {
                continue;
            }
            if let Some(id) = page_id(item.path()) {
                entries.push(Entry { id, path: item.into_path() });
            }
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        logf!("Found {} pages under {}", entries.len(), root.display());

        Ok(Self { root, entries })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Filename stem of an `.html` page; `None` for anything else.
pub fn page_id(path: &Path) -> Option<String> {
    if path.extension().and_then(|e| e.to_str()) != Some(DOC_EXT) {
        return None;
    }
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s!(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_strips_extension() {
        assert_eq!(page_id(Path::new("html/ADDPS.html")).as_deref(), Some("ADDPS"));
        assert_eq!(page_id(Path::new("html/MOVD:MOVQ.html")).as_deref(), Some("MOVD:MOVQ"));
        assert_eq!(page_id(Path::new("html/style.css")), None);
        assert_eq!(page_id(Path::new("html/README")), None);
    }
}
