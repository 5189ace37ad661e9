// src/scrape/source.rs
use std::borrow::Cow;

use crate::error::SkipReason;

/// One reference page as seen by the assembler.
pub trait Source {
    /// Stable identifier: the page filename without extension.
    fn id(&self) -> &str;

    /// The page markup. Called only for pages that are not excluded.
    fn load(&self) -> Result<Cow<'_, str>, SkipReason>;

    /// Whether the backing page is still present (checked by the self-test).
    fn exists(&self) -> bool {
        true
    }
}

/// An in-memory page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub html: String,
}

impl Document {
    pub fn new(id: impl Into<String>, html: impl Into<String>) -> Self {
        Self { id: id.into(), html: html.into() }
    }
}

impl Source for Document {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Cow<'_, str>, SkipReason> {
        Ok(Cow::Borrowed(&self.html))
    }
}
