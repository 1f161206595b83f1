//! Document Sources
//!
//! Where translation documents come from. The default source decodes the
//! bundles embedded at compile time; hosts may plug in their own.

use std::collections::HashMap;

use tracing::debug;

use super::{Language, LocalizedDocument};
use crate::assets::locale_bytes;
use crate::error::{Error, Result};

/// Loader of one whole translation document per language
pub trait DocumentSource: Send + Sync {
    fn load(&self, language: Language) -> Result<LocalizedDocument>;
}

/// Source backed by the embedded `locales/<code>.json` bundles
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl DocumentSource for EmbeddedCatalog {
    fn load(&self, language: Language) -> Result<LocalizedDocument> {
        let file_name = format!("{}.json", language.code());
        let bytes = locale_bytes(&file_name).ok_or_else(|| Error::MissingDocument {
            code: language.code().to_string(),
        })?;
        debug!(language = %language, bytes = bytes.len(), "Decoding embedded translations");
        LocalizedDocument::from_slice(language, &bytes)
    }
}

/// Source holding pre-built documents in memory
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    documents: HashMap<Language, LocalizedDocument>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the document for its language
    pub fn with(mut self, document: LocalizedDocument) -> Self {
        self.documents.insert(document.language(), document);
        self
    }
}

impl DocumentSource for StaticCatalog {
    fn load(&self, language: Language) -> Result<LocalizedDocument> {
        self.documents
            .get(&language)
            .cloned()
            .ok_or_else(|| Error::MissingDocument {
                code: language.code().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_an_embedded_document() {
        for lang in Language::ALL {
            let doc = EmbeddedCatalog.load(lang).expect("bundle decodes");
            assert_eq!(doc.language(), lang);
            assert!(doc.text("games.quiz.title").is_some(), "{lang}");
        }
    }

    #[test]
    fn static_catalog_reports_missing_documents() {
        let catalog = StaticCatalog::new();
        assert!(matches!(
            catalog.load(Language::Zh),
            Err(Error::MissingDocument { .. })
        ));
    }
}
