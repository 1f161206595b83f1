//! Document Direction Hook
//!
//! Selecting a language immediately updates the host page's `dir` and `lang`
//! attributes, before the new translation document has loaded.

use std::sync::{Arc, Mutex};

use super::{Language, TextDirection};

/// Receiver of page-level direction and language tag updates
pub trait DocumentSink: Send + Sync {
    fn apply(&self, direction: TextDirection, language: Language);
}

/// Sink for hosts without a page (tests, the CLI)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DocumentSink for NoopSink {
    fn apply(&self, _direction: TextDirection, _language: Language) {}
}

/// Sink that remembers the last applied attributes
#[derive(Debug, Clone, Default)]
pub struct RecordedAttributes {
    inner: Arc<Mutex<Option<(TextDirection, Language)>>>,
}

impl RecordedAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last `(dir, lang)` pair applied, if any
    pub fn current(&self) -> Option<(TextDirection, Language)> {
        self.inner.lock().ok().and_then(|guard| *guard)
    }

    pub fn direction(&self) -> Option<TextDirection> {
        self.current().map(|(dir, _)| dir)
    }
}

impl DocumentSink for RecordedAttributes {
    fn apply(&self, direction: TextDirection, language: Language) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some((direction, language));
        }
    }
}

/// Sink writing `dir`/`lang` on `<html>`
#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDocumentSink;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl DocumentSink for WebDocumentSink {
    fn apply(&self, direction: TextDirection, language: Language) {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        if let Err(e) = element.set_attribute("dir", direction.as_str()) {
            tracing::warn!(error = ?e, "failed to set document dir");
        }
        if let Err(e) = element.set_attribute("lang", language.code()) {
            tracing::warn!(error = ?e, "failed to set document lang");
        }
    }
}
