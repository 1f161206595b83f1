//! LanguageContext - Selected Language and Loaded Translations
//!
//! Switching language is two-step. The preference, the persisted code and the
//! page direction change at once; the translation document follows when its
//! load completes. Each load is tagged with a [`SwapTicket`] and only the most
//! recently issued ticket may commit:
//!
//! ```text
//! request(ar) ─► ticket #1 ──────────── load ar ───────────► commit #1 (stale, dropped)
//! request(zh) ─► ticket #2 ── load zh ─► commit #2 (latest, applied)
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::constants::LANGUAGE_KEY;
use crate::error::Result;
use crate::i18n::{
    DocumentSink, DocumentSource, Language, LocalizedDocument, TextDirection, translate,
};
use crate::storage::SafeStorage;

/// Token for one pending translation document load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapTicket {
    pub seq: u64,
    pub language: Language,
}

pub struct LanguageContext {
    language: Language,
    document: Option<LocalizedDocument>,
    latest_seq: u64,
    committed_seq: u64,
    storage: SafeStorage,
    sink: Arc<dyn DocumentSink>,
}

impl LanguageContext {
    /// Restore the saved language, or use `default` when none is valid
    ///
    /// Direction and language tag are applied right away. No document is
    /// loaded yet; every key shows as itself until one is committed.
    pub fn init(storage: SafeStorage, sink: Arc<dyn DocumentSink>, default: Language) -> Self {
        let saved = storage.get_item(LANGUAGE_KEY);
        let language = saved.as_deref().and_then(Language::from_code).unwrap_or(default);
        if let Some(code) = saved.as_deref()
            && Language::from_code(code).is_none()
        {
            debug!(code, "Ignoring unsupported saved language");
        }

        sink.apply(language.direction(), language);
        info!(language = %language, "Language context ready");

        Self {
            language,
            document: None,
            latest_seq: 0,
            committed_seq: 0,
            storage,
            sink,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    pub fn document(&self) -> Option<&LocalizedDocument> {
        self.document.as_ref()
    }

    /// Whether a newer load than the last settled one is outstanding
    ///
    /// A load settles by committing or by failing; after a failure the
    /// previous document stays in place.
    pub fn is_pending(&self) -> bool {
        self.latest_seq != self.committed_seq
    }

    /// Select `language`: persist it, apply direction, issue a load ticket
    pub fn request_language(&mut self, language: Language) -> SwapTicket {
        self.language = language;
        self.storage.set_item(LANGUAGE_KEY, language.code());
        self.sink.apply(language.direction(), language);
        info!(language = %language, dir = language.direction().as_str(), "Language selected");
        self.issue_ticket()
    }

    /// Issue a ticket for (re)loading the current language's document
    pub fn request_reload(&mut self) -> SwapTicket {
        self.issue_ticket()
    }

    /// Swap in a loaded document if `ticket` is still the latest
    pub fn commit(&mut self, ticket: SwapTicket, document: LocalizedDocument) -> bool {
        if ticket.seq != self.latest_seq || ticket.language != self.language {
            debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                language = %ticket.language,
                "Dropping stale translation document"
            );
            return false;
        }
        self.document = Some(document);
        self.committed_seq = ticket.seq;
        debug!(seq = ticket.seq, language = %ticket.language, "Translation document committed");
        true
    }

    /// Settle a failed load for `ticket`, keeping the current document
    pub fn abandon(&mut self, ticket: SwapTicket) {
        if ticket.seq == self.latest_seq {
            self.committed_seq = ticket.seq;
            debug!(seq = ticket.seq, language = %ticket.language, "Translation load abandoned");
        }
    }

    /// Load the document for `ticket` synchronously and commit it
    pub fn load_with(&mut self, ticket: SwapTicket, source: &dyn DocumentSource) -> Result<bool> {
        match source.load(ticket.language) {
            Ok(document) => Ok(self.commit(ticket, document)),
            Err(e) => {
                self.abandon(ticket);
                Err(e)
            }
        }
    }

    /// Select `language` and load its document synchronously
    pub fn set_language(&mut self, language: Language, source: &dyn DocumentSource) -> Result<()> {
        let ticket = self.request_language(language);
        self.load_with(ticket, source).map(drop)
    }

    /// Reload the current language's document synchronously
    pub fn reload(&mut self, source: &dyn DocumentSource) -> Result<()> {
        let ticket = self.request_reload();
        self.load_with(ticket, source).map(drop)
    }

    /// Display text for `key`, or the key itself
    pub fn t(&self, key: &str) -> String {
        translate(self.document.as_ref(), key)
    }

    /// Decode the subtree at `key`
    pub fn t_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.document.as_ref()?.get_as(key)
    }

    /// Display text with `{name}` placeholders substituted
    pub fn t_format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut result = self.t(key);
        for (name, value) in args {
            result = result.replace(&format!("{{{name}}}"), value);
        }
        result
    }

    fn issue_ticket(&mut self) -> SwapTicket {
        self.latest_seq += 1;
        SwapTicket {
            seq: self.latest_seq,
            language: self.language,
        }
    }
}

impl std::fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageContext")
            .field("language", &self.language)
            .field("loaded", &self.document.as_ref().map(LocalizedDocument::language))
            .field("latest_seq", &self.latest_seq)
            .field("committed_seq", &self.committed_seq)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{EmbeddedCatalog, NoopSink, RecordedAttributes};

    fn context(storage: SafeStorage) -> (LanguageContext, RecordedAttributes) {
        let sink = RecordedAttributes::new();
        let ctx = LanguageContext::init(storage, Arc::new(sink.clone()), Language::En);
        (ctx, sink)
    }

    #[test]
    fn arabic_is_rtl_and_english_is_ltr() {
        let storage = SafeStorage::in_memory();
        let (mut ctx, sink) = context(storage.clone());
        assert_eq!(sink.current(), Some((TextDirection::Ltr, Language::En)));

        ctx.set_language(Language::Ar, &EmbeddedCatalog).expect("ar loads");
        assert_eq!(ctx.direction(), TextDirection::Rtl);
        assert_eq!(sink.current(), Some((TextDirection::Rtl, Language::Ar)));
        assert_eq!(storage.get_item(LANGUAGE_KEY).as_deref(), Some("ar"));

        ctx.set_language(Language::En, &EmbeddedCatalog).expect("en loads");
        assert_eq!(sink.direction(), Some(TextDirection::Ltr));
        assert_eq!(storage.get_item(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn saved_language_is_restored() {
        let storage = SafeStorage::in_memory();
        storage.set_item(LANGUAGE_KEY, "zh");
        let (ctx, sink) = context(storage);
        assert_eq!(ctx.language(), Language::Zh);
        assert_eq!(sink.current(), Some((TextDirection::Ltr, Language::Zh)));
    }

    #[test]
    fn unsupported_saved_language_falls_back_to_default() {
        let storage = SafeStorage::in_memory();
        storage.set_item(LANGUAGE_KEY, "fr");
        let ctx = LanguageContext::init(storage, Arc::new(NoopSink), Language::Ms);
        assert_eq!(ctx.language(), Language::Ms);
    }

    #[test]
    fn unloaded_document_shows_keys() {
        let (ctx, _) = context(SafeStorage::in_memory());
        assert_eq!(ctx.t("nav.home"), "nav.home");
        assert_eq!(ctx.t_as::<Vec<String>>("nav"), None);
    }

    #[test]
    fn stale_ticket_never_commits() {
        let (mut ctx, _) = context(SafeStorage::in_memory());
        let ar = ctx.request_language(Language::Ar);
        let zh = ctx.request_language(Language::Zh);
        assert!(ctx.is_pending());

        let zh_doc = EmbeddedCatalog.load(Language::Zh).expect("zh");
        let ar_doc = EmbeddedCatalog.load(Language::Ar).expect("ar");
        assert!(ctx.commit(zh, zh_doc));
        assert!(!ctx.commit(ar, ar_doc));

        assert!(!ctx.is_pending());
        assert_eq!(ctx.document().map(LocalizedDocument::language), Some(Language::Zh));
    }

    #[test]
    fn failed_load_settles_and_keeps_previous_document() {
        let (mut ctx, _) = context(SafeStorage::in_memory());
        ctx.reload(&EmbeddedCatalog).expect("en loads");

        let empty = crate::i18n::StaticCatalog::new();
        assert!(ctx.set_language(Language::Ms, &empty).is_err());
        assert!(!ctx.is_pending());
        assert_eq!(ctx.language(), Language::Ms);
        assert_eq!(ctx.document().map(LocalizedDocument::language), Some(Language::En));

        assert!(ctx.reload(&empty).is_err());
        assert!(!ctx.is_pending());
    }

    #[test]
    fn abandoning_a_stale_ticket_leaves_newer_load_pending() {
        let (mut ctx, _) = context(SafeStorage::in_memory());
        let ar = ctx.request_language(Language::Ar);
        let _zh = ctx.request_language(Language::Zh);
        ctx.abandon(ar);
        assert!(ctx.is_pending());
    }

    #[test]
    fn placeholders_are_substituted() {
        let (mut ctx, _) = context(SafeStorage::in_memory());
        ctx.reload(&EmbeddedCatalog).expect("en loads");
        let text = ctx.t_format("confidencePage.habitCompletion", &[("days", "7")]);
        assert!(text.contains('7'));
        assert!(!text.contains("{days}"));
    }
}
