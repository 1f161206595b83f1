//! Document Swap - Asynchronous Translation Loads
//!
//! Decoding runs on the blocking pool (inline in the browser); the result
//! commits through the shared language handle only if its ticket is still
//! the latest. A failed load settles its ticket without touching the
//! current document.

use std::sync::{Arc, RwLock};

#[cfg(not(target_arch = "wasm32"))]
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[cfg(not(target_arch = "wasm32"))]
use super::runtime::spawn_named_in_tokio;
use crate::error::{Error, Result};
use crate::i18n::LocalizedDocument;
use crate::i18n::{DocumentSource, Language};
use crate::state::{LanguageContext, SwapTicket};

/// Language context shared between the owner and in-flight loads
pub type SharedLanguage = Arc<RwLock<LanguageContext>>;

fn poisoned() -> Error {
    Error::Task {
        message: "language context lock poisoned".to_string(),
    }
}

/// Load the document for `ticket` and try to commit it
///
/// Returns whether the document was applied; `false` means a newer request
/// superseded this one.
pub async fn load_and_commit(
    ctx: SharedLanguage,
    source: Arc<dyn DocumentSource>,
    ticket: SwapTicket,
) -> Result<bool> {
    let loaded = decode(source, ticket).await;

    let mut guard = ctx.write().map_err(|_| poisoned())?;
    match loaded {
        Ok(document) => Ok(guard.commit(ticket, document)),
        Err(e) => {
            guard.abandon(ticket);
            Err(e)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn decode(
    source: Arc<dyn DocumentSource>,
    ticket: SwapTicket,
) -> Result<LocalizedDocument> {
    tokio::task::spawn_blocking(move || source.load(ticket.language))
        .await
        .map_err(|e| Error::Task {
            message: e.to_string(),
        })?
}

#[cfg(target_arch = "wasm32")]
async fn decode(
    source: Arc<dyn DocumentSource>,
    ticket: SwapTicket,
) -> Result<LocalizedDocument> {
    source.load(ticket.language)
}

#[cfg(any(not(target_arch = "wasm32"), feature = "web"))]
async fn settle(ctx: SharedLanguage, source: Arc<dyn DocumentSource>, ticket: SwapTicket) {
    match load_and_commit(ctx, source, ticket).await {
        Ok(true) => debug!(language = %ticket.language, "Language switch applied"),
        Ok(false) => debug!(language = %ticket.language, "Language switch superseded"),
        Err(e) => warn!(language = %ticket.language, error = %e, "Language switch failed"),
    }
}

/// Select `language` now and load its document
pub async fn switch_language(
    ctx: SharedLanguage,
    source: Arc<dyn DocumentSource>,
    language: Language,
) -> Result<bool> {
    let ticket = ctx.write().map_err(|_| poisoned())?.request_language(language);
    load_and_commit(ctx, source, ticket).await
}

/// Select `language` now and load its document in the background
///
/// The preference and page direction change before this returns.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_language_switch(
    ctx: SharedLanguage,
    source: Arc<dyn DocumentSource>,
    language: Language,
) -> Result<JoinHandle<()>> {
    let ticket = ctx.write().map_err(|_| poisoned())?.request_language(language);
    Ok(spawn_named_in_tokio("language-switch", settle(ctx, source, ticket)))
}

/// Select `language` now and load its document on the browser event loop
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn spawn_language_switch(
    ctx: SharedLanguage,
    source: Arc<dyn DocumentSource>,
    language: Language,
) -> Result<()> {
    let ticket = ctx.write().map_err(|_| poisoned())?.request_language(language);
    wasm_bindgen_futures::spawn_local(settle(ctx, source, ticket));
    Ok(())
}
