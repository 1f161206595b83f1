//! Embedded assets for the parenting hub
//!
//! Uses rust-embed to bundle the translation documents at compile time.

use rust_embed::RustEmbed;

/// Translation bundles from the `locales` directory, one `<code>.json` per language
#[derive(RustEmbed)]
#[folder = "locales"]
pub struct Locales;

/// Raw bytes of an embedded locale file
pub fn locale_bytes(file_name: &str) -> Option<std::borrow::Cow<'static, [u8]>> {
    Locales::get(file_name).map(|file| file.data)
}
