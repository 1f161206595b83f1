//! i18n - Internationalization Module
//!
//! Supported languages, the nested translation document and its dotted-path
//! resolver, document sources, and the host text-direction hook.

mod catalog;
mod direction;
mod document;

pub use catalog::*;
pub use direction::*;
pub use document::*;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Arabic (right-to-left)
    Ar,
    /// Malay
    Ms,
    /// Chinese (Simplified)
    Zh,
}

impl Language {
    /// Every supported language, in switcher order
    pub const ALL: [Language; 4] = [Language::En, Language::Ar, Language::Ms, Language::Zh];

    /// Two-letter code used for storage and document lookup
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::Ms => "ms",
            Language::Zh => "zh",
        }
    }

    /// Parse an exact language code
    ///
    /// Only the bare codes written by the switcher are accepted; anything
    /// else (including region tags) is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Get display name
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
            Language::Ms => "Melayu",
            Language::Zh => "中文",
        }
    }

    /// Text direction for this language
    pub fn direction(self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| Error::UnsupportedLanguage {
            code: s.to_string(),
        })
    }
}

/// Page-level text direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the `dir` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(lang.to_string().parse::<Language>().ok(), Some(lang));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code("en-US"), None);
        assert_eq!(Language::from_code(""), None);
        assert!(matches!(
            "xx".parse::<Language>(),
            Err(Error::UnsupportedLanguage { .. })
        ));
    }

    #[test]
    fn display_names_are_native_and_distinct() {
        let names: std::collections::HashSet<_> =
            Language::ALL.into_iter().map(Language::display_name).collect();
        assert_eq!(names.len(), Language::ALL.len());
        assert_eq!(Language::Ar.display_name(), "العربية");
        assert_eq!(Language::En.display_name(), "English");
    }

    #[test]
    fn only_arabic_is_rtl() {
        assert_eq!(Language::Ar.direction(), TextDirection::Rtl);
        for lang in [Language::En, Language::Ms, Language::Zh] {
            assert_eq!(lang.direction().as_str(), "ltr");
        }
    }
}
