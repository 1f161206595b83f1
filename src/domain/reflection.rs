//! Reflection - "What I Like About Me" Journal

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Prompt shown on the reflection page, read from the translation document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub hint: String,
}

/// Free-text answers keyed by section id
pub type ReflectionAnswers = BTreeMap<String, String>;
