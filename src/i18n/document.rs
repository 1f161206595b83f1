//! Localized Document
//!
//! A translation bundle is an arbitrarily nested JSON document. It is held as
//! a tagged tree and walked one dotted segment at a time.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Language;
use crate::error::Result;

/// One node of a translation document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Null,
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<Node>),
    Map(BTreeMap<String, Node>),
}

impl Node {
    /// Child addressed by one path segment
    ///
    /// Maps are indexed by key, lists by canonical decimal position
    /// (`"1"`, never `"01"` or `"+1"`).
    pub fn child(&self, segment: &str) -> Option<&Node> {
        match self {
            Node::Map(map) => map.get(segment),
            Node::List(items) => segment
                .parse::<usize>()
                .ok()
                .filter(|i| i.to_string() == segment)
                .and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// String leaf contents
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Render a leaf for display
    ///
    /// Returns `None` for containers and for falsy leaves (`null`, `false`,
    /// zero, empty string), which display as their key instead.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Node::Text(text) if !text.is_empty() => Some(text.clone()),
            Node::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Node::Flag(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

/// Outcome of resolving a dotted key
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Node),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Convert into an `Option`
    pub fn found(self) -> Option<&'a Node> {
        match self {
            Lookup::Found(node) => Some(node),
            Lookup::NotFound => None,
        }
    }
}

/// Walk `key` (for example `"games.quiz.title"`) from `root`
///
/// The walk stops at the first absent segment.
pub fn resolve<'a>(root: &'a Node, key: &str) -> Lookup<'a> {
    let mut current = root;
    for segment in key.split('.') {
        match current.child(segment) {
            Some(next) => current = next,
            None => return Lookup::NotFound,
        }
    }
    Lookup::Found(current)
}

/// Display text for `key`, falling back to the key itself
///
/// The visible key is how missing translations get noticed. A document that
/// has not loaded yet behaves as if every key were missing.
pub fn translate(document: Option<&LocalizedDocument>, key: &str) -> String {
    document
        .and_then(|doc| doc.lookup(key).found())
        .and_then(Node::display_text)
        .unwrap_or_else(|| key.to_string())
}

/// Translation document for one language
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedDocument {
    language: Language,
    root: Node,
}

impl LocalizedDocument {
    pub fn new(language: Language, root: Node) -> Self {
        Self { language, root }
    }

    /// Decode a JSON bundle
    pub fn from_slice(language: Language, bytes: &[u8]) -> Result<Self> {
        let root: Node = serde_json::from_slice(bytes)?;
        Ok(Self::new(language, root))
    }

    /// Decode a JSON bundle from text
    pub fn from_json_str(language: Language, json: &str) -> Result<Self> {
        Self::from_slice(language, json.as_bytes())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolve a dotted key
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        resolve(&self.root, key)
    }

    /// String leaf at `key`
    pub fn text(&self, key: &str) -> Option<&str> {
        self.lookup(key).found().and_then(Node::as_text)
    }

    /// Decode the subtree at `key` into a caller-chosen shape
    ///
    /// No schema is enforced by the document; a subtree that does not fit
    /// `T` is logged and treated as absent.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let node = self.lookup(key).found()?;
        let value = match serde_json::to_value(node) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "failed to re-encode translation subtree");
                return None;
            }
        };
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(
                    key,
                    language = %self.language,
                    error = %e,
                    "translation subtree has unexpected shape"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: &str = r#"{
        "games": {
            "quiz": { "title": "Puberty Quiz", "empty": "", "count": 3 },
            "list": [ { "name": "first" }, { "name": "second" } ]
        },
        "nothing": null
    }"#;

    fn sample() -> LocalizedDocument {
        LocalizedDocument::from_json_str(Language::En, SAMPLE).expect("valid sample")
    }

    #[test]
    fn present_leaf_resolves() {
        let doc = sample();
        assert_eq!(doc.text("games.quiz.title"), Some("Puberty Quiz"));
        assert_eq!(translate(Some(&doc), "games.quiz.title"), "Puberty Quiz");
    }

    #[test]
    fn absent_segment_at_any_depth_falls_back_to_key() {
        let doc = sample();
        for key in ["missing", "games.missing", "games.quiz.title.deeper", "games.list.9.name"] {
            assert_eq!(doc.lookup(key), Lookup::NotFound, "{key}");
            assert_eq!(translate(Some(&doc), key), key);
        }
    }

    #[test]
    fn list_segments_index_by_position() {
        let doc = sample();
        assert_eq!(doc.text("games.list.1.name"), Some("second"));
    }

    #[test]
    fn non_canonical_list_indices_are_absent() {
        let doc = sample();
        for key in [
            "games.list.+1.name",
            "games.list.01.name",
            "games.list. 1.name",
            "games.list.-0.name",
        ] {
            assert_eq!(doc.lookup(key), Lookup::NotFound, "{key}");
            assert_eq!(translate(Some(&doc), key), key);
        }
        assert_eq!(translate(Some(&doc), "games.list.0.name"), "first");
    }

    #[test]
    fn falsy_leaves_display_as_key() {
        let doc = sample();
        assert!(doc.lookup("games.quiz.empty").is_found());
        assert_eq!(translate(Some(&doc), "games.quiz.empty"), "games.quiz.empty");
        assert_eq!(translate(Some(&doc), "nothing"), "nothing");
        assert_eq!(translate(Some(&doc), "games.quiz.count"), "3");
    }

    #[test]
    fn containers_display_as_key_but_decode_as_typed() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Item {
            name: String,
        }

        let doc = sample();
        assert_eq!(translate(Some(&doc), "games.list"), "games.list");

        let items: Vec<Item> = doc.get_as("games.list").expect("list decodes");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "first");

        // Wrong shape is treated as absent rather than an error
        assert_eq!(doc.get_as::<Vec<Item>>("games.quiz"), None);
    }

    #[test]
    fn missing_document_treats_every_key_as_absent() {
        assert_eq!(translate(None, "games.quiz.title"), "games.quiz.title");
    }

    fn leaf_paths() -> impl Strategy<Value = BTreeMap<(String, String), String>> {
        prop::collection::btree_map(
            ("[a-z]{1,6}", "[a-z]{1,6}"),
            "[A-Za-z ]{1,12}",
            1..12,
        )
    }

    fn build(paths: &BTreeMap<(String, String), String>) -> LocalizedDocument {
        let mut root: BTreeMap<String, Node> = BTreeMap::new();
        for ((outer, inner), text) in paths {
            let entry = root
                .entry(outer.clone())
                .or_insert_with(|| Node::Map(BTreeMap::new()));
            if let Node::Map(children) = entry {
                children.insert(inner.clone(), Node::Text(text.clone()));
            }
        }
        LocalizedDocument::new(Language::En, Node::Map(root))
    }

    proptest! {
        #[test]
        fn present_keys_return_their_leaf(paths in leaf_paths()) {
            let doc = build(&paths);
            for ((outer, inner), text) in &paths {
                let key = format!("{outer}.{inner}");
                prop_assert_eq!(doc.text(&key), Some(text.as_str()));
            }
        }

        #[test]
        fn absent_keys_return_the_key_unchanged(
            paths in leaf_paths(),
            suffix in "[0-9]{1,4}",
        ) {
            let doc = build(&paths);
            // Digits never appear in generated segments, so these are absent
            for (outer, inner) in paths.keys() {
                let key = format!("{outer}.{inner}{suffix}");
                prop_assert_eq!(translate(Some(&doc), &key), key.clone());
                let deeper = format!("{outer}.{inner}.{suffix}");
                prop_assert_eq!(translate(Some(&doc), &deeper), deeper.clone());
            }
        }
    }
}
