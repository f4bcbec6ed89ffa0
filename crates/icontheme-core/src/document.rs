//! The icon theme configuration document.
//!
//! The document lives on disk as a JSON file owned by the installed theme.
//! This crate only interprets one field — the top-level `fileExtensions`
//! mapping from file-name suffix to icon identifier.  Every other top-level
//! field (folder icons, language associations, and whatever future versions
//! of the theme add) is captured verbatim in [`IconConfiguration::extra`]
//! via `#[serde(flatten)]`, so a load → edit → save cycle never drops or
//! reorders data this crate does not understand.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// In-memory form of the icon theme configuration document.
///
/// Invariant: `file_extensions` keys are unique file-name suffixes; the
/// document is the single source of truth for which suffix maps to which
/// icon identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconConfiguration {
    /// Suffix → icon identifier mapping.  Entry order is irrelevant to the
    /// host; a `BTreeMap` keeps serialized output stable across rewrites.
    #[serde(rename = "fileExtensions")]
    pub file_extensions: BTreeMap<String, String>,

    /// All remaining top-level fields, preserved untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl IconConfiguration {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Fails if the text is not valid JSON or the top-level `fileExtensions`
    /// object is missing.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serializes the document as pretty-printed JSON (2-space indentation,
    /// the convention used by the theme's generated files).
    ///
    /// # Errors
    ///
    /// Fails only if a preserved `extra` value cannot be serialized, which
    /// cannot happen for values that came out of [`Self::from_json`].
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_reads_file_extensions() {
        // Arrange
        let text = r#"{ "fileExtensions": { "module.ts": "_file_angular" } }"#;

        // Act
        let doc = IconConfiguration::from_json(text).expect("parse");

        // Assert
        assert_eq!(
            doc.file_extensions.get("module.ts").map(String::as_str),
            Some("_file_angular")
        );
    }

    #[test]
    fn test_from_json_without_file_extensions_is_an_error() {
        // A document missing the one field this crate owns is malformed.
        let result = IconConfiguration::from_json(r#"{ "iconDefinitions": {} }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_top_level_fields_survive_a_round_trip() {
        // Arrange: a document with fields this crate does not interpret.
        let text = r#"{
  "iconDefinitions": { "_file_angular": { "iconPath": "./icons/angular.svg" } },
  "fileExtensions": { "module.ts": "_file_angular" },
  "hidesExplorerArrows": true
}"#;
        let doc = IconConfiguration::from_json(text).expect("parse");

        // Act
        let rewritten = doc.to_json_pretty().expect("serialize");
        let reparsed = IconConfiguration::from_json(&rewritten).expect("reparse");

        // Assert
        assert_eq!(doc, reparsed);
        assert!(reparsed.extra.contains_key("iconDefinitions"));
        assert_eq!(
            reparsed.extra.get("hidesExplorerArrows"),
            Some(&serde_json::Value::Bool(true))
        );
    }

    #[test]
    fn test_to_json_pretty_uses_two_space_indentation() {
        // Arrange
        let mut doc = IconConfiguration::default();
        doc.file_extensions
            .insert("module.ts".to_string(), "_file_angular".to_string());

        // Act
        let text = doc.to_json_pretty().expect("serialize");

        // Assert – nested keys are indented by exactly two spaces.
        assert!(text.contains("\n  \"fileExtensions\""));
        assert!(text.contains("\n    \"module.ts\""));
    }
}
