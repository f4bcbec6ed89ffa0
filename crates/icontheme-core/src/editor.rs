//! The rule editor: pure functions over [`IconConfiguration`].
//!
//! Each function takes a document by reference and returns a fresh document;
//! nothing here touches the filesystem.  The workflow layer decides when a
//! computed document is persisted.

use crate::document::IconConfiguration;
use crate::group::{identifier_in_group, SuffixGroup};

/// Returns a document extended with every suffix → identifier pair of
/// `group`.  Existing entries for the same suffix are overwritten
/// (last-write-wins), which makes the operation idempotent.
pub fn apply_group(doc: &IconConfiguration, group: &SuffixGroup) -> IconConfiguration {
    let mut next = doc.clone();
    for (suffix, identifier) in group.mappings() {
        next.file_extensions
            .insert((*suffix).to_string(), (*identifier).to_string());
    }
    next
}

/// Returns a document with every `fileExtensions` entry whose identifier
/// belongs to `group_name` removed.  Entries with unrelated identifiers are
/// kept even when their suffix collides with a group suffix, so a user's own
/// `module.ts` override survives.  Idempotent.
pub fn strip_group(doc: &IconConfiguration, group_name: &str) -> IconConfiguration {
    let mut next = doc.clone();
    next.file_extensions
        .retain(|_, identifier| !identifier_in_group(identifier, group_name));
    next
}

/// Derived toggle state: true iff the group's marker suffix is present in
/// the document.
pub fn group_enabled(doc: &IconConfiguration, group: &SuffixGroup) -> bool {
    doc.file_extensions.contains_key(group.marker())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_doc() -> IconConfiguration {
        IconConfiguration::default()
    }

    fn doc_with(entries: &[(&str, &str)]) -> IconConfiguration {
        let mut doc = IconConfiguration::default();
        for (k, v) in entries {
            doc.file_extensions
                .insert((*k).to_string(), (*v).to_string());
        }
        doc
    }

    // ── apply_group ───────────────────────────────────────────────────────────

    #[test]
    fn test_apply_group_on_empty_document_yields_exactly_the_six_pairs() {
        // Arrange
        let group = SuffixGroup::angular();

        // Act
        let doc = apply_group(&empty_doc(), &group);

        // Assert
        assert_eq!(doc.file_extensions.len(), 6);
        assert_eq!(doc.file_extensions["module.ts"], "_file_angular");
        assert_eq!(doc.file_extensions["routing.ts"], "_file_angular_routing");
        assert_eq!(
            doc.file_extensions["component.ts"],
            "_file_angular_component"
        );
        assert_eq!(doc.file_extensions["guard.ts"], "_file_angular_guard");
        assert_eq!(doc.file_extensions["service.ts"], "_file_angular_service");
        assert_eq!(doc.file_extensions["pipe.ts"], "_file_angular_pipe");
    }

    #[test]
    fn test_apply_group_is_idempotent() {
        let group = SuffixGroup::angular();
        let base = doc_with(&[("foo.ts", "bar")]);

        let once = apply_group(&base, &group);
        let twice = apply_group(&once, &group);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_group_overwrites_a_conflicting_suffix() {
        // A pre-existing entry for a group suffix is replaced, not kept.
        let group = SuffixGroup::angular();
        let base = doc_with(&[("module.ts", "_file_typescript")]);

        let doc = apply_group(&base, &group);

        assert_eq!(doc.file_extensions["module.ts"], "_file_angular");
    }

    #[test]
    fn test_apply_group_keeps_unrelated_entries() {
        let group = SuffixGroup::angular();
        let base = doc_with(&[("foo.ts", "bar")]);

        let doc = apply_group(&base, &group);

        assert_eq!(doc.file_extensions["foo.ts"], "bar");
        assert_eq!(doc.file_extensions.len(), 7);
    }

    // ── strip_group ───────────────────────────────────────────────────────────

    #[test]
    fn test_strip_group_removes_only_group_identifiers() {
        // Arrange – mirrors a document with one group entry and one foreign entry.
        let base = doc_with(&[("module.ts", "_file_angular"), ("foo.ts", "bar")]);

        // Act
        let doc = strip_group(&base, "angular");

        // Assert
        assert_eq!(doc.file_extensions.len(), 1);
        assert_eq!(doc.file_extensions["foo.ts"], "bar");
    }

    #[test]
    fn test_strip_group_is_idempotent() {
        let base = doc_with(&[("foo.ts", "bar")]);

        let once = strip_group(&base, "angular");
        let twice = strip_group(&once, "angular");

        assert_eq!(once, base, "no group entries means no change");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_after_apply_restores_non_group_keys_unchanged() {
        let group = SuffixGroup::angular();
        let base = doc_with(&[("foo.ts", "bar"), ("baz.rs", "_file_rust")]);

        let stripped = strip_group(&apply_group(&base, &group), group.name());

        for (key, value) in &base.file_extensions {
            assert_eq!(stripped.file_extensions.get(key), Some(value));
        }
        assert_eq!(stripped, base);
    }

    #[test]
    fn test_strip_group_preserves_extra_document_fields() {
        let group = SuffixGroup::angular();
        let mut base = apply_group(&empty_doc(), &group);
        base.extra.insert(
            "iconDefinitions".to_string(),
            serde_json::json!({ "_file_angular": {} }),
        );

        let stripped = strip_group(&base, group.name());

        // Only fileExtensions entries are touched; other fields pass through.
        assert!(stripped.extra.contains_key("iconDefinitions"));
    }

    // ── group_enabled ─────────────────────────────────────────────────────────

    #[test]
    fn test_group_enabled_after_apply_and_disabled_after_strip() {
        let group = SuffixGroup::angular();
        let base = doc_with(&[("foo.ts", "bar")]);

        let applied = apply_group(&base, &group);
        assert!(group_enabled(&applied, &group));

        let stripped = strip_group(&applied, group.name());
        assert!(!group_enabled(&stripped, &group));
    }

    #[test]
    fn test_group_enabled_is_false_on_empty_document() {
        assert!(!group_enabled(&empty_doc(), &SuffixGroup::angular()));
    }
}
