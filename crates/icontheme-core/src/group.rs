//! Suffix group definitions.
//!
//! A [`SuffixGroup`] is a named, fixed bundle of suffix → icon identifier
//! pairs that is toggled as one unit.  Groups are defined in code, never
//! persisted separately; the configuration document is the only record of
//! whether a group is currently applied.

/// A named bundle of suffix → icon identifier pairs.
///
/// All data is `'static`: groups are compile-time constants describing what
/// the theme ships, not user data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixGroup {
    name: &'static str,
    marker: &'static str,
    mappings: &'static [(&'static str, &'static str)],
}

/// Icon identifiers belonging to a group carry this prefix before the
/// group name (e.g. `_file_angular`, `_file_angular_routing`).
const IDENTIFIER_PREFIX: &str = "_file_";

impl SuffixGroup {
    /// The Angular group: six suffixes covering the framework's file kinds.
    pub fn angular() -> Self {
        Self {
            name: "angular",
            marker: "module.ts",
            mappings: &[
                ("module.ts", "_file_angular"),
                ("routing.ts", "_file_angular_routing"),
                ("component.ts", "_file_angular_component"),
                ("guard.ts", "_file_angular_guard"),
                ("service.ts", "_file_angular_service"),
                ("pipe.ts", "_file_angular_pipe"),
            ],
        }
    }

    /// Group name, used in translation keys and identifier matching.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The single suffix whose presence in a document means "group enabled".
    pub fn marker(&self) -> &'static str {
        self.marker
    }

    /// The full suffix → identifier bundle.
    pub fn mappings(&self) -> &'static [(&'static str, &'static str)] {
        self.mappings
    }
}

/// Returns true when `identifier` belongs to the group named `group_name`.
///
/// An identifier belongs to a group when it is exactly
/// `_file_<group>` or starts with `_file_<group>_` — so `_file_angular`
/// and `_file_angular_routing` both belong to `angular`, while
/// `_file_angularjs` would not.
pub fn identifier_in_group(identifier: &str, group_name: &str) -> bool {
    let Some(rest) = identifier.strip_prefix(IDENTIFIER_PREFIX) else {
        return false;
    };
    match rest.strip_prefix(group_name) {
        Some("") => true,
        Some(tail) => tail.starts_with('_'),
        None => false,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
