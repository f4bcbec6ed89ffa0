//! File-backed persistence for the icon theme configuration document.
//!
//! The document is a JSON file inside the installed theme's output
//! directory: `<extension_root>/out/src/material-icons.json`.  Loading reads
//! and parses the whole file; saving overwrites it in full with
//! pretty-printed JSON (2-space indent).
//!
//! There is no locking: the store assumes it owns the file between its own
//! load and save.  Two overlapping workflow runs, or an external writer,
//! race and the later save wins — a documented lost-update window, not
//! something this adapter mitigates.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use icontheme_core::IconConfiguration;
use tracing::debug;

use crate::application::ports::{IconStore, StoreError};

/// Path of the configuration document relative to the extension root.
const CONFIG_RELATIVE_PATH: &[&str] = &["out", "src", "material-icons.json"];

/// Resolves the document path under the given extension root.
pub fn config_path(extension_root: &Path) -> PathBuf {
    CONFIG_RELATIVE_PATH
        .iter()
        .fold(extension_root.to_path_buf(), |p, seg| p.join(seg))
}

// ── File adapter ──────────────────────────────────────────────────────────────

/// [`IconStore`] adapter reading and rewriting a JSON file on disk.
pub struct JsonIconStore {
    path: PathBuf,
}

impl JsonIconStore {
    /// Store over an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store over the conventional location under `extension_root`.
    pub fn under_root(extension_root: &Path) -> Self {
        Self::new(config_path(extension_root))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IconStore for JsonIconStore {
    fn load(&self) -> Result<IconConfiguration, StoreError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        IconConfiguration::from_json(&text).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, doc: &IconConfiguration) -> Result<(), StoreError> {
        let text = doc.to_json_pretty()?;
        std::fs::write(&self.path, text).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "icon configuration rewritten");
        Ok(())
    }
}

// ── In-memory adapter for tests ───────────────────────────────────────────────

/// [`IconStore`] over an in-memory document, recording every save.
///
/// Used by integration tests that exercise the workflow end to end without
/// touching the filesystem.  The `fail_*` flags simulate I/O failures so the
/// error paths can be tested without a broken disk.
#[derive(Default)]
pub struct InMemoryIconStore {
    doc: Mutex<IconConfiguration>,
    /// Every document passed to `save`, in call order.
    pub saves: Mutex<Vec<IconConfiguration>>,
    pub fail_load: bool,
    pub fail_save: bool,
}

impl InMemoryIconStore {
    pub fn with_document(doc: IconConfiguration) -> Self {
        Self {
            doc: Mutex::new(doc),
            ..Self::default()
        }
    }

    /// Number of completed save calls.
    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    /// Snapshot of the current document.
    pub fn document(&self) -> IconConfiguration {
        self.doc.lock().unwrap().clone()
    }
}

impl IconStore for InMemoryIconStore {
    fn load(&self) -> Result<IconConfiguration, StoreError> {
        if self.fail_load {
            return Err(StoreError::Read {
                path: PathBuf::from("<memory>"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "simulated load failure"),
            });
        }
        Ok(self.doc.lock().unwrap().clone())
    }

    fn save(&self, doc: &IconConfiguration) -> Result<(), StoreError> {
        if self.fail_save {
            return Err(StoreError::Write {
                path: PathBuf::from("<memory>"),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "simulated save failure",
                ),
            });
        }
        *self.doc.lock().unwrap() = doc.clone();
        self.saves.lock().unwrap().push(doc.clone());
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use icontheme_core::{apply_group, SuffixGroup};
    use uuid::Uuid;

    /// Fresh temp directory per test so runs never interfere.
    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("icontheme_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_config_path_follows_the_out_src_convention() {
        let path = config_path(Path::new("/ext"));
        assert!(path.ends_with("out/src/material-icons.json"));
    }

    #[test]
    fn test_load_missing_file_is_a_read_error() {
        // Arrange
        let store = JsonIconStore::new("/nonexistent/material-icons.json");

        // Act
        let result = store.load();

        // Assert
        assert!(matches!(result, Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_load_malformed_json_is_a_parse_error() {
        // Arrange
        let dir = temp_dir();
        let path = dir.join("material-icons.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonIconStore::new(&path);

        // Act
        let result = store.load();

        // Assert
        assert!(matches!(result, Err(StoreError::Parse { .. })));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_then_load_round_trips_the_document() {
        // Arrange
        let dir = temp_dir();
        let store = JsonIconStore::new(dir.join("material-icons.json"));
        let doc = apply_group(&IconConfiguration::default(), &SuffixGroup::angular());

        // Act
        store.save(&doc).unwrap();
        let loaded = store.load().unwrap();

        // Assert
        assert_eq!(loaded, doc);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_writes_two_space_indented_json() {
        // Arrange
        let dir = temp_dir();
        let path = dir.join("material-icons.json");
        let store = JsonIconStore::new(&path);
        let doc = apply_group(&IconConfiguration::default(), &SuffixGroup::angular());

        // Act
        store.save(&doc).unwrap();

        // Assert
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"fileExtensions\""));
        assert!(text.contains("\n    \"module.ts\": \"_file_angular\""));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_replaces_the_whole_file() {
        // A shrinking document must not leave stale bytes behind.
        let dir = temp_dir();
        let path = dir.join("material-icons.json");
        let store = JsonIconStore::new(&path);

        let big = apply_group(&IconConfiguration::default(), &SuffixGroup::angular());
        store.save(&big).unwrap();
        store.save(&IconConfiguration::default()).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.file_extensions.is_empty());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_in_memory_store_records_saves() {
        let store = InMemoryIconStore::default();
        let doc = apply_group(&IconConfiguration::default(), &SuffixGroup::angular());

        store.save(&doc).unwrap();

        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().unwrap(), doc);
    }
}
