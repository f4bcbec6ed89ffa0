//! Port traits connecting the toggle workflow to the outside world.
//!
//! The workflow never touches the filesystem or the host UI directly; it is
//! handed trait objects for each external collaborator.  The infrastructure
//! layer provides the real adapters (JSON file store, dialoguer prompts,
//! locale catalog) and recording mocks for tests.
//!
//! # Sync vs async ports
//!
//! The store, translator, and reload action complete without waiting on the
//! user, so they are plain synchronous traits.  The two prompt ports suspend
//! until the user answers (or dismisses), so they are `async` via
//! `async-trait` — the workflow parks at those points without blocking the
//! runtime.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use icontheme_core::IconConfiguration;
use thiserror::Error;

// ── Configuration store ───────────────────────────────────────────────────────

/// Error type for configuration document persistence.
///
/// `Read` and `Parse` cover every way loading can fail; `Write` and
/// `Serialize` cover every way persisting can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document file could not be read (missing, permission denied, …).
    #[error("failed to read icon configuration at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document content is not a valid icon configuration.
    #[error("malformed icon configuration at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The rewritten document could not be written back.
    #[error("failed to write icon configuration to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document could not be serialized.
    #[error("failed to serialize icon configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load/save access to the persisted icon configuration document.
///
/// `save` replaces the file in full — there is no in-place patching, and no
/// locking against other writers; overlapping invocations race and the later
/// save wins.
#[cfg_attr(test, mockall::automock)]
pub trait IconStore: Send + Sync {
    /// Reads and parses the persisted document.
    ///
    /// # Errors
    ///
    /// [`StoreError::Read`] when the file is missing or unreadable,
    /// [`StoreError::Parse`] when its content is malformed.
    fn load(&self) -> Result<IconConfiguration, StoreError>;

    /// Serializes `doc` (pretty-printed, 2-space indent) and overwrites the
    /// persisted file in full.
    ///
    /// # Errors
    ///
    /// [`StoreError::Write`] on I/O failure, [`StoreError::Serialize`] when
    /// the document cannot be serialized.
    fn save(&self, doc: &IconConfiguration) -> Result<(), StoreError>;
}

// ── Host UI ports ─────────────────────────────────────────────────────────────

/// One entry in the host's choice picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    /// Leading glyph column (here: selected/unselected state marker).
    pub label: String,
    /// Short value text; the workflow maps the chosen entry back to an
    /// intended state through this field.
    pub description: String,
    /// Longer explanatory line shown under the entry.
    pub detail: String,
}

/// The host's list picker.
///
/// `None` means the picker was dismissed — the host closes it when it loses
/// focus (`ignoreFocusOut: false` semantics); the console adapter maps
/// Esc/EOF to the same outcome.
#[async_trait]
pub trait ChoicePicker: Send + Sync {
    /// Shows `items` under `placeholder` and suspends until the user picks
    /// an entry or dismisses the picker.
    async fn pick(&self, placeholder: &str, items: Vec<PickItem>) -> Option<PickItem>;
}

/// The host's yes/no reload confirmation.
#[async_trait]
pub trait ReloadPrompt: Send + Sync {
    /// Suspends until the user answers.  Dismissal counts as a decline.
    async fn confirm_reload(&self, message: &str, yes: &str, no: &str) -> bool;
}

/// The host's reload action.
///
/// In a real host this restarts the application, so it may never return
/// control to the caller within the same session.
pub trait HostReloader: Send + Sync {
    fn request_reload(&self);
}

// ── Localization ──────────────────────────────────────────────────────────────

/// Localization service: dotted key → display string for the current locale
/// (e.g. `"toggleSwitch.on"`, `"angular.enableIcons"`).
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}
