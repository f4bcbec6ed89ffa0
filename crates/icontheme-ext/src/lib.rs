//! icontheme-ext library entry point.
//!
//! Re-exports the public module tree so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does icontheme-ext do? (for beginners)
//!
//! An editor icon theme maps file-name suffixes (e.g. `module.ts`) to icon
//! identifiers (e.g. `_file_angular`) inside a JSON configuration document
//! that the editor reads at startup.  Some of those mappings belong to an
//! optional feature — the Angular suffix group — that users switch on and
//! off from a command.
//!
//! This crate implements that command:
//!
//! 1. Load the configuration document and derive whether the group is
//!    currently enabled (presence of the marker suffix).
//! 2. Show a two-entry choice picker ("On" / "Off") with the current state
//!    marked by a check glyph.
//! 3. If the user picked a state different from the current one, compute the
//!    updated document with the pure rule editor from `icontheme-core` and
//!    rewrite the file in full.
//! 4. Ask the user to confirm an application reload so the editor picks up
//!    the new mapping; the reload itself is the host's job.
//!
//! The host application's UI and reload machinery are reached through the
//! trait ports in [`application::ports`]; this crate ships a console adapter
//! and recording mocks in [`infrastructure`].

/// Application layer: the toggle workflow use case and its ports.
pub mod application;

/// Infrastructure layer: JSON file store, locale catalog, prompt and reload
/// adapters, and the extension's own settings file.
pub mod infrastructure;
