//! # icontheme-core
//!
//! Shared domain library for the icon theme extension: the configuration
//! document model, the fixed suffix groups, and the pure rule editor that
//! computes updated documents.
//!
//! This crate performs no I/O and has zero dependencies on the host
//! application, the filesystem, or any UI framework.
//!
//! # How suffix groups work (for beginners)
//!
//! An icon theme tells the editor which icon to render for a file by looking
//! up the file name's trailing segment (its *suffix*, e.g. `module.ts`) in
//! the theme's configuration document.  Some suffixes belong to a framework
//! feature that users want to switch on and off as one unit — those form a
//! *suffix group*:
//!
//! ```text
//! group "angular"
//!   module.ts    -> _file_angular
//!   routing.ts   -> _file_angular_routing
//!   component.ts -> _file_angular_component
//!   ...
//! ```
//!
//! Enabling the group merges its pairs into the document's `fileExtensions`
//! mapping; disabling removes every entry whose icon identifier belongs to
//! the group.  Whether the group is currently enabled is never stored — it is
//! derived by probing the document for the group's *marker suffix*.

pub mod document;
pub mod editor;
pub mod group;

// Re-export the most-used types at the crate root so callers can write
// `icontheme_core::SuffixGroup` instead of the full module paths.
pub use document::IconConfiguration;
pub use editor::{apply_group, group_enabled, strip_group};
pub use group::SuffixGroup;
