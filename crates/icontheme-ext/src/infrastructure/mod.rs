//! Infrastructure layer for the icon theme extension.
//!
//! Concrete adapters behind the application-layer ports, plus the
//! extension's own settings file.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `icontheme_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`storage`** – [`JsonIconStore`](storage::JsonIconStore), the file
//!   adapter for the theme's JSON configuration document, and an in-memory
//!   store for tests.
//!
//! - **`i18n`** – the static locale catalog resolving dotted translation
//!   keys (English and German, with English fallback).
//!
//! - **`prompt`** – the console picker/confirm adapter built on `dialoguer`,
//!   and recording mocks that answer from a script.
//!
//! - **`host`** – the reload-action adapter.  The CLI build only logs the
//!   request; an embedding host supplies its own restart.
//!
//! - **`settings`** – the extension's own TOML settings file (locale,
//!   extension root, log level) at the platform config directory.

pub mod host;
pub mod i18n;
pub mod prompt;
pub mod settings;
pub mod storage;
