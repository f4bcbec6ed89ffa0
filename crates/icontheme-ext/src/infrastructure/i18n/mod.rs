//! Static locale catalog.
//!
//! Display strings are looked up by dotted key (`"toggleSwitch.on"`,
//! `"angular.enableIcons"`, …) against compile-time tables, one per locale.
//! A key missing from the active locale falls back to English; a key missing
//! everywhere falls back to the key itself, so a forgotten entry shows up in
//! the UI instead of panicking.

use crate::application::ports::Translator;

/// Locales the catalog ships tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    German,
}

impl Locale {
    /// Parses a locale tag such as `"en"`, `"de"`, `"de_DE.UTF-8"`.
    /// Unknown tags map to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag.get(..2) {
            Some("de") => Locale::German,
            _ => Locale::English,
        }
    }
}

/// [`Translator`] over the static tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleCatalog {
    locale: Locale,
}

impl LocaleCatalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl Translator for LocaleCatalog {
    fn translate(&self, key: &str) -> String {
        lookup(self.locale, key)
            .or_else(|| lookup(Locale::English, key))
            .unwrap_or(key)
            .to_string()
    }
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    let table: &[(&str, &str)] = match locale {
        Locale::English => ENGLISH,
        Locale::German => GERMAN,
    };
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

// ── Tables ────────────────────────────────────────────────────────────────────

const ENGLISH: &[(&str, &str)] = &[
    ("toggleSwitch.on", "On"),
    ("toggleSwitch.off", "Off"),
    ("angular.toggleIcons", "Toggle the Angular icons"),
    ("angular.enableIcons", "Show icons for Angular files"),
    ("angular.disableIcons", "Hide icons for Angular files"),
    (
        "confirmReload.message",
        "The changes take effect after a restart. Restart now?",
    ),
    ("confirmReload.yes", "Restart"),
    ("confirmReload.no", "Later"),
];

const GERMAN: &[(&str, &str)] = &[
    ("toggleSwitch.on", "Ein"),
    ("toggleSwitch.off", "Aus"),
    ("angular.toggleIcons", "Angular-Icons umschalten"),
    ("angular.enableIcons", "Icons für Angular-Dateien anzeigen"),
    ("angular.disableIcons", "Icons für Angular-Dateien ausblenden"),
    (
        "confirmReload.message",
        "Die Änderungen werden nach einem Neustart wirksam. Jetzt neu starten?",
    ),
    ("confirmReload.yes", "Neu starten"),
    ("confirmReload.no", "Später"),
];

// ── Tests ─────────────────────────────────────────────────────────────────────
