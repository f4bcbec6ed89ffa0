//! TOML-based settings for the extension itself.
//!
//! Not to be confused with the icon configuration document: that JSON file
//! belongs to the installed theme, while this file holds the extension's own
//! preferences at the platform-appropriate location:
//!
//! - Windows:  `%APPDATA%\IconTheme\settings.toml`
//! - Linux:    `~/.config/icontheme/settings.toml`
//! - macOS:    `~/Library/Application Support/IconTheme/settings.toml`
//!
//! Every field carries a serde default so the extension works on first run
//! (before the file exists) and keeps working when upgrading from an older
//! file that is missing newer fields.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The extension's persisted preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtensionSettings {
    /// Locale tag for display strings (e.g. `"en"`, `"de"`).  When absent,
    /// the binary falls back to the `LANG` environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Override for the installed extension's root directory.  When absent,
    /// the binary falls back to the executable's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_root: Option<PathBuf>,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ExtensionSettings {
    fn default() -> Self {
        Self {
            locale: None,
            extension_root: None,
            log_level: default_log_level(),
        }
    }
}

/// Determines the platform-appropriate directory for the settings file.
///
/// # Errors
///
/// Returns [`SettingsError::NoPlatformConfigDir`] when the base directory
/// cannot be determined from the environment.
pub fn settings_dir() -> Result<PathBuf, SettingsError> {
    platform_config_dir().ok_or(SettingsError::NoPlatformConfigDir)
}

/// Resolves the full path to the settings file.
///
/// # Errors
///
/// Returns [`SettingsError::NoPlatformConfigDir`] if the base directory
/// cannot be determined.
pub fn settings_file_path() -> Result<PathBuf, SettingsError> {
    Ok(settings_dir()?.join("settings.toml"))
}

/// Loads the settings, returning `ExtensionSettings::default()` if the file
/// does not yet exist.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system errors other than "not
/// found", and [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_settings() -> Result<ExtensionSettings, SettingsError> {
    let path = settings_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let settings: ExtensionSettings = toml::from_str(&content)?;
            Ok(settings)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ExtensionSettings::default()),
        Err(e) => Err(SettingsError::Io { path, source: e }),
    }
}

/// Persists `settings` to disk, creating the directory if needed.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system failures or
/// [`SettingsError::Serialize`] if serialization fails.
pub fn save_settings(settings: &ExtensionSettings) -> Result<(), SettingsError> {
    let path = settings_file_path()?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| SettingsError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(settings)?;
    std::fs::write(&path, content).map_err(|source| SettingsError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("IconTheme"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("icontheme"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("IconTheme")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ExtensionSettings::default();
        assert!(settings.locale.is_none());
        assert_eq!(settings.log_level, "info");
        assert!(settings.extension_root.is_none());
    }

    #[test]
    fn test_settings_round_trip_through_toml() {
        // Arrange
        let settings = ExtensionSettings {
            locale: Some("de".to_string()),
            extension_root: Some(PathBuf::from("/opt/icontheme")),
            log_level: "debug".to_string(),
        };

        // Act
        let text = toml::to_string_pretty(&settings).expect("serialize");
        let restored: ExtensionSettings = toml::from_str(&text).expect("deserialize");

        // Assert
        assert_eq!(settings, restored);
    }

    #[test]
    fn test_absent_extension_root_is_omitted_from_toml() {
        let text = toml::to_string_pretty(&ExtensionSettings::default()).expect("serialize");
        assert!(!text.contains("extension_root"));
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let settings: ExtensionSettings = toml::from_str("").expect("deserialize empty");
        assert_eq!(settings, ExtensionSettings::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults_for_missing_fields() {
        let settings: ExtensionSettings =
            toml::from_str(r#"locale = "de""#).expect("deserialize partial");
        assert_eq!(settings.locale.as_deref(), Some("de"));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let result: Result<ExtensionSettings, toml::de::Error> = toml::from_str("[[[ not toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_file_path_ends_with_settings_toml() {
        if let Ok(path) = settings_file_path() {
            assert!(path.ends_with("settings.toml"));
        }
        // NoPlatformConfigDir in a stripped CI environment is also acceptable.
    }
}
