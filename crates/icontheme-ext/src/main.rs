//! Icon theme toggle command entry point.
//!
//! Wires the suffix-group workflow to the console adapters and runs one
//! command per invocation:
//!
//! ```text
//! icontheme [toggle]   -- interactive On/Off picker (the default)
//! icontheme enable     -- apply the angular group unconditionally
//! icontheme disable    -- strip the angular group unconditionally
//! icontheme status     -- print whether the group is enabled
//! ```
//!
//! The icon configuration document is looked up under the extension root
//! (`<root>/out/src/material-icons.json`); the root comes from the settings
//! file, falling back to the executable's directory, which is where the
//! installed theme keeps its generated files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use icontheme_core::SuffixGroup;
use icontheme_ext::application::ports::{ChoicePicker, ReloadPrompt};
use icontheme_ext::application::IconGroupCommands;
use icontheme_ext::infrastructure::host::LoggingReloader;
use icontheme_ext::infrastructure::i18n::{Locale, LocaleCatalog};
use icontheme_ext::infrastructure::prompt::ConsolePrompt;
use icontheme_ext::infrastructure::settings::{load_settings, ExtensionSettings};
use icontheme_ext::infrastructure::storage::JsonIconStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings().context("loading extension settings")?;

    // Initialise structured logging.  RUST_LOG wins over the settings file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.clone())),
        )
        .init();

    let locale = resolve_locale(&settings);
    let extension_root = resolve_extension_root(&settings)?;
    let store = Arc::new(JsonIconStore::under_root(&extension_root));
    info!(path = %store.path().display(), "using icon configuration");

    let prompt = Arc::new(ConsolePrompt);
    let commands = IconGroupCommands::new(
        SuffixGroup::angular(),
        store,
        Arc::clone(&prompt) as Arc<dyn ChoicePicker>,
        prompt as Arc<dyn ReloadPrompt>,
        Arc::new(LoggingReloader),
        Arc::new(LocaleCatalog::new(locale)),
    );

    let command = std::env::args().nth(1).unwrap_or_else(|| "toggle".to_string());
    match command.as_str() {
        "toggle" => commands
            .toggle()
            .await
            .context("toggling the angular icons")?,
        "enable" => commands
            .enable()
            .await
            .context("enabling the angular icons")?,
        "disable" => commands
            .disable()
            .await
            .context("disabling the angular icons")?,
        "status" => {
            let enabled = commands
                .is_enabled()
                .await
                .context("querying the angular icon status")?;
            println!(
                "angular icons: {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        other => anyhow::bail!("unknown command {other:?}; expected toggle, enable, disable, or status"),
    }

    Ok(())
}

/// Locale from the settings file, else `LANG`, else English.
fn resolve_locale(settings: &ExtensionSettings) -> Locale {
    settings
        .locale
        .clone()
        .or_else(|| std::env::var("LANG").ok())
        .map(|tag| Locale::from_tag(&tag))
        .unwrap_or_default()
}

/// Extension root from the settings file, else the executable's directory.
fn resolve_extension_root(settings: &ExtensionSettings) -> anyhow::Result<PathBuf> {
    if let Some(root) = &settings.extension_root {
        return Ok(root.clone());
    }
    let exe = std::env::current_exe().context("locating the executable")?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
