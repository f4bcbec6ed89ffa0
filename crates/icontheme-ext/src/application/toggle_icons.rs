//! IconGroupCommands: the suffix-group toggle workflow.
//!
//! One instance bundles a [`SuffixGroup`] with the ports it needs; each
//! public method is a single sequential run with no state kept between runs.
//!
//! ```text
//! toggle()
//!   └─ query status            -- store.load(), halt on error (no UI shown)
//!   └─ present On/Off picker   -- suspends; dismissal ends the run silently
//!   └─ interpret selection     -- description → intended state
//!   └─ re-check + apply        -- no-op when the state already matches,
//!   │                             otherwise edit + store.save()
//!   └─ confirm reload          -- suspends; confirmed → host reload
//!
//! enable() / disable()
//!   └─ apply unconditionally   -- no current-state check
//!   └─ confirm reload
//! ```
//!
//! The interactive path re-checks the status between picking and applying
//! because the document may have changed while the picker was open; the
//! direct entry points deliberately skip that check and always rewrite.

use std::sync::Arc;

use icontheme_core::{apply_group, group_enabled, strip_group, SuffixGroup};
use tracing::{debug, info};

use super::ports::{
    ChoicePicker, HostReloader, IconStore, PickItem, ReloadPrompt, StoreError, Translator,
};

/// Glyph marking the picker entry that matches the current state.
const SELECTED_GLYPH: &str = "\u{2714}";
/// Glyph for the other entry.
const UNSELECTED_GLYPH: &str = "\u{25FB}";

/// The toggle workflow use case for one suffix group.
pub struct IconGroupCommands {
    group: SuffixGroup,
    store: Arc<dyn IconStore>,
    picker: Arc<dyn ChoicePicker>,
    reload_prompt: Arc<dyn ReloadPrompt>,
    reloader: Arc<dyn HostReloader>,
    translator: Arc<dyn Translator>,
}

impl IconGroupCommands {
    pub fn new(
        group: SuffixGroup,
        store: Arc<dyn IconStore>,
        picker: Arc<dyn ChoicePicker>,
        reload_prompt: Arc<dyn ReloadPrompt>,
        reloader: Arc<dyn HostReloader>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            group,
            store,
            picker,
            reload_prompt,
            reloader,
            translator,
        }
    }

    /// Interactive toggle: picker, then apply, then the reload offer.
    ///
    /// Dismissing the picker, or picking the state that already holds, ends
    /// the run with no changes and no reload prompt.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from loading (before any UI is shown) or
    /// from saving (before the reload prompt).
    pub async fn toggle(&self) -> Result<(), StoreError> {
        let enabled = self.query_status()?;

        let on_text = self.t("toggleSwitch.on");
        let off_text = self.t("toggleSwitch.off");
        let on = PickItem {
            label: glyph(enabled).to_string(),
            description: on_text.clone(),
            detail: self.t(&format!("{}.enableIcons", self.group.name())),
        };
        let off = PickItem {
            label: glyph(!enabled).to_string(),
            description: off_text.clone(),
            detail: self.t(&format!("{}.disableIcons", self.group.name())),
        };
        let placeholder = self.t(&format!("{}.toggleIcons", self.group.name()));

        let Some(choice) = self.picker.pick(&placeholder, vec![on, off]).await else {
            debug!(group = self.group.name(), "picker dismissed, nothing to do");
            return Ok(());
        };

        // Map the chosen entry's description back to an intended state.  An
        // entry with an unrecognised description is treated like a dismissal.
        let target_enabled = if choice.description == on_text {
            true
        } else if choice.description == off_text {
            false
        } else {
            debug!(group = self.group.name(), "selection carried no known state");
            return Ok(());
        };

        // The document may have changed while the picker was open.
        if self.query_status()? == target_enabled {
            info!(
                group = self.group.name(),
                enabled = target_enabled,
                "state already matches selection, no rewrite"
            );
            return Ok(());
        }

        if target_enabled {
            self.apply_enable()?;
        } else {
            self.apply_disable()?;
        }
        self.offer_reload().await;
        Ok(())
    }

    /// Direct entry point: apply the group unconditionally, then offer a
    /// reload.  No current-state check is performed.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the load or the save.
    pub async fn enable(&self) -> Result<(), StoreError> {
        self.apply_enable()?;
        self.offer_reload().await;
        Ok(())
    }

    /// Direct entry point: strip the group unconditionally, then offer a
    /// reload.  Counterpart to [`Self::enable`].
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the load or the save.
    pub async fn disable(&self) -> Result<(), StoreError> {
        self.apply_disable()?;
        self.offer_reload().await;
        Ok(())
    }

    /// Is the group currently enabled?  No side effects.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] when the document cannot be loaded.
    pub async fn is_enabled(&self) -> Result<bool, StoreError> {
        self.query_status()
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn query_status(&self) -> Result<bool, StoreError> {
        let doc = self.store.load()?;
        Ok(group_enabled(&doc, &self.group))
    }

    fn apply_enable(&self) -> Result<(), StoreError> {
        let doc = self.store.load()?;
        info!(group = self.group.name(), "enabling suffix-group icons");
        self.store.save(&apply_group(&doc, &self.group))
    }

    fn apply_disable(&self) -> Result<(), StoreError> {
        let doc = self.store.load()?;
        info!(group = self.group.name(), "disabling suffix-group icons");
        self.store.save(&strip_group(&doc, self.group.name()))
    }

    /// The reload confirmation step.  Runs only after a successful save.
    async fn offer_reload(&self) {
        let confirmed = self
            .reload_prompt
            .confirm_reload(
                &self.t("confirmReload.message"),
                &self.t("confirmReload.yes"),
                &self.t("confirmReload.no"),
            )
            .await;
        if confirmed {
            info!("reload confirmed, handing control to the host");
            self.reloader.request_reload();
        } else {
            debug!("reload declined, changes take effect on the next start");
        }
    }

    fn t(&self, key: &str) -> String {
        self.translator.translate(key)
    }
}

fn glyph(selected: bool) -> &'static str {
    if selected {
        SELECTED_GLYPH
    } else {
        UNSELECTED_GLYPH
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
