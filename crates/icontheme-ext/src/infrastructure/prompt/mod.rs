//! Console adapters for the host UI ports.
//!
//! The real host application renders its own quick-pick list and
//! notification buttons.  The CLI build stands in with `dialoguer` prompts
//! on the terminal: an arrow-key `Select` for the picker and a `Confirm`
//! for the reload question.
//!
//! Dismissal mapping: the host closes its picker when it loses focus; on the
//! terminal, Esc (and a closed stdin) produce `interact_opt() == Ok(None)`,
//! which this adapter reports as the same "dismissed" outcome.  A terminal
//! error (no TTY) also counts as a dismissal rather than an error, because
//! the picker contract has no failure mode.

use async_trait::async_trait;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::application::ports::{ChoicePicker, PickItem, ReloadPrompt};

pub mod mock;

/// Terminal implementation of both prompt ports.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompt;

#[async_trait]
impl ChoicePicker for ConsolePrompt {
    async fn pick(&self, placeholder: &str, items: Vec<PickItem>) -> Option<PickItem> {
        let rows: Vec<String> = items
            .iter()
            .map(|item| format!("{} {} ({})", item.label, item.description, item.detail))
            .collect();

        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(placeholder)
            .items(&rows)
            .default(0)
            .interact_opt();

        match picked {
            Ok(Some(index)) => items.into_iter().nth(index),
            Ok(None) | Err(_) => None,
        }
    }
}

#[async_trait]
impl ReloadPrompt for ConsolePrompt {
    async fn confirm_reload(&self, message: &str, _yes: &str, _no: &str) -> bool {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact_opt()
            .ok()
            .flatten()
            .unwrap_or(false)
    }
}
