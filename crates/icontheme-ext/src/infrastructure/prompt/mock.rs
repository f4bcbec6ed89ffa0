//! Scripted prompt mocks for tests.
//!
//! The real prompts suspend on user input, which a test cannot provide.
//! These mocks answer from a preset script and record every presentation in
//! `Mutex<Vec<...>>` fields so assertions can inspect exactly what the user
//! would have been shown, and in what order.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{ChoicePicker, PickItem, ReloadPrompt};

/// One recorded picker presentation.
#[derive(Debug, Clone)]
pub struct PresentedPick {
    pub placeholder: String,
    pub items: Vec<PickItem>,
}

/// [`ChoicePicker`] answering with a fixed selection index.
#[derive(Default)]
pub struct MockPicker {
    /// Index to select; `None` dismisses the picker.
    pub selection: Mutex<Option<usize>>,
    /// Every presentation, in call order.
    pub presented: Mutex<Vec<PresentedPick>>,
}

impl MockPicker {
    /// Picker that selects the entry at `index`.
    pub fn selecting(index: usize) -> Self {
        Self {
            selection: Mutex::new(Some(index)),
            ..Self::default()
        }
    }

    /// Picker that the user dismisses.
    pub fn dismissing() -> Self {
        Self::default()
    }

    pub fn times_shown(&self) -> usize {
        self.presented.lock().unwrap().len()
    }
}

#[async_trait]
impl ChoicePicker for MockPicker {
    async fn pick(&self, placeholder: &str, items: Vec<PickItem>) -> Option<PickItem> {
        let answer = self
            .selection
            .lock()
            .unwrap()
            .and_then(|index| items.get(index).cloned());
        self.presented.lock().unwrap().push(PresentedPick {
            placeholder: placeholder.to_string(),
            items,
        });
        answer
    }
}

/// [`ReloadPrompt`] answering with a fixed yes/no and recording each message.
#[derive(Default)]
pub struct MockReloadPrompt {
    pub answer: bool,
    /// Every message the user would have been asked.
    pub asked: Mutex<Vec<String>>,
}

impl MockReloadPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.lock().unwrap().len()
    }
}

#[async_trait]
impl ReloadPrompt for MockReloadPrompt {
    async fn confirm_reload(&self, message: &str, _yes: &str, _no: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_string());
        self.answer
    }
}
