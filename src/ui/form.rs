//! Input fields of the prompt form.

use crate::catalog::IntentId;
use crate::prompt::is_submittable;

/// Text and intent the user is editing. Owned by the presentation layer;
/// the controller only sees it at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptForm {
    pub base_prompt: String,
    pub intent: IntentId,
}

impl PromptForm {
    pub fn new(intent: IntentId) -> Self {
        Self {
            base_prompt: String::new(),
            intent,
        }
    }

    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.base_prompt = text.into();
    }

    pub fn select_intent(&mut self, intent: IntentId) {
        self.intent = intent;
    }

    pub fn is_submittable(&self) -> bool {
        is_submittable(&self.base_prompt)
    }

    /// Clear the typed prompt. The selected intent is kept.
    pub fn reset(&mut self) {
        self.base_prompt.clear();
    }
}
