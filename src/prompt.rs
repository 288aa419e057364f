//! Prompt request/response values and input validation.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::catalog::IntentId;

/// Input rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a base prompt")]
    EmptyPrompt,
}

/// Identity of one generation; used to drop stale results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// `true` when the prompt has at least one non-whitespace character.
pub fn is_submittable(base_prompt: &str) -> bool {
    !base_prompt.trim().is_empty()
}

/// A validated submission.
///
/// The base prompt is kept exactly as typed; validation only requires that
/// its trimmed form is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    id: RequestId,
    base_prompt: String,
    intent: IntentId,
}

impl PromptRequest {
    pub fn new(base_prompt: impl Into<String>, intent: IntentId) -> Result<Self, ValidationError> {
        let base_prompt = base_prompt.into();
        if !is_submittable(&base_prompt) {
            return Err(ValidationError::EmptyPrompt);
        }
        Ok(Self {
            id: RequestId::new(),
            base_prompt,
            intent,
        })
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn base_prompt(&self) -> &str {
        &self.base_prompt
    }

    pub fn intent(&self) -> IntentId {
        self.intent
    }
}

/// Refined text returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResponse {
    refined_prompt: String,
}

impl PromptResponse {
    pub fn new(refined_prompt: impl Into<String>) -> Self {
        Self {
            refined_prompt: refined_prompt.into(),
        }
    }

    pub fn refined_prompt(&self) -> &str {
        &self.refined_prompt
    }
}
