//! Intents for the prompt generator.

use crate::client::GenerationError;
use crate::prompt::{PromptRequest, PromptResponse, RequestId, ValidationError};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GeneratorIntent {
    /// A validated request is about to be sent.
    Submit(PromptRequest),

    /// Input failed validation; nothing was sent.
    Rejected(ValidationError),

    /// The service replied successfully.
    Completed {
        request_id: RequestId,
        response: PromptResponse,
    },

    /// The round trip failed.
    Failed {
        request_id: RequestId,
        error: GenerationError,
    },

    /// Reset to idle, dropping any result, error or in-flight request.
    Clear,
}

impl Intent for GeneratorIntent {}
