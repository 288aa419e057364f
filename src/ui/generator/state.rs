//! State for the prompt generator.

use crate::client::GenerationError;
use crate::prompt::{PromptRequest, PromptResponse, RequestId, ValidationError};
use crate::ui::mvi::UiState;

/// Lifecycle of a single generation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// Nothing submitted yet, or cleared.
    #[default]
    Idle,

    /// Waiting for the service.
    Submitting { request: PromptRequest },

    /// The service returned a refined prompt.
    Succeeded {
        request: PromptRequest,
        response: PromptResponse,
    },

    /// The round trip failed.
    Failed {
        request: PromptRequest,
        error: GenerationError,
    },
}

impl RequestState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    /// The request behind the current state, if any.
    pub fn request(&self) -> Option<&PromptRequest> {
        match self {
            Self::Idle => None,
            Self::Submitting { request }
            | Self::Succeeded { request, .. }
            | Self::Failed { request, .. } => Some(request),
        }
    }

    /// Id of the request currently awaiting a reply.
    pub fn in_flight(&self) -> Option<RequestId> {
        match self {
            Self::Submitting { request } => Some(request.id()),
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&PromptResponse> {
        match self {
            Self::Succeeded { response, .. } => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&GenerationError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Everything the generator form renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratorState {
    pub request: RequestState,
    /// Form-level validation message from the last rejected submit.
    pub validation: Option<ValidationError>,
}

impl UiState for GeneratorState {}

impl GeneratorState {
    pub fn is_submitting(&self) -> bool {
        self.request.is_submitting()
    }

    /// Single user-visible error line, validation first.
    pub fn error_message(&self) -> Option<String> {
        if let Some(validation) = &self.validation {
            return Some(validation.to_string());
        }
        self.request.error().map(|e| e.user_message().to_string())
    }
}
