//! Failure taxonomy for a generation request.

use thiserror::Error;

/// Shown when the service failed without a usable message.
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate prompt";
/// Shown when no response was received at all.
pub const CONNECT_FAILED_MESSAGE: &str = "Failed to connect to the server";

/// Why a submitted generation ended in `Failed`.
///
/// Clone + PartialEq so it can live inside UI state; transport details are
/// kept as text rather than the original `reqwest::Error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The request never got a response (DNS, connect, timeout).
    #[error("Connection to refinement service failed: {detail}")]
    Transport { detail: String },

    /// The service answered with a non-success status.
    #[error("Refinement service returned HTTP {status}")]
    Service {
        status: u16,
        message: Option<String>,
    },

    /// Success status, but the body was not the expected shape.
    #[error("Malformed response from refinement service: {detail}")]
    MalformedResponse { detail: String },
}

impl GenerationError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    /// Service failure; blank messages are treated as absent.
    pub fn service(status: u16, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());
        Self::Service { status, message }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            detail: detail.into(),
        }
    }

    /// Message displayed to the user. Never empty.
    pub fn user_message(&self) -> &str {
        match self {
            GenerationError::Transport { .. } => CONNECT_FAILED_MESSAGE,
            GenerationError::Service {
                message: Some(message),
                ..
            } => message,
            GenerationError::Service { message: None, .. }
            | GenerationError::MalformedResponse { .. } => GENERATE_FAILED_MESSAGE,
        }
    }

    /// Short machine-readable category, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Transport { .. } => "transport_error",
            GenerationError::Service { .. } => "service_error",
            GenerationError::MalformedResponse { .. } => "malformed_response",
        }
    }
}
