//! Wire types for the refinement service HTTP contract.
//!
//! `POST /generate` takes a [`GenerateRequest`]. A 2xx reply carries
//! `refined_prompt`; a failure reply may carry `error`.

use serde::{Deserialize, Serialize};

pub const GENERATE_PATH: &str = "/generate";
pub const HEALTH_PATH: &str = "/health";

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub base_prompt: String,
    #[serde(default)]
    pub intent: String,
}

/// Reply body as seen by the client.
///
/// Both fields are optional so that success and failure bodies decode
/// through the same type; the HTTP status decides which one is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateReply {
    #[serde(default)]
    pub refined_prompt: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Successful reply produced by the reference service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateSuccess {
    pub original_prompt: String,
    pub intent: String,
    pub refined_prompt: String,
    pub success: bool,
}

/// Failure reply body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
