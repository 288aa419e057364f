use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ServiceConfig;
use crate::prompt::{PromptRequest, PromptResponse};
use crate::protocol::{GenerateReply, GenerateRequest, HealthStatus, GENERATE_PATH, HEALTH_PATH};

use super::error::GenerationError;
use super::RefinementService;

/// reqwest-backed client for the refinement service.
pub struct HttpRefinementClient {
    client: Client,
    base_url: String,
}

impl HttpRefinementClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Probe `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, GenerationError> {
        let resp = self
            .client
            .get(self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| GenerationError::transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GenerationError::service(status.as_u16(), None));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| GenerationError::transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| GenerationError::malformed(e.to_string()))
    }
}

#[async_trait]
impl RefinementService for HttpRefinementClient {
    async fn refine(&self, request: &PromptRequest) -> Result<PromptResponse, GenerationError> {
        let body = GenerateRequest {
            base_prompt: request.base_prompt().to_string(),
            intent: request.intent().as_str().to_string(),
        };

        tracing::debug!(
            request_id = %request.id(),
            intent = %request.intent(),
            "Sending generate request"
        );

        let resp = self
            .client
            .post(self.url(GENERATE_PATH))
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| GenerationError::transport(e.to_string()))?;

        interpret_reply(status, &bytes)
    }
}

/// Classify a received reply.
///
/// - 2xx with a string `refined_prompt` is a success.
/// - 2xx with anything else is a malformed response.
/// - Any other status is a service error, carrying `error` when the body
///   has one.
pub fn interpret_reply(status: u16, body: &[u8]) -> Result<PromptResponse, GenerationError> {
    let parsed = serde_json::from_slice::<GenerateReply>(body);

    if !(200..300).contains(&status) {
        let message = parsed.ok().and_then(|reply| reply.error);
        return Err(GenerationError::service(status, message));
    }

    match parsed {
        Ok(GenerateReply {
            refined_prompt: Some(refined),
            ..
        }) => Ok(PromptResponse::new(refined)),
        Ok(_) => Err(GenerationError::malformed("missing refined_prompt field")),
        Err(e) => Err(GenerationError::malformed(e.to_string())),
    }
}
