use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::protocol::{GenerateRequest, GenerateSuccess, HealthStatus, GENERATE_PATH, HEALTH_PATH};

use super::error::ServerError;
use super::templates::refine_prompt;

const MISSING_FIELDS: &str = "base_prompt and intent are required";

pub fn build_router() -> Router {
    Router::new()
        .route(GENERATE_PATH, post(generate))
        .route(HEALTH_PATH, get(health))
}

async fn generate(
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateSuccess>, ServerError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected generate body: {}", rejection);
        ServerError::InvalidRequest(MISSING_FIELDS.to_string())
    })?;

    let base_prompt = payload.base_prompt.trim();
    let intent = payload.intent.trim();
    if base_prompt.is_empty() || intent.is_empty() {
        return Err(ServerError::InvalidRequest(MISSING_FIELDS.to_string()));
    }

    let refined_prompt = refine_prompt(base_prompt, intent);
    tracing::info!(intent, refined_len = refined_prompt.len(), "Refined prompt");

    Ok(Json(GenerateSuccess {
        original_prompt: base_prompt.to_string(),
        intent: intent.to_string(),
        refined_prompt,
        success: true,
    }))
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
