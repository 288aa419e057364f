//! Request controller: owns the generator state and the single in-flight
//! service call.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};

use crate::catalog::IntentId;
use crate::client::RefinementService;
use crate::prompt::{is_submittable, PromptRequest, RequestId, ValidationError};
use crate::ui::mvi::Reducer;

use super::intent::GeneratorIntent;
use super::reducer::GeneratorReducer;
use super::state::GeneratorState;

/// Why `submit` did not start a generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A generation is already in progress")]
    Busy,
}

/// Handle to a spawned generation.
pub struct PendingGeneration {
    request_id: RequestId,
    handle: JoinHandle<()>,
}

impl PendingGeneration {
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Wait until the reply has been applied, or the call was cancelled by
    /// `clear` / teardown.
    pub async fn finished(self) {
        if let Err(err) = self.handle.await {
            if err.is_panic() {
                tracing::error!(request_id = %self.request_id, "Generation task panicked");
            }
        }
    }
}

/// Drives [`GeneratorState`] through submit, reply and clear.
///
/// State is published through a `watch` channel; consumers call
/// [`subscribe`](Self::subscribe) and are woken on every actual change.
pub struct RequestController {
    service: Arc<dyn RefinementService>,
    state: Arc<watch::Sender<GeneratorState>>,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl RequestController {
    pub fn new(service: Arc<dyn RefinementService>) -> Self {
        let (state, _) = watch::channel(GeneratorState::default());
        Self {
            service,
            state: Arc::new(state),
            in_flight: Mutex::new(None),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GeneratorState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GeneratorState> {
        self.state.subscribe()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.borrow().is_submitting()
    }

    /// Whether the submit trigger should be enabled.
    pub fn can_submit(&self, base_prompt: &str) -> bool {
        is_submittable(base_prompt) && !self.is_submitting()
    }

    /// Validate and send a prompt.
    ///
    /// On success the state is already `Submitting` when this returns; the
    /// service call runs as a spawned task, so this must be called from
    /// inside a tokio runtime.
    pub fn submit(
        &self,
        base_prompt: &str,
        intent: IntentId,
    ) -> Result<PendingGeneration, SubmitError> {
        if self.is_submitting() {
            tracing::debug!("Submit ignored: generation already in progress");
            return Err(SubmitError::Busy);
        }

        let request = match PromptRequest::new(base_prompt, intent) {
            Ok(request) => request,
            Err(error) => {
                dispatch(&self.state, GeneratorIntent::Rejected(error.clone()));
                return Err(error.into());
            }
        };

        let request_id = request.id();
        dispatch(&self.state, GeneratorIntent::Submit(request.clone()));
        tracing::info!(request_id = %request_id, intent = %intent, "Generation started");

        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            let outcome = match service.refine(&request).await {
                Ok(response) => {
                    tracing::info!(
                        request_id = %request_id,
                        refined_len = response.refined_prompt().chars().count(),
                        "Generation succeeded"
                    );
                    GeneratorIntent::Completed {
                        request_id,
                        response,
                    }
                }
                Err(error) => {
                    tracing::warn!(
                        request_id = %request_id,
                        kind = error.kind(),
                        "Generation failed: {}",
                        error
                    );
                    GeneratorIntent::Failed { request_id, error }
                }
            };

            if !dispatch(&state, outcome) {
                tracing::debug!(request_id = %request_id, "Discarded stale generation result");
            }
        });

        *self.in_flight.lock() = Some(handle.abort_handle());
        Ok(PendingGeneration { request_id, handle })
    }

    /// Back to `Idle`, cancelling any outstanding call.
    pub fn clear(&self) {
        if let Some(handle) = self.in_flight.lock().take() {
            handle.abort();
        }
        dispatch(&self.state, GeneratorIntent::Clear);
    }
}

impl Drop for RequestController {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.get_mut().take() {
            handle.abort();
        }
    }
}

/// Run `intent` through the reducer; notifies subscribers only on change.
fn dispatch(state: &watch::Sender<GeneratorState>, intent: GeneratorIntent) -> bool {
    state.send_if_modified(|current| {
        let next = GeneratorReducer::reduce(current.clone(), intent);
        if next == *current {
            return false;
        }
        *current = next;
        true
    })
}
