//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use async_trait::async_trait;
use parking_lot::Mutex;
use prompt_refiner::client::{GenerationError, RefinementService};
use prompt_refiner::clipboard::{ClipboardError, ClipboardWriter};
use prompt_refiner::prompt::{PromptRequest, PromptResponse};
use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;

pub type Reply = Result<PromptResponse, GenerationError>;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

// -- Refinement service fake --------------------------------------------------

/// Service whose replies are released by the test through oneshot gates.
#[derive(Default)]
pub struct ScriptedService {
    calls: AtomicUsize,
    requests: Mutex<Vec<PromptRequest>>,
    replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
}

impl ScriptedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a pending reply; the call blocks until the sender fires.
    pub fn gate(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().push_back(rx);
        tx
    }

    /// Queue a reply that is available immediately.
    pub fn reply_with(&self, reply: Reply) {
        let _ = self.gate().send(reply);
    }

    /// Number of refine calls that actually started.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<PromptRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl RefinementService for ScriptedService {
    async fn refine(&self, request: &PromptRequest) -> Reply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());

        let gate = self.replies.lock().pop_front();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(GenerationError::transport("reply dropped"))),
            None => Err(GenerationError::transport("no scripted reply")),
        }
    }
}

// -- Clipboard fakes ----------------------------------------------------------

/// Clipboard that records every write.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

/// Clipboard that always refuses.
pub struct DeniedClipboard;

impl ClipboardWriter for DeniedClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("permission denied".to_string()))
    }
}
