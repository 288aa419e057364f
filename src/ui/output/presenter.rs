//! Output presenter: shows a successful generation and owns the transient
//! "copied" indicator.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::clipboard::ClipboardWriter;
use crate::prompt::{PromptRequest, PromptResponse};
use crate::ui::generator::RequestState;

use super::state::{ClipboardState, OutputView, PromptStats};

/// How long the copied indicator stays on by default.
pub const DEFAULT_COPY_RESET: Duration = Duration::from_millis(2000);

struct PresentedResult {
    request: PromptRequest,
    response: PromptResponse,
    stats: PromptStats,
}

pub struct OutputPresenter {
    clipboard: Box<dyn ClipboardWriter>,
    reset_delay: Duration,
    result: Option<PresentedResult>,
    feedback: Arc<Mutex<ClipboardState>>,
    copied: Arc<watch::Sender<bool>>,
}

impl OutputPresenter {
    pub fn new(clipboard: Box<dyn ClipboardWriter>, reset_delay: Duration) -> Self {
        let (copied, _) = watch::channel(false);
        Self {
            clipboard,
            reset_delay,
            result: None,
            feedback: Arc::new(Mutex::new(ClipboardState::default())),
            copied: Arc::new(copied),
        }
    }

    /// Follow the generator: present on `Succeeded`, hide otherwise.
    pub fn sync(&mut self, state: &RequestState) {
        match state {
            RequestState::Succeeded { request, response } => self.present(request, response),
            _ => self.dismiss(),
        }
    }

    /// Show a successful result.
    ///
    /// A different generation resets the copied indicator; presenting the
    /// same generation again leaves it alone.
    pub fn present(&mut self, request: &PromptRequest, response: &PromptResponse) {
        if self
            .result
            .as_ref()
            .is_some_and(|current| current.request.id() == request.id())
        {
            return;
        }

        self.reset_feedback();
        self.result = Some(PresentedResult {
            request: request.clone(),
            response: response.clone(),
            stats: PromptStats::of(request.base_prompt(), response.refined_prompt()),
        });
    }

    pub fn dismiss(&mut self) {
        self.reset_feedback();
        self.result = None;
    }

    pub fn is_visible(&self) -> bool {
        self.result.is_some()
    }

    pub fn stats(&self) -> Option<PromptStats> {
        self.result.as_ref().map(|result| result.stats)
    }

    pub fn is_copied(&self) -> bool {
        *self.copied.borrow()
    }

    pub fn subscribe_copied(&self) -> watch::Receiver<bool> {
        self.copied.subscribe()
    }

    pub fn view(&self) -> Option<OutputView<'_>> {
        self.result.as_ref().map(|result| OutputView {
            intent: result.request.intent(),
            original_prompt: result.request.base_prompt(),
            refined_prompt: result.response.refined_prompt(),
            stats: result.stats,
            copied: self.is_copied(),
        })
    }

    /// Copy the refined prompt to the clipboard.
    ///
    /// Returns whether the copy happened. Clipboard failures are logged and
    /// otherwise ignored. Each successful copy restarts the reset timer.
    pub fn copy(&mut self) -> bool {
        let Some(result) = &self.result else {
            tracing::debug!("Copy ignored: no result presented");
            return false;
        };

        if let Err(err) = self.clipboard.set_text(result.response.refined_prompt()) {
            tracing::warn!("Failed to copy refined prompt: {}", err);
            return false;
        }

        let mut feedback = self.feedback.lock();
        feedback.cancel_reset();
        feedback.copied = true;
        self.copied.send_replace(true);

        let epoch = feedback.epoch;
        let delay = self.reset_delay;
        let shared = Arc::clone(&self.feedback);
        let copied = Arc::clone(&self.copied);
        feedback.pending_reset = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut feedback = shared.lock();
            if feedback.epoch != epoch {
                return;
            }
            feedback.copied = false;
            feedback.pending_reset = None;
            copied.send_replace(false);
        }));

        true
    }

    fn reset_feedback(&mut self) {
        let mut feedback = self.feedback.lock();
        feedback.cancel_reset();
        feedback.copied = false;
        self.copied.send_if_modified(|copied| std::mem::replace(copied, false));
    }
}

impl Drop for OutputPresenter {
    fn drop(&mut self) {
        self.feedback.lock().cancel_reset();
    }
}
