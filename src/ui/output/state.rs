//! State for the output panel.

use tokio::task::JoinHandle;

use crate::catalog::IntentId;

/// Length comparison between the original and refined prompt.
///
/// Plain character counts of the raw text; no trimming, no token counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptStats {
    pub original_length: usize,
    pub refined_length: usize,
}

impl PromptStats {
    pub fn of(original: &str, refined: &str) -> Self {
        Self {
            original_length: original.chars().count(),
            refined_length: refined.chars().count(),
        }
    }
}

/// Copy feedback for the presented result.
///
/// `epoch` increases on every copy and every cancellation; a reset task
/// only applies if the epoch it was spawned with is still current.
#[derive(Debug, Default)]
pub(crate) struct ClipboardState {
    pub(crate) copied: bool,
    pub(crate) epoch: u64,
    pub(crate) pending_reset: Option<JoinHandle<()>>,
}

impl ClipboardState {
    /// Abort the scheduled reset, if any, and invalidate its epoch.
    pub(crate) fn cancel_reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        if let Some(handle) = self.pending_reset.take() {
            handle.abort();
        }
    }
}

/// Everything needed to render the output panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputView<'a> {
    pub intent: IntentId,
    pub original_prompt: &'a str,
    pub refined_prompt: &'a str,
    pub stats: PromptStats,
    pub copied: bool,
}
