//! Clipboard access for copying the refined prompt.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to set clipboard text: {0}")]
    Write(String),
}

/// Write-only text clipboard.
pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via arboard.
///
/// The handle is opened on first use, so constructing this never fails on
/// headless machines; the error surfaces from `set_text` instead.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not initialised".to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
