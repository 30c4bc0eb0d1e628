//! System clipboard access using arboard
//!
//! The clipboard instance is held for the application's lifetime to ensure proper
//! clipboard ownership on Linux.

use arboard::Clipboard;
use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available: {0}")]
    Unavailable(String),
    #[error("failed to write to clipboard: {0}")]
    Write(String),
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Plain-text access to the platform clipboard
pub trait SystemClipboard {
    fn set_text(&self, text: &str) -> ClipboardResult<()>;
}

/// Platform clipboard backed by arboard
///
/// On Linux, clipboard contents are owned by the application that placed them,
/// so the handle is created once and kept alive.
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Mutex<Option<Clipboard>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SystemClipboard for ArboardClipboard {
    fn set_text(&self, text: &str) -> ClipboardResult<()> {
        let mut inner = self.inner.lock();
        let mut clipboard = match inner.take() {
            Some(clipboard) => clipboard,
            None => {
                tracing::debug!("Initializing system clipboard");
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?
            }
        };
        let result = clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()));
        *inner = Some(clipboard);
        result?;
        tracing::debug!(len = text.len(), "Copied text to system clipboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_cause() {
        let err = ClipboardError::Unavailable("no display".to_string());
        assert_eq!(err.to_string(), "clipboard is not available: no display");

        let err = ClipboardError::Write("occupied".to_string());
        assert_eq!(err.to_string(), "failed to write to clipboard: occupied");
    }
}
