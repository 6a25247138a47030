use arboard::Clipboard;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard backed by arboard.
pub struct ArboardClipboard {
    clipboard: Clipboard,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self, AppError> {
        let clipboard = Clipboard::new()
            .map_err(|e| AppError::Clipboard(format!("clipboard unavailable: {}", e)))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| AppError::Clipboard(format!("write rejected: {}", e)))?;
        debug!(chars = text.chars().count(), "copied to clipboard");
        Ok(())
    }
}
