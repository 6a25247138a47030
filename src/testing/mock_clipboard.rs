use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// In-memory clipboard that keeps every write in order.
#[derive(Default)]
pub struct MockClipboard {
    writes: Vec<String>,
    unavailable: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write.
    pub fn failing() -> Self {
        Self { writes: vec![], unavailable: true }
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    pub fn last_write(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::Clipboard("clipboard unavailable".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CopyStatus;

    #[test]
    fn copy_reports_status_and_keeps_history() {
        let mut clipboard = MockClipboard::new();
        assert_eq!(clipboard.copy("Skrrt!"), CopyStatus::Copied);
        assert_eq!(clipboard.copy("Brrr!"), CopyStatus::Copied);
        assert_eq!(clipboard.writes(), ["Skrrt!".to_string(), "Brrr!".to_string()]);
        assert_eq!(clipboard.last_write(), Some("Brrr!"));
    }

    #[test]
    fn failed_copy_carries_message() {
        let mut clipboard = MockClipboard::failing();
        assert_eq!(
            clipboard.copy("Skrrt!"),
            CopyStatus::Failed("Clipboard error: clipboard unavailable".to_string())
        );
        assert!(clipboard.writes().is_empty());
    }
}
