use tracing::warn;

use crate::domain::AppError;

/// Transient result of a clipboard copy. Reported to the user, never stored in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStatus {
    Copied,
    NothingToCopy,
    Failed(String),
}

/// Write-only access to the system clipboard.
///
/// Scripts, single ad-libs and library entries all go through `write_text`.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;

    /// Copy `text`, reporting the outcome instead of failing.
    fn copy(&mut self, text: &str) -> CopyStatus {
        match self.write_text(text) {
            Ok(()) => CopyStatus::Copied,
            Err(err) => {
                warn!(error = %err, "clipboard write failed");
                CopyStatus::Failed(err.to_string())
            }
        }
    }
}
