use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// User-facing message for any generation failure whose payload was unusable.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Failed to generate ad-libs. Please try again.";

/// User-facing message for failures of the outbound call itself.
pub const UPSTREAM_FAILURE_MESSAGE: &str =
    "The generation service could not be reached. Please try again.";

/// Library-wide error type for adlib operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file parsed but holds invalid values.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// No API credential in the environment.
    #[error("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,

    /// Style identifier is not in the catalog.
    #[error("Unknown style '{0}'. Run 'adlib styles' to list available styles.")]
    UnknownStyle(String),

    /// Lyrics are empty after trimming.
    #[error("Lyrics must not be empty")]
    EmptyLyrics,

    /// No style is selected.
    #[error("Select at least one style")]
    NoStylesSelected,

    /// The outbound generation call failed (network, auth, or service fault).
    #[error("Generation request failed: {message}")]
    Upstream { message: String, status: Option<u16> },

    /// The generation call succeeded but its payload could not be decoded.
    ///
    /// `detail` is for diagnostics only and never reaches the display string.
    #[error("{}", MALFORMED_RESPONSE_MESSAGE)]
    MalformedResponse { detail: String },

    /// Lyrics file could not be read.
    #[error("Failed to read lyrics file {}: {source}", path.display())]
    LyricsFile { path: PathBuf, source: io::Error },

    /// No lyrics file given and stdin is an interactive terminal.
    #[error("Provide lyrics with --file or pipe them on stdin")]
    NoLyricsInput,

    /// Sample library position outside `1..=available`.
    #[error("No library entry #{position} (choose 1-{available})")]
    UnknownLibraryEntry { position: usize, available: usize },

    /// JSON output could not be produced.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Prompt template rendering failed.
    #[error("Prompt rendering failed: {0}")]
    Prompt(String),

    /// Interactive terminal prompt failed.
    #[error("Terminal prompt failed: {0}")]
    Interaction(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn upstream<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::Upstream { message: message.into(), status }
    }

    pub(crate) fn malformed<S: Into<String>>(detail: S) -> Self {
        AppError::MalformedResponse { detail: detail.into() }
    }

    /// Short message shown to the end user when a generation fails.
    ///
    /// Upstream and decode failures collapse to generic text; their causes are logged.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Upstream { .. } => UPSTREAM_FAILURE_MESSAGE.to_string(),
            AppError::MalformedResponse { .. } => MALFORMED_RESPONSE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the failure came from the generation round trip rather than local input.
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, AppError::Upstream { .. } | AppError::MalformedResponse { .. })
    }
}
