//! adlib: Generate style-conditioned ad-libs, signature tags, and lyric rewrites with Gemini.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use app::api::GenerateOptions;
pub use domain::{
    AppError, GenerationResult, LyricSuggestion, Prompt, StyleId, StyleInfo, StyleSet,
    build_prompt, list_styles, render_full_script,
};

/// Generate ad-libs for `lyrics` in the given styles.
///
/// An empty `styles` slice falls back to the configured default style.
pub fn generate(
    lyrics: &str,
    styles: &[StyleId],
    config_path: Option<&Path>,
) -> Result<GenerationResult, AppError> {
    let options = GenerateOptions { lyrics: lyrics.to_string(), styles: styles.to_vec() };
    app::api::generate(&options, config_path)
}

/// Write `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    app::api::copy_text(text)
}
