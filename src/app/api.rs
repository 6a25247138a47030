//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::app::{AppContext, Studio, commands::generate, commands::prompt, config};
use crate::domain::library;
use crate::ports::ClipboardWriter;
use crate::services::{ArboardClipboard, HttpGeminiClient};

pub use crate::app::commands::generate::GenerateOptions;
pub use crate::domain::{AppError, GenerationResult, Prompt, StyleId, StyleInfo};

/// Create an `AppContext` backed by the Gemini HTTP client.
fn create_context(config_path: Option<&Path>) -> Result<AppContext<HttpGeminiClient>, AppError> {
    let config = config::load_config(config_path)?;
    let client = HttpGeminiClient::from_env_with_config(&config.gemini)?;
    Ok(AppContext::new(config, client))
}

/// Generate ad-libs for the given lyrics and styles.
pub fn generate(
    options: &GenerateOptions,
    config_path: Option<&Path>,
) -> Result<GenerationResult, AppError> {
    let ctx = create_context(config_path)?;
    generate::execute(&ctx, options)
}

/// Render the prompt that `generate` would send.
pub fn preview_prompt(
    lyrics: &str,
    styles: &[StyleId],
    config_path: Option<&Path>,
) -> Result<Prompt, AppError> {
    let config = config::load_config(config_path)?;
    prompt::preview(lyrics, styles, config.studio.default_style)
}

/// Open an interactive studio session.
pub fn open_studio(config_path: Option<&Path>) -> Result<Studio<HttpGeminiClient>, AppError> {
    let ctx = create_context(config_path)?;
    let default_style = ctx.config().studio.default_style;
    Ok(Studio::new(ctx.into_generator(), default_style))
}

/// Copy the full recording script for `result` to the system clipboard.
pub fn copy_script(result: &GenerationResult) -> Result<(), AppError> {
    let mut clipboard = ArboardClipboard::new()?;
    generate::copy_script(&mut clipboard, result)
}

/// Copy arbitrary text (a single ad-lib, a library entry) to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), AppError> {
    let mut clipboard = ArboardClipboard::new()?;
    clipboard.write_text(text)
}

/// Copy the sample library entry at the 1-based `position`.
pub fn copy_library_entry(position: usize) -> Result<&'static str, AppError> {
    let entry = library::sample(position).ok_or(AppError::UnknownLibraryEntry {
        position,
        available: library::SAMPLE_LIBRARY.len(),
    })?;
    copy_text(entry)?;
    Ok(entry)
}
