use crate::domain::{AppError, GenerationRequest, Prompt, StyleId, build_prompt};

use super::generate::resolve_styles;

/// Render the prompt a generation would send, without calling the service.
pub fn preview(lyrics: &str, styles: &[StyleId], default_style: StyleId) -> Result<Prompt, AppError> {
    let request = GenerationRequest::new(lyrics, resolve_styles(styles, default_style))?;
    build_prompt(request.lyrics(), request.styles())
}
