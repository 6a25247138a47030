use crate::app::AppContext;
use crate::domain::{AppError, GenerationResult, StyleId, StyleSet, render_full_script};
use crate::ports::{ClipboardWriter, GenerationClient};

/// Options for a one-shot generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Lyrics as entered.
    pub lyrics: String,
    /// Selected styles; empty means the configured default style.
    pub styles: Vec<StyleId>,
}

/// Selected styles, falling back to the configured default when none are given.
pub fn resolve_styles(styles: &[StyleId], default_style: StyleId) -> StyleSet {
    if styles.is_empty() {
        StyleSet::single(default_style)
    } else {
        styles.iter().copied().collect()
    }
}

/// Execute a single generation round trip.
pub fn execute<C>(ctx: &AppContext<C>, options: &GenerateOptions) -> Result<GenerationResult, AppError>
where
    C: GenerationClient,
{
    let styles = resolve_styles(&options.styles, ctx.config().studio.default_style);
    ctx.generator().generate(&options.lyrics, &styles)
}

/// Copy the full recording script for `result`.
pub fn copy_script(
    clipboard: &mut dyn ClipboardWriter,
    result: &GenerationResult,
) -> Result<(), AppError> {
    clipboard.write_text(&render_full_script(result))
}
