use crate::domain::{AppError, StyleSet};

/// A validated generate action: non-blank lyrics and at least one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    lyrics: String,
    styles: StyleSet,
}

impl GenerationRequest {
    pub fn new(lyrics: impl Into<String>, styles: StyleSet) -> Result<Self, AppError> {
        let lyrics = lyrics.into();
        if lyrics.trim().is_empty() {
            return Err(AppError::EmptyLyrics);
        }
        if styles.is_empty() {
            return Err(AppError::NoStylesSelected);
        }
        Ok(Self { lyrics, styles })
    }

    /// Lyrics exactly as entered.
    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }

    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }
}
