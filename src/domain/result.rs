//! Structured generation output and its decode step.
//!
//! The model is constrained by the response schema, but nothing guarantees it complied.
//! `GenerationResult::decode` checks every required field's presence and type, and that
//! suggestion fields are non-empty, before a value is constructed.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// A targeted rewrite of one lyric line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricSuggestion {
    pub original_line: String,
    pub suggested_change: String,
    pub reason: String,
}

/// Decoded output of one generation round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Lyrics with ad-libs inserted inline as parenthesized spans.
    pub annotated_lyrics: String,
    pub general_ad_libs: Vec<String>,
    pub vibe_analysis: String,
    pub signature_call: String,
    pub lyric_suggestions: Vec<LyricSuggestion>,
}

impl GenerationResult {
    /// Decode raw model output text.
    ///
    /// Any failure maps to `AppError::MalformedResponse`; a partially valid payload is
    /// rejected as a whole.
    pub fn decode(raw: &str) -> Result<Self, AppError> {
        let result: GenerationResult = serde_json::from_str(raw.trim())
            .map_err(|e| AppError::malformed(format!("invalid response JSON: {}", e)))?;
        result.validate()?;
        Ok(result)
    }

    fn validate(&self) -> Result<(), AppError> {
        for (index, suggestion) in self.lyric_suggestions.iter().enumerate() {
            let fields = [
                ("originalLine", &suggestion.original_line),
                ("suggestedChange", &suggestion.suggested_change),
                ("reason", &suggestion.reason),
            ];
            for (name, value) in fields {
                if value.trim().is_empty() {
                    return Err(AppError::malformed(format!(
                        "lyricSuggestions[{}].{} is empty",
                        index, name
                    )));
                }
            }
        }
        Ok(())
    }
}
