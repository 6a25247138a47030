//! Generative-AI client port definition.

use serde_json::Value;

use crate::domain::AppError;

/// One outbound generation call.
#[derive(Debug, Clone)]
pub struct ContentRequest {
    /// Task rules and style conditioning.
    pub system_instruction: String,
    /// The lyrics, unmodified.
    pub user_content: String,
    /// Structured-output contract the backend must honor.
    pub response_schema: Value,
}

/// Port for the generative-AI backend.
pub trait GenerationClient {
    /// Issue exactly one call and return the raw response text.
    fn generate_content(&self, request: &ContentRequest) -> Result<String, AppError>;
}
