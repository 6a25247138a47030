//! Generation client: prompt + schema out, validated result back.

use tracing::{debug, error};

use crate::domain::{
    AppError, GenerationRequest, GenerationResult, StyleSet, build_prompt, response_schema,
};
use crate::ports::{ContentRequest, GenerationClient};

const MAX_LOG_EXCERPT_CHARS: usize = 256;

/// Runs one stateless generation round trip per call over a `GenerationClient`.
///
/// No retry and no caching: every call issues exactly one outbound request.
pub struct Generator<C: GenerationClient> {
    client: C,
}

impl<C: GenerationClient> Generator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Validate inputs and generate.
    pub fn generate(&self, lyrics: &str, styles: &StyleSet) -> Result<GenerationResult, AppError> {
        let request = GenerationRequest::new(lyrics, styles.clone())?;
        self.generate_request(&request)
    }

    /// Generate for an already validated request.
    pub fn generate_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, AppError> {
        let prompt = build_prompt(request.lyrics(), request.styles())?;
        let content_request = ContentRequest {
            system_instruction: prompt.system_instruction,
            user_content: prompt.user_content,
            response_schema: response_schema(),
        };

        debug!(
            styles = %request.styles().labels(),
            instruction_chars = content_request.system_instruction.len(),
            lyric_chars = content_request.user_content.len(),
            "issuing generation call"
        );

        let raw = self.client.generate_content(&content_request).inspect_err(|e| {
            error!(error = %e, "generation call failed");
        })?;

        GenerationResult::decode(&raw).inspect_err(|e| {
            if let AppError::MalformedResponse { detail } = e {
                error!(%detail, excerpt = %excerpt(&raw), "failed to decode generation response");
            }
        })
    }
}

fn excerpt(raw: &str) -> String {
    let mut chars = raw.chars();
    let head: String = chars.by_ref().take(MAX_LOG_EXCERPT_CHARS).collect();
    if chars.next().is_some() { format!("{}...", head) } else { head }
}
