//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::domain::configuration::api_key_from_env;
use crate::domain::{AppError, GeminiApiConfig};
use crate::ports::{ContentRequest, GenerationClient};

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";

/// HTTP client for the Gemini API.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        if api_key.trim().is_empty() {
            return Err(AppError::MissingApiKey);
        }
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            endpoint: config.generate_content_url()?,
            model: config.model.clone(),
            client,
        })
    }

    /// Create from environment variables with the given configuration.
    pub fn from_env_with_config(config: &GeminiApiConfig) -> Result<Self, AppError> {
        Self::new(api_key_from_env()?, config)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    system_instruction: ApiContent<'a>,
    contents: Vec<ApiContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct ApiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<ApiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl ApiResponse {
    /// Concatenated text of the first candidate.
    fn into_text(self) -> Result<String, AppError> {
        let block_reason = self.prompt_feedback.and_then(|feedback| feedback.block_reason);
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = block_reason.unwrap_or_else(|| "no candidates returned".to_string());
            return Err(AppError::upstream(format!("Empty response: {}", reason), None));
        };

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect::<String>())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(AppError::upstream(
                format!("Candidate has no text (finish reason: {})", reason),
                None,
            ));
        }
        Ok(text)
    }
}

impl GenerationClient for HttpGeminiClient {
    fn generate_content(&self, request: &ContentRequest) -> Result<String, AppError> {
        let api_request = ApiRequest {
            system_instruction: ApiContent {
                role: None,
                parts: vec![ApiPart { text: &request.system_instruction }],
            },
            contents: vec![ApiContent {
                role: Some("user"),
                parts: vec![ApiPart { text: &request.user_content }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: &request.response_schema,
            },
        };

        debug!(model = %self.model, endpoint = %self.endpoint, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, JSON_MIME_TYPE)
            .json(&api_request)
            .send()
            .map_err(|e| AppError::upstream(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();

        if status.is_success() {
            let api_response: ApiResponse = response.json().map_err(|e| {
                AppError::upstream(format!("Failed to parse API envelope: {}", e), Some(status.as_u16()))
            })?;
            api_response.into_text()
        } else {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::upstream(
                format!("API error ({}): {}", status.as_u16(), error_text),
                Some(status.as_u16()),
            ))
        }
    }
}
