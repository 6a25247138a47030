//! Configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, StyleId};

/// Configuration loaded from `.adlib/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Gemini API configuration.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
    /// Session defaults.
    #[serde(default)]
    pub studio: StudioConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()?;
        Ok(())
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base URL of the Gemini REST API, ending in the version segment.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model used for generation.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "api_url must be a base URL: {}",
                self.api_url
            )));
        }
        Ok(())
    }

    /// `{api_url}models/{model}:generateContent`
    pub fn generate_content_url(&self) -> Result<Url, AppError> {
        let mut base = self.api_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(&format!("models/{}:generateContent", self.model.trim()))
            .map_err(|e| AppError::InvalidConfig(format!("invalid api_url: {}", e)))
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_timeout() -> u64 {
    60
}

/// Session defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudioConfig {
    /// Style selected at session start and after reset.
    #[serde(default = "default_style")]
    pub default_style: StyleId,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self { default_style: default_style() }
    }
}

fn default_style() -> StyleId {
    StyleId::DEFAULT
}
