//! Configuration parsing and credential lookup.

use crate::domain::{AppConfig, AppError};

/// Primary API credential variable.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Fallback credential variable.
pub const API_KEY_FALLBACK_ENV: &str = "API_KEY";

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Pick the API key from the primary or fallback variable value, ignoring blanks.
pub fn resolve_api_key(primary: Option<String>, fallback: Option<String>) -> Result<String, AppError> {
    primary
        .into_iter()
        .chain(fallback)
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .ok_or(AppError::MissingApiKey)
}

/// Read the API key from the environment.
pub fn api_key_from_env() -> Result<String, AppError> {
    resolve_api_key(std::env::var(API_KEY_ENV).ok(), std::env::var(API_KEY_FALLBACK_ENV).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StyleId;

    #[test]
    fn empty_content_yields_defaults() {
        let config = parse_config_content("").unwrap();
        assert_eq!(config.gemini.model, "gemini-3-flash-preview");
        assert_eq!(config.gemini.timeout_secs, 60);
        assert_eq!(config.studio.default_style, StyleId::Trap);
    }

    #[test]
    fn parses_sections() {
        let content = r#"
[gemini]
api_url = "http://localhost:9000/v1beta/"
model = "gemini-2.5-pro"
timeout_secs = 15

[studio]
default_style = "drill"
"#;
        let config = parse_config_content(content).unwrap();
        assert_eq!(config.gemini.api_url.as_str(), "http://localhost:9000/v1beta/");
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.timeout_secs, 15);
        assert_eq!(config.studio.default_style, StyleId::Drill);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = parse_config_content("[gemini]\nretries = 3\n").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    fn rejects_invalid_values() {
        let err = parse_config_content("[gemini]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn api_key_prefers_primary_and_skips_blanks() {
        assert_eq!(resolve_api_key(Some("a".into()), Some("b".into())).unwrap(), "a");
        assert_eq!(resolve_api_key(Some("  ".into()), Some("b".into())).unwrap(), "b");
        assert!(matches!(resolve_api_key(None, Some("".into())), Err(AppError::MissingApiKey)));
    }
}
