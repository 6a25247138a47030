pub mod app_config;
pub mod loader;

pub use app_config::{AppConfig, GeminiApiConfig, StudioConfig};
pub use loader::{API_KEY_ENV, API_KEY_FALLBACK_ENV, api_key_from_env, parse_config_content};
