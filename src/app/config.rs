//! Configuration file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppConfig, AppError};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "ADLIB_CONFIG";
/// Config file looked up relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".adlib/config.toml";

/// Resolve which config file applies, if any.
///
/// Explicit paths (flag, then env var) must exist; the default path is optional.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_value: Option<PathBuf>,
    root: &Path,
) -> Result<Option<PathBuf>, AppError> {
    if let Some(path) = explicit.map(Path::to_path_buf).or(env_value) {
        if !path.is_file() {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path));
    }

    let default = root.join(DEFAULT_CONFIG_PATH);
    Ok(default.is_file().then_some(default))
}

/// Load configuration for the current process.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let root = std::env::current_dir()?;
    let env_value = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    load_config_from(explicit, env_value, &root)
}

pub fn load_config_from(
    explicit: Option<&Path>,
    env_value: Option<PathBuf>,
    root: &Path,
) -> Result<AppConfig, AppError> {
    match resolve_config_path(explicit, env_value, root)? {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            let content = fs::read_to_string(&path)?;
            parse_config_content(&content)
        }
        None => Ok(AppConfig::default()),
    }
}
