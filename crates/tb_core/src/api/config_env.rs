use crate::config::BalancerConfig;
use std::path::Path;
use std::{env, fs};

pub(crate) const CONFIG_PATH_ENV: &str = "TB_CONFIG_PATH";

/// Config file named by `TB_CONFIG_PATH`, if the variable is set and non-blank.
pub(crate) fn config_from_env() -> Result<Option<BalancerConfig>, String> {
    let Ok(path) = env::var(CONFIG_PATH_ENV) else {
        return Ok(None);
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(None);
    }

    config_from_path(Path::new(path)).map(Some)
}

pub(crate) fn config_from_path(path: &Path) -> Result<BalancerConfig, String> {
    let shown = path.display();

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file from {CONFIG_PATH_ENV}='{shown}': {e}"))?;

    let config = BalancerConfig::from_json(&content)
        .map_err(|e| format!("Failed to parse config JSON from {CONFIG_PATH_ENV}='{shown}': {e}"))?;

    config
        .validate()
        .map_err(|e| format!("Invalid config from {CONFIG_PATH_ENV}='{shown}': {e}"))?;

    Ok(config)
}
