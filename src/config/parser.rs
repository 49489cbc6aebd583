use super::RelayConfig;
use crate::errors::ConfigError;
use std::fs;

use tracing::info;

/// Loads the relay configuration from an optional TOML file and the environment
///
/// # Arguments
///
/// * `file_path` - Path to a TOML configuration file, `None` to start from defaults
///
/// # Returns
///
/// * `Result<RelayConfig, ConfigError>` - The resolved configuration
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The TOML content cannot be parsed into a RelayConfig
/// * An environment override holds an unparsable value
pub fn load_relay_config(file_path: Option<&str>) -> Result<RelayConfig, ConfigError> {
    let mut config = match file_path {
        Some(path) => {
            let toml_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_string(),
                source,
            })?;
            let config: RelayConfig = toml::from_str(&toml_str)?;
            info!("Loaded relay configuration from {}", path);
            config
        }
        None => RelayConfig::default(),
    };

    config.apply_overrides(|key| std::env::var(key).ok())?;
    Ok(config)
}
