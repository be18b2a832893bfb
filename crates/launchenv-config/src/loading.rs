//! Config file resolution and loading.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::ConfigError;
use crate::types::LaunchEnvConfig;
use crate::validation::validate_config;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LAUNCHENV_CONFIG";

/// Where a config path came from.
///
/// Explicitly named files must exist; the default location is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Environment(PathBuf),
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Flag(p) | ConfigSource::Environment(p) | ConfigSource::Default(p) => p,
        }
    }

    fn is_required(&self) -> bool {
        !matches!(self, ConfigSource::Default(_))
    }

    fn kind(&self) -> &'static str {
        match self {
            ConfigSource::Flag(_) => "flag",
            ConfigSource::Environment(_) => "environment",
            ConfigSource::Default(_) => "default",
        }
    }
}

/// Resolve the config path.
///
/// Priority: CLI flag > `LAUNCHENV_CONFIG` > `~/.launchenv/config.toml`.
/// Falls back to `./.launchenv/config.toml` if the home directory cannot be determined.
pub fn resolve_config_source(flag: Option<&Path>) -> ConfigSource {
    if let Some(path) = flag {
        return ConfigSource::Flag(path.to_path_buf());
    }

    if let Some(value) = std::env::var_os(CONFIG_ENV_VAR)
        && !value.is_empty()
    {
        return ConfigSource::Environment(PathBuf::from(value));
    }

    let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    ConfigSource::Default(base.join(".launchenv").join("config.toml"))
}

/// Load and validate the config named by `flag`, the environment, or the default location.
pub fn load_config(flag: Option<&Path>) -> Result<LaunchEnvConfig, ConfigError> {
    let source = resolve_config_source(flag);
    load_config_from(&source)
}

pub fn load_config_from(source: &ConfigSource) -> Result<LaunchEnvConfig, ConfigError> {
    let path = source.path();

    if !path.exists() {
        if source.is_required() {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        debug!(
            event = "config.load_skipped",
            path = %path.display(),
            reason = "default config file not present"
        );
        return Ok(LaunchEnvConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    info!(
        event = "config.load_completed",
        path = %path.display(),
        source = source.kind(),
        system_vars = config.system.len(),
        policy = %config.malformed_user_variables
    );

    Ok(config)
}

/// Parse and validate config text.
pub fn parse_config(content: &str) -> Result<LaunchEnvConfig, ConfigError> {
    let config: LaunchEnvConfig = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}
