//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{EnvironmentName, LookupConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "LOOKUP_CONFIG";
/// Environment variable overriding the listening port.
pub const PORT_VAR: &str = "PORT";
/// Environment variable naming the deployment environment.
pub const ENVIRONMENT_VAR: &str = "APP_ENV";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {var} value `{value}`")]
    Env { var: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LookupConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: LookupConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build the runtime configuration from the process environment.
///
/// Defaults, then the file named by `LOOKUP_CONFIG` if set, then `PORT` and
/// `APP_ENV` overrides.
pub fn load_from_env() -> Result<LookupConfig, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

/// Same as [`load_from_env`] with an injectable variable lookup.
pub fn resolve<F>(var: F) -> Result<LookupConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match var(CONFIG_PATH_VAR) {
        Some(path) => load_config(Path::new(&path))?,
        None => LookupConfig::default(),
    };

    apply_env_overrides(&mut config, &var)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides<F>(config: &mut LookupConfig, var: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = var(PORT_VAR).filter(|v| !v.is_empty()) {
        config.listener.port = port.trim().parse().map_err(|_| ConfigError::Env {
            var: PORT_VAR,
            value: port.clone(),
        })?;
    }

    if let Some(env) = var(ENVIRONMENT_VAR).filter(|v| !v.is_empty()) {
        config.environment = EnvironmentName(env);
    }

    Ok(())
}
