//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (port non-zero)
//! - Check that the upstream base URL can take an identifier segment
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LookupConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::LookupConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.port must be non-zero")]
    ZeroPort,

    #[error("upstream.base_url `{url}` is invalid: {reason}")]
    UpstreamUrl { url: String, reason: String },

    #[error("upstream.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.metrics_address `{0}` is not a socket address")]
    MetricsAddress(String),
}

/// Check a loaded configuration, collecting every error found.
pub fn validate_config(config: &LookupConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    if let Err(reason) = check_base_url(&config.upstream.base_url) {
        errors.push(ValidationError::UpstreamUrl {
            url: config.upstream.base_url.clone(),
            reason,
        });
    }

    if config.upstream.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_base_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme `{}`", other)),
    }
    if url.cannot_be_a_base() {
        return Err("cannot be a base URL".to_string());
    }
    Ok(())
}
