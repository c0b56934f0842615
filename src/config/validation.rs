//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones. Returns all validation
//! errors, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),
    #[error("auth is enabled but auth.users is empty")]
    NoAuthUsers,
    #[error("auth.users contains an empty username")]
    EmptyUsername,
    #[error("cors is enabled but cors.allowed_origins is empty")]
    NoCorsOrigins,
    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,
    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,
    #[error("observability.metrics_address {0:?} is not a valid socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a deserialized config. Pure function, collects every error.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.auth.enabled {
        if config.auth.users.is_empty() {
            errors.push(ValidationError::NoAuthUsers);
        }
        if config.auth.users.keys().any(|u| u.is_empty()) {
            errors.push(ValidationError::EmptyUsername);
        }
    }

    if config.cors.enabled && config.cors.allowed_origins.is_empty() {
        errors.push(ValidationError::NoCorsOrigins);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
