use crate::config::types::{CacheConfig, HttpConfig, RetryConfig, ScrapeConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &ScrapeConfig) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_retry_config(&config.retry)?;
    validate_cache_config(&config.cache)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates retry configuration
fn validate_retry_config(config: &RetryConfig) -> Result<(), ConfigError> {
    if config.max_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "max-attempts must be >= 1, got {}",
            config.max_attempts
        )));
    }

    if config.multiplier < 1.0 {
        return Err(ConfigError::Validation(format!(
            "multiplier must be >= 1.0, got {}",
            config.multiplier
        )));
    }

    Ok(())
}

/// Validates cache capacities
fn validate_cache_config(config: &CacheConfig) -> Result<(), ConfigError> {
    if config.pages < 1 {
        return Err(ConfigError::Validation(format!(
            "cache.pages must be >= 1, got {}",
            config.pages
        )));
    }

    if config.lookups < 1 {
        return Err(ConfigError::Validation(format!(
            "cache.lookups must be >= 1, got {}",
            config.lookups
        )));
    }

    Ok(())
}
