use crate::config::types::ScrapeConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(ScrapeConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use pantera_scrape::config::load_config;
///
/// let config = load_config(Path::new("scrape.toml")).unwrap();
/// println!("Retry budget: {}", config.retry.max_attempts);
/// ```
pub fn load_config(path: &Path) -> Result<ScrapeConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: ScrapeConfig = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}
