use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Catalog base URL is an http(s) URL
/// - Catalog timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let base_url = config.catalog.base_url.trim();
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.base_url cannot be empty".to_string(),
        ));
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "catalog.base_url must start with http:// or https://, got '{}'",
            base_url
        )));
    }

    if config.catalog.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, DatabaseConfig};

    fn config_with_catalog(catalog: CatalogConfig) -> Config {
        Config {
            catalog,
            database: DatabaseConfig::default(),
        }
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_timeout_zero_fails() {
        let config = config_with_catalog(CatalogConfig {
            timeout_secs: 0,
            ..Default::default()
        });
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_non_http_url_fails() {
        let config = config_with_catalog(CatalogConfig {
            base_url: "ftp://gutendex.com".to_string(),
            ..Default::default()
        });
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_url_fails() {
        let config = config_with_catalog(CatalogConfig {
            base_url: "   ".to_string(),
            ..Default::default()
        });
        assert!(validate_config(&config).is_err());
    }
}
