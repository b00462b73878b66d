use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Remote book catalog (Gutendex) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// API root, without the `/books` suffix (default: https://gutendex.com)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30). Requests are never retried.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "https://gutendex.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("Literalura/{}", env!("CARGO_PKG_VERSION"))
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("literalura.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.catalog.base_url, "https://gutendex.com");
        assert_eq!(config.catalog.timeout_secs, 30);
        assert!(config.catalog.user_agent.starts_with("Literalura/"));
        assert_eq!(config.database.path.to_str().unwrap(), "literalura.db");
    }

    #[test]
    fn test_deserialize_catalog_section() {
        let toml = r#"
[catalog]
base_url = "http://localhost:8000"
timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:8000");
        assert_eq!(config.catalog.timeout_secs, 5);
        assert!(config.catalog.user_agent.starts_with("Literalura/"));
    }

    #[test]
    fn test_deserialize_with_custom_database_path() {
        let toml = r#"
[database]
path = "/data/books.sqlite"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.database.path.to_str().unwrap(), "/data/books.sqlite");
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let toml = r#"
[server]
port = 8080
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.timeout_secs, 30);
    }
}
