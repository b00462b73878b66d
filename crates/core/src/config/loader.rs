use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

const ENV_PREFIX: &str = "LITERALURA_";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    base_figment()
        .merge(Toml::file(path))
        .merge(env_overrides())
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Built-in defaults with environment variable overrides, for running without a file
pub fn load_default_config() -> Result<Config, ConfigError> {
    base_figment()
        .merge(env_overrides())
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
}

// Nested keys use a double underscore: LITERALURA_CATALOG__BASE_URL
fn env_overrides() -> Env {
    Env::prefixed(ENV_PREFIX).split("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[catalog]
timeout_secs = 10
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.catalog.timeout_secs, 10);
    }

    #[test]
    fn test_load_config_from_str_wrong_type() {
        let toml = r#"
[catalog]
timeout_secs = "soon"
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/literalura.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[catalog]
base_url = "http://127.0.0.1:9000"

[database]
path = "catalog.db"
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.catalog.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.catalog.timeout_secs, 30);
        assert_eq!(config.database.path.to_str().unwrap(), "catalog.db");
    }

    #[test]
    fn test_env_override_nested_key() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LITERALURA_DATABASE__PATH", "from-env.db");
            let config = load_default_config().map_err(|e| e.to_string())?;
            assert_eq!(config.database.path.to_str().unwrap(), "from-env.db");
            assert_eq!(config.catalog.base_url, "https://gutendex.com");
            Ok(())
        });
    }
}
