//! Configuration management for mathbox
//!
//! Settings are loaded in layers:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the
//! pattern `MATHBOX__<section>__<key>`:
//!
//! - `MATHBOX__SERVER__BIND_ADDR=0.0.0.0:9000`
//! - `MATHBOX__SERVER__LEDGER_PATH=/var/lib/mathbox/oplog`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/mathbox.toml`.
//! This can be overridden using the `MATHBOX_CONFIG` environment variable.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use config::{Environment, File};

const CONFIG_ENV_VAR: &str = "MATHBOX_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/mathbox.toml";
const ENV_PREFIX: &str = "MATHBOX";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            ledger_path: default_ledger_path(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    ([0, 0, 0, 0], 8080).into()
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("data/oplog")
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Priority, highest to lowest: environment variables (`MATHBOX__*`),
    /// TOML file (default: `config/mathbox.toml`), struct defaults.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors if file doesn't exist)
        let _ = dotenvy::dotenv();

        let config_path = env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        Self::load_from_path(config_path)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(config_path: PathBuf) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if config_path.exists() {
            tracing::info!("Loading configuration from: {}", config_path.display());
            builder = builder.add_source(File::from(config_path).required(false));
        } else {
            tracing::warn!(
                "Configuration file not found at {}, using defaults and environment overrides",
                config_path.display()
            );
        }

        // MATHBOX__SERVER__BIND_ADDR -> server.bind_addr
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_apply_without_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from_path(temp_dir.path().join("missing.toml")).unwrap();

        assert_eq!(config.server.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.server.ledger_path, PathBuf::from("data/oplog"));
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[server]
bind_addr = "127.0.0.1:9999"
ledger_path = "/tmp/mathbox-test/oplog"
        "#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.server.bind_addr.to_string(), "127.0.0.1:9999");
        assert_eq!(
            config.server.ledger_path,
            PathBuf::from("/tmp/mathbox-test/oplog")
        );
    }

    #[test]
    fn config_deserializes_from_raw_toml() {
        let config: Config =
            toml::from_str("[server]\nbind_addr = \"127.0.0.1:8081\"\n").unwrap();
        assert_eq!(config.server.bind_addr.to_string(), "127.0.0.1:8081");
        assert_eq!(config.server.ledger_path, PathBuf::from("data/oplog"));
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        fs::write(&config_path, "[server]\nbind_addr = \"127.0.0.1:7070\"\n").unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.server.bind_addr.to_string(), "127.0.0.1:7070");
        assert_eq!(config.server.ledger_path, PathBuf::from("data/oplog"));
    }
}
