//! Configuration settings for the aequery service.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub data: DataConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            // Current directory
            PathBuf::from("config.toml"),
            PathBuf::from("aequery.toml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("aequery/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.model.base_url.is_empty() {
            return Err(ConfigError::MissingField("model.base_url".to_string()).into());
        }
        if self.model.model.is_empty() {
            return Err(ConfigError::MissingField("model.model".to_string()).into());
        }
        if self.data.csv_path.is_empty() {
            return Err(ConfigError::MissingField("data.csv_path".to_string()).into());
        }
        if self.model.timeout_secs == 0 {
            return Err(ConfigError::Invalid("model.timeout_secs must be > 0".to_string()).into());
        }
        Ok(())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP bind port.
    pub http_port: u16,
    /// Bind address.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            bind: "127.0.0.1".to_string(),
        }
    }
}

/// Language-model client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Base URL for the OpenAI-compatible API.
    pub base_url: String,
    /// Model name.
    pub model: String,
    /// API key (loaded from environment if not set).
    pub api_key: Option<String>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            temperature: 0.0,
            timeout_secs: 30,
        }
    }
}

impl ModelConfig {
    /// Resolve the API key from config or the `OPENAI_API_KEY` env var.
    ///
    /// `None` means no credential is configured, which selects the
    /// rule-based resolver strategy at construction time.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|k| !k.is_empty())
    }
}

/// Dataset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the ADAE CSV file.
    pub csv_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: "data/adae.csv".to_string(),
        }
    }
}

impl DataConfig {
    /// The CSV path, with the `ADAE_CSV_PATH` env var taking precedence.
    pub fn resolved_path(&self) -> PathBuf {
        std::env::var("ADAE_CSV_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(&self.csv_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.model.model, "gpt-4o-mini");
        assert_eq!(config.data.csv_path, "data/adae.csv");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [server]
            http_port = 9090

            [model]
            model = "gpt-4o"
            timeout_secs = 10

            [data]
            csv_path = "/tmp/adae.csv"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.server.http_port, 9090);
        assert_eq!(config.model.model, "gpt-4o");
        assert_eq!(config.model.timeout_secs, 10);
        assert_eq!(config.data.csv_path, "/tmp/adae.csv");
    }

    #[test]
    fn test_validate_missing_base_url() {
        let toml = r#"
            [model]
            base_url = ""
        "#;

        let result = Config::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml = r#"
            [model]
            timeout_secs = 0
        "#;

        let result = Config::from_str(toml);
        assert!(result.is_err());
    }
}
