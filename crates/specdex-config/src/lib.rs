#![deny(unsafe_code)]

//! Configuration loading and validation for Specdex.
//!
//! Loads TOML configuration files and validates them against expected ranges.
//! Provides the [`AppConfig`] type as the central configuration structure
//! shared by the CLI and the tool surface.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the default corpus path.
pub const CHUNKS_PATH_ENV: &str = "SPECDEX_CHUNKS_PATH";

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fragment store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Search engine configuration.
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration for the fragment store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the corpus file produced by the chunking pipeline.
    #[serde(default = "default_chunks_path")]
    pub chunks_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            chunks_path: default_chunks_path(),
        }
    }
}

fn default_chunks_path() -> String {
    std::env::var(CHUNKS_PATH_ENV).unwrap_or_else(|_| "data/chunks.json".to_string())
}

/// Configuration for search result shaping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result count used when a caller omits the limit argument.
    #[serde(default = "default_search_limit")]
    pub default_limit: usize,

    /// Preview truncation width (characters) for search results.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Preview truncation width for cause-lookup supporting excerpts.
    #[serde(default = "default_related_preview_chars")]
    pub related_preview_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_search_limit(),
            preview_chars: default_preview_chars(),
            related_preview_chars: default_related_preview_chars(),
        }
    }
}

fn default_search_limit() -> usize {
    5
}

fn default_preview_chars() -> usize {
    500
}

fn default_related_preview_chars() -> usize {
    400
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file at the given path using async I/O.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = tokio::fs::read_to_string(path).await?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.chunks_path.is_empty() {
            return Err(ConfigError::Validation(
                "store.chunks_path must not be empty".to_string(),
            ));
        }
        if self.search.default_limit == 0 {
            return Err(ConfigError::Validation(
                "search.default_limit must be at least 1".to_string(),
            ));
        }
        if self.search.preview_chars == 0 {
            return Err(ConfigError::Validation(
                "search.preview_chars must be at least 1".to_string(),
            ));
        }
        if self.search.related_preview_chars == 0 {
            return Err(ConfigError::Validation(
                "search.related_preview_chars must be at least 1".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got {:?}",
                valid_levels, self.logging.level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.search.default_limit, 5);
        assert_eq!(config.search.preview_chars, 500);
        assert_eq!(config.search.related_preview_chars, 400);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml = "";
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.search.default_limit, 5);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
            [store]
            chunks_path = "/var/lib/specdex/chunks.json"

            [search]
            default_limit = 10
            preview_chars = 300
            related_preview_chars = 200

            [logging]
            level = "debug"
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.store.chunks_path, "/var/lib/specdex/chunks.json");
        assert_eq!(config.search.default_limit, 10);
        assert_eq!(config.search.preview_chars, 300);
        assert_eq!(config.search.related_preview_chars, 200);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validation_rejects_zero_limit() {
        let toml = r#"
            [search]
            default_limit = 0
        "#;
        let result = AppConfig::parse(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_preview() {
        let toml = r#"
            [search]
            preview_chars = 0
        "#;
        let result = AppConfig::parse(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_empty_chunks_path() {
        let toml = r#"
            [store]
            chunks_path = ""
        "#;
        let result = AppConfig::parse(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_log_level() {
        let toml = r#"
            [logging]
            level = "verbose"
        "#;
        let result = AppConfig::parse(toml);
        assert!(result.is_err());
    }

    // ── Async file-based loading ──────────────────────────────────────

    #[tokio::test]
    async fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("specdex.toml");
        tokio::fs::write(&path, b"[search]\ndefault_limit = 3\n")
            .await
            .unwrap();

        let config = AppConfig::load(&path).await.unwrap();
        assert_eq!(config.search.default_limit, 3);
    }

    #[tokio::test]
    async fn test_load_nonexistent_file() {
        let result = AppConfig::load(Path::new("/nonexistent/file.toml")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_invalid_toml_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        tokio::fs::write(&path, b"not valid toml [[[").await.unwrap();

        let result = AppConfig::load(&path).await;
        assert!(result.is_err());
    }

    // ── Error display ─────────────────────────────────────────────────

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("bad value".to_string());
        assert_eq!(err.to_string(), "validation error: bad value");
    }
}
