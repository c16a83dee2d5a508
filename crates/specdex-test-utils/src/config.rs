//! Configuration builders for tests.
//!
//! Use [`TestConfigBuilder`] to create customised [`AppConfig`] values without
//! repeating boilerplate across crate boundaries.

use specdex_config::AppConfig;

/// Fluent builder for [`AppConfig`] in tests.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .chunks_path("/tmp/chunks.json")
///     .default_limit(3)
///     .build();
/// ```
pub struct TestConfigBuilder {
    config: AppConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn chunks_path(mut self, path: &str) -> Self {
        self.config.store.chunks_path = path.to_string();
        self
    }

    pub fn default_limit(mut self, limit: usize) -> Self {
        self.config.search.default_limit = limit;
        self
    }

    pub fn preview_chars(mut self, chars: usize) -> Self {
        self.config.search.preview_chars = chars;
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
