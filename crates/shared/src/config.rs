//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Draft store configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

/// Draft store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Seconds to wait for an external write before failing it.
    #[serde(default = "default_write_timeout_secs")]
    pub write_timeout_secs: u64,
    /// Whether the projected collection is ordered newest-first.
    #[serde(default = "default_newest_first")]
    pub newest_first: bool,
}

fn default_write_timeout_secs() -> u64 {
    10
}

fn default_newest_first() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            write_timeout_secs: default_write_timeout_secs(),
            newest_first: default_newest_first(),
        }
    }
}

impl StoreConfig {
    /// Returns the write timeout as a `Duration`.
    #[must_use]
    pub const fn write_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.write_timeout_secs)
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("APBD").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.write_timeout_secs, 10);
        assert!(config.newest_first);
        assert_eq!(config.write_timeout(), std::time::Duration::from_secs(10));
    }

    #[test]
    fn test_app_config_default_has_store() {
        let config = AppConfig::default();
        assert_eq!(config.store.write_timeout_secs, 10);
    }
}
