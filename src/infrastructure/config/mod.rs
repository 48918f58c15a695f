use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::error::{DiscoveryError, Result};
use crate::domain::schema::SamplingConfig;

/// Prefix for environment overrides, e.g. `SCHEMA_DISCOVERY_MAX_CHARS`
pub const ENV_PREFIX: &str = "SCHEMA_DISCOVERY_";

pub struct ConfigService {
    figment: Figment,
}

impl ConfigService {
    /// Defaults overridden by environment variables only
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(SamplingConfig::default()))
                .merge(Env::prefixed(ENV_PREFIX)),
        }
    }

    /// Defaults, then the TOML file at `path` (if it exists), then environment
    pub fn with_file(path: &Path) -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(SamplingConfig::default()))
                .merge(Toml::file(path))
                .merge(Env::prefixed(ENV_PREFIX)),
        }
    }

    pub fn sampling_config(&self) -> Result<SamplingConfig> {
        let config: SamplingConfig = self.figment.extract()?;
        config.validate().map_err(|e| {
            DiscoveryError::ConfigError(format!("Invalid sampling config: {}", e))
        })?;
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplingConfig {
    /// Load sampling limits from an optional TOML file plus the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => ConfigService::with_file(path).sampling_config(),
            None => ConfigService::new().sampling_config(),
        }
    }
}
