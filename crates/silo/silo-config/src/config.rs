use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SiloConfig {
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
    /// Comma-separated batch fed to the engine by the driver
    #[serde(default = "defaults::input")]
    pub input: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

mod defaults {
    pub fn log_level() -> String {
        "info".into()
    }

    pub fn input() -> String {
        "A1, A1, B5, C1".into()
    }
}

impl Default for SiloConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level(),
            input: defaults::input(),
        }
    }
}

impl SiloConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let toml_to_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&toml_to_str)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let silo_config: SiloConfig = toml::from_str(raw)?;
        silo_config.validate()?;
        Ok(silo_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".into()));
        }
        Ok(())
    }
}
