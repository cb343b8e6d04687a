use serde::Deserialize;

use crate::types::{Channel, EncodeOptions, Mode, Threshold};

/// Encoding options as read from a TOML file. Missing keys keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncodeConfig {
    pub mode: Option<Mode>,
    pub threshold: Option<Threshold>,
    pub channel: Option<Channel>,
    pub strict: Option<bool>,
}

impl EncodeConfig {
    pub fn from_toml(toml_str: &str) -> Result<EncodeConfig, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Overlay the configured values onto `base`.
    pub fn apply(&self, base: EncodeOptions) -> EncodeOptions {
        EncodeOptions {
            mode: self.mode.unwrap_or(base.mode),
            threshold: self.threshold.unwrap_or(base.threshold),
            channel: self.channel.unwrap_or(base.channel),
            strict: self.strict.unwrap_or(base.strict),
        }
    }

    pub fn resolve(&self) -> EncodeOptions {
        self.apply(EncodeOptions::default())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Parse(String),
}
