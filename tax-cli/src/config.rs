//! Optional TOML configuration file.
//!
//! ```toml
//! log_level = "debug"
//!
//! [engine]
//! cess_rate = "0.04"
//! section_80c_cap = 150000
//! new_regime_standard_deduction = 50000
//! ```
//!
//! Every key is optional; omitted keys keep their statutory defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tax_core::EngineConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config file '{path}': {reason}")]
    Invalid { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub engine: EngineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            engine: EngineConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(
        input: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(
        &self,
        path: &Path,
    ) -> Result<(), ConfigError> {
        let engine = &self.engine;
        let amounts = [
            ("cess_rate", engine.cess_rate),
            ("section_80c_cap", engine.section_80c_cap),
            ("section_80d_cap", engine.section_80d_cap),
            ("home_loan_interest_cap", engine.home_loan_interest_cap),
            ("new_regime_standard_deduction", engine.new_regime_standard_deduction),
        ];
        match amounts.iter().find(|(_, value)| value.is_sign_negative() && !value.is_zero()) {
            Some((key, value)) => Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: format!("engine.{key} must not be negative (got {value})"),
            }),
            None => Ok(()),
        }
    }

    /// Loads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }
}
