//! # carve-config
//!
//! Layered configuration loading for carve using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CARVE_*` prefix, `__` as separator)
//! 2. Project-level `.carve/config.toml`
//! 3. User-level `~/.config/carve/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CARVE_SCAN__SKIP_TESTS` -> `scan.skip_tests`,
//! `CARVE_OUTPUT__FORMAT` -> `output.format`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use carve_config::CarveConfig;
//!
//! let config = CarveConfig::load_with_dotenv().expect("config");
//! if config.scan.skip_tests {
//!     println!("skipping tests for {:?}", config.scan.extensions);
//! }
//! ```

mod error;
mod output;
mod scan;

pub use error::ConfigError;
pub use output::{FORMATS, OutputConfig};
pub use scan::ScanConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".carve/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CarveConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl CarveConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`CarveConfig::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    /// Returns [`ConfigError::Figment`] when a source fails to parse and
    /// [`ConfigError::InvalidValue`] when validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    /// Same as [`CarveConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers can merge further providers (CLI flags) on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CARVE_").split("__"))
    }

    /// Check values serde cannot rule out on its own.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for an unknown output format or
    /// an empty extension list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !FORMATS.contains(&self.output.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: String::from("output.format"),
                reason: format!(
                    "'{}' is not one of {}",
                    self.output.format,
                    FORMATS.join(", ")
                ),
            });
        }
        if self.scan.extensions.iter().all(|ext| ext.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: String::from("scan.extensions"),
                reason: String::from("at least one extension is required"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("carve").join("config.toml"))
    }
}
