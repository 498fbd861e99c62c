//! # note-config
//!
//! Layered configuration loading for NeuralNote using figment.
//!
//! Sources, strongest first:
//! 1. Environment variables (`NEURALNOTE_*` prefix, `__` as separator)
//! 2. Project-level `.neuralnote/config.toml`
//! 3. User-level `~/.config/neuralnote/config.toml`
//! 4. Built-in defaults
//!
//! # Environment variables
//!
//! Figment maps `NEURALNOTE_ENRICHMENT__API_KEY` -> `enrichment.api_key`,
//! `NEURALNOTE_DASHBOARD__TIMEZONE` -> `dashboard.timezone`, etc.
//! A double underscore separates the section from the key.
//!
//! # Usage
//!
//! ```no_run
//! use note_config::NoteConfig;
//!
//! let config = NoteConfig::load_with_dotenv().expect("config");
//!
//! if config.enrichment.is_configured() {
//!     println!("Enrichment model: {}", config.enrichment.model);
//! }
//! ```

mod dashboard;
mod enrichment;
mod error;
mod general;

pub use dashboard::DashboardConfig;
pub use enrichment::EnrichmentConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NoteConfig {
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl NoteConfig {
    /// Resolve settings from defaults, both TOML files and the environment.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if the dashboard timezone is unknown.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// [`Self::load`] after importing a `.env` file, if one exists.
    ///
    /// The `.env` is read from the working directory, so its variables act
    /// like real environment variables. Used by the CLI.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// The layered provider stack, weakest first.
    ///
    /// Exposed so tests can extract from it or merge extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // ~/.config/neuralnote/config.toml
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // ./.neuralnote/config.toml
        let local_path = PathBuf::from(".neuralnote/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // NEURALNOTE_* wins over both files
        figment.merge(Env::prefixed("NEURALNOTE_").split("__"))
    }

    /// Reject values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown timezone or a zero
    /// enrichment timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dashboard.tz()?;
        if self.enrichment.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "enrichment.timeout_secs".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        Ok(())
    }

    /// `<config dir>/neuralnote/config.toml`, if the platform has a config dir.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("neuralnote").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = NoteConfig::default();
        assert!(!config.enrichment.is_configured());
        assert_eq!(config.dashboard.window_days, 30);
        assert_eq!(config.general.data_path, "neuralnote.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: NoteConfig = NoteConfig::figment().extract()?;
            assert!(!config.enrichment.is_configured());
            assert_eq!(config.dashboard.recent_limit, 5);
            Ok(())
        });
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let mut config = NoteConfig::default();
        config.enrichment.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "enrichment.timeout_secs"));
    }
}
