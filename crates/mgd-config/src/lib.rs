//! # mgd-config
//!
//! Layered configuration loading for Maggid using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MAGGID_*` prefix, `__` as separator)
//! 2. Project-level `.maggid/config.toml`
//! 3. User-level `~/.config/maggid/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MAGGID_REMOTE__URL` -> `remote.url`,
//! `MAGGID_REMIND__MORNING_HOUR` -> `remind.morning_hour`, etc. The `__`
//! (double underscore) separates nested config sections.

mod error;
mod general;
mod remind;
mod remote;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use remind::RemindConfig;
pub use remote::RemoteConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MaggidConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub remind: RemindConfig,
}

impl MaggidConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// This is the typical entry point for the CLI and tests.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".maggid/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("MAGGID_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("maggid").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = MaggidConfig::default();
        assert!(!config.remote.is_configured());
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.remind.morning_hour, 7);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: MaggidConfig = MaggidConfig::figment().extract()?;
            assert!(!config.remote.is_configured());
            assert_eq!(config.general.default_limit, 20);
            Ok(())
        });
    }

    #[test]
    fn env_vars_override_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("MAGGID_REMOTE__URL", "libsql://maggid.example.turso.io");
            jail.set_env("MAGGID_REMOTE__AUTH_TOKEN", "tok");
            jail.set_env("MAGGID_REMIND__EVENING_HOUR", "22");

            let config: MaggidConfig = MaggidConfig::figment().extract()?;
            assert!(config.remote.is_configured());
            assert_eq!(config.remind.evening_hour, 22);
            Ok(())
        });
    }

    #[test]
    fn project_toml_layers_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".maggid")?;
            jail.create_file(
                ".maggid/config.toml",
                r#"
                [general]
                default_limit = 50

                [remind]
                morning_hour = 6
                "#,
            )?;
            jail.set_env("MAGGID_REMIND__MORNING_HOUR", "5");

            let config: MaggidConfig = MaggidConfig::figment().extract()?;
            assert_eq!(config.general.default_limit, 50);
            // Env wins over the project file.
            assert_eq!(config.remind.morning_hour, 5);
            Ok(())
        });
    }
}
