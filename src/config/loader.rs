//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading shop
//! configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::RateSettings;

use super::types::{SettingsVersion, ShopConfig, ShopMetadata};

/// Loads and provides access to shop configuration.
///
/// # Directory Structure
///
/// ```text
/// config/detailing/
/// ├── shop.yaml            # Shop metadata
/// └── settings/
///     └── 2025-01-01.yaml  # Rate settings effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use detailing_payroll::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/detailing").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let settings = loader.settings_for(date).unwrap();
/// println!("Washer commission: {}%", settings.percentage_washer);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ShopConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a file is missing or contains invalid YAML, if the
    /// settings directory holds no versions, or if any version fails
    /// validation.
    ///
    /// ```no_run
    /// use detailing_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/detailing")?;
    /// # Ok::<(), detailing_payroll::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ShopMetadata>(&path.join("shop.yaml"))?;
        let versions = Self::load_settings(&path.join("settings"))?;

        debug!(
            shop = %metadata.name,
            versions = versions.len(),
            "Loaded shop configuration"
        );

        Ok(Self {
            config: ShopConfig::new(metadata, versions),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and validates every settings version in the directory.
    fn load_settings(settings_dir: &Path) -> EngineResult<Vec<SettingsVersion>> {
        let settings_dir_str = settings_dir.display().to_string();

        let entries = fs::read_dir(settings_dir).map_err(|_| EngineError::ConfigNotFound {
            path: settings_dir_str.clone(),
        })?;

        let mut versions = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: settings_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let version = Self::load_yaml::<SettingsVersion>(&path)?;
                version.settings.validate()?;
                versions.push(version);
            }
        }

        if versions.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no settings files found)", settings_dir_str),
            });
        }

        Ok(versions)
    }

    /// Returns the underlying shop configuration.
    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Returns the shop metadata.
    pub fn shop(&self) -> &ShopMetadata {
        self.config.shop()
    }

    /// Returns the rate settings in effect on `date`.
    pub fn settings_for(&self, date: NaiveDate) -> EngineResult<&RateSettings> {
        self.config.settings_for(date)
    }

    /// Returns the most recently effective rate settings.
    pub fn current_settings(&self) -> Option<&RateSettings> {
        self.config.current_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/detailing"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.shop().name, "Detailing Studio");
        assert_eq!(loader.shop().currency, "RUB");
        assert_eq!(loader.shop().timezone.as_deref(), Some("Europe/Moscow"));
        assert_eq!(loader.config().versions().len(), 2);
    }

    #[test]
    fn test_settings_for_first_half_of_year() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let settings = loader.settings_for(date).unwrap();

        assert_eq!(settings.minimum_payment_washer, dec("1000"));
        assert_eq!(settings.minimum_payment_admin, dec("1500"));
        assert_eq!(settings.percentage_washer_dryclean, dec("50"));
    }

    #[test]
    fn test_settings_for_second_half_of_year() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let settings = loader.settings_for(date).unwrap();

        assert_eq!(settings.minimum_payment_washer, dec("1200"));
        assert_eq!(settings.admin_dryclean_percentage, dec("12"));
    }

    #[test]
    fn test_current_settings_is_latest_version() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let current = loader.current_settings().unwrap();
        assert_eq!(current.minimum_payment_admin, dec("1800"));
    }

    #[test]
    fn test_settings_not_found_before_first_version() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        match loader.settings_for(date) {
            Err(EngineError::SettingsNotFound { date: d }) => assert_eq!(d, date),
            other => panic!("Expected SettingsNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("shop.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
