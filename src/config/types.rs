//! Configuration types for the detailing shop.
//!
//! These structures are deserialized from the YAML files in a shop
//! configuration directory.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::RateSettings;

/// Metadata about the shop.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopMetadata {
    /// The shop's display name.
    pub name: String,
    /// ISO currency code salaries are paid in.
    pub currency: String,
    /// IANA timezone the shop's business days are counted in.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Rate settings in effect from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsVersion {
    /// The first business day these settings apply to.
    pub effective_date: NaiveDate,
    /// Commission rates and minimums.
    pub settings: RateSettings,
}

/// The complete shop configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    metadata: ShopMetadata,
    /// Sorted oldest first.
    versions: Vec<SettingsVersion>,
}

impl ShopConfig {
    /// Creates a new ShopConfig, ordering the settings versions by date.
    pub fn new(metadata: ShopMetadata, versions: Vec<SettingsVersion>) -> Self {
        let mut sorted_versions = versions;
        sorted_versions.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            versions: sorted_versions,
        }
    }

    /// Returns the shop metadata.
    pub fn shop(&self) -> &ShopMetadata {
        &self.metadata
    }

    /// Returns all settings versions, oldest first.
    pub fn versions(&self) -> &[SettingsVersion] {
        &self.versions
    }

    /// Returns the settings in effect on `date`: the most recent version whose
    /// effective date is on or before it.
    ///
    /// # Errors
    ///
    /// Returns `SettingsNotFound` if every version takes effect after `date`.
    pub fn settings_for(&self, date: NaiveDate) -> EngineResult<&RateSettings> {
        self.versions
            .iter()
            .rev()
            .find(|version| version.effective_date <= date)
            .map(|version| &version.settings)
            .ok_or(EngineError::SettingsNotFound { date })
    }

    /// Returns the most recently effective settings version, if any.
    pub fn current_settings(&self) -> Option<&RateSettings> {
        self.versions.last().map(|version| &version.settings)
    }
}
