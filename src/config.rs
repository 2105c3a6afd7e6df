//! TOML-based estimator configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::estimator::{LocationTier, SavingsModel, TierMultipliers};

/// Top-level estimator configuration parsed from TOML.
///
/// Every field defaults to the published model, so an empty file (or
/// [`EstimatorConfig::standard`]) reproduces the reference results exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimatorConfig {
    /// Savings and sizing factors.
    #[serde(default)]
    pub model: ModelConfig,
    /// Sun multiplier per location tier.
    #[serde(default)]
    pub location: LocationConfig,
    /// CLI and server defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Savings and sizing factors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Fraction of energy needs covered (0.0–1.0].
    pub solar_offset: f64,
    /// Lifetime savings horizon (years, > 0).
    pub lifetime_years: u32,
    /// Installed kW per currency unit of annual bill (> 0).
    pub kw_per_annual_bill: f64,
    /// Tons of CO2 avoided per kW per year (>= 0).
    pub tons_co2_per_kw: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        let model = SavingsModel::default();
        Self {
            solar_offset: model.solar_offset,
            lifetime_years: model.lifetime_years,
            kw_per_annual_bill: model.kw_per_annual_bill,
            tons_co2_per_kw: model.tons_co2_per_kw,
        }
    }
}

/// Sun multiplier per location tier.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationConfig {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        let m = TierMultipliers::default();
        Self {
            high: m.high,
            medium: m.medium,
            low: m.low,
        }
    }
}

/// CLI and server defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Location key used when the CLI is not given `--location`.
    pub location: String,
    /// Port for `--serve` when `--port` is absent.
    pub port: u16,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            location: LocationTier::Medium.key().to_string(),
            port: 3000,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"model.solar_offset"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl EstimatorConfig {
    /// The published model with stock defaults.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let m = &self.model;

        if !(m.solar_offset > 0.0 && m.solar_offset <= 1.0) {
            errors.push(ConfigError::new("model.solar_offset", "must be in (0.0, 1.0]"));
        }
        if m.lifetime_years == 0 {
            errors.push(ConfigError::new("model.lifetime_years", "must be > 0"));
        }
        if !(m.kw_per_annual_bill > 0.0 && m.kw_per_annual_bill.is_finite()) {
            errors.push(ConfigError::new("model.kw_per_annual_bill", "must be > 0"));
        }
        if !(m.tons_co2_per_kw >= 0.0 && m.tons_co2_per_kw.is_finite()) {
            errors.push(ConfigError::new("model.tons_co2_per_kw", "must be >= 0"));
        }

        let loc = &self.location;
        for (field, value) in [
            ("location.high", loc.high),
            ("location.medium", loc.medium),
            ("location.low", loc.low),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                errors.push(ConfigError::new(field, "must be > 0"));
            }
        }
        if !(loc.high >= loc.medium && loc.medium >= loc.low) {
            errors.push(ConfigError::new(
                "location",
                "multipliers must satisfy high >= medium >= low",
            ));
        }

        errors
    }

    /// Builds the savings model described by this configuration.
    pub fn model(&self) -> SavingsModel {
        SavingsModel {
            solar_offset: self.model.solar_offset,
            lifetime_years: self.model.lifetime_years,
            kw_per_annual_bill: self.model.kw_per_annual_bill,
            tons_co2_per_kw: self.model.tons_co2_per_kw,
            multipliers: TierMultipliers {
                high: self.location.high,
                medium: self.location.medium,
                low: self.location.low,
            },
        }
    }
}
