// ABOUTME: Top-level engine configuration combining anthropometry, trend, and advisor settings
// ABOUTME: Global singleton with environment overrides and cross-field validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! Engine Configuration
//!
//! One struct per engine component, combined here and exposed as a process
//! global. Thresholds default to the growth reference constants in
//! `sprout-core`; a handful of environment overrides cover the values most
//! likely to be recalibrated in deployment.

mod advisor;
mod anthropometry;
mod error;
mod trend;

pub use advisor::{AdvisorConfig, AdvisorGoals, AdvisorMessages};
pub use anthropometry::{AnthropometryConfig, BmiBands, MeasurementBounds};
pub use error::ConfigError;
pub use trend::TrendConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;

/// Combined configuration for the analytics engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Anthropometric classifier settings
    pub anthropometry: AnthropometryConfig,
    /// Growth trend analyzer settings
    pub trend: TrendConfig,
    /// Intervention advisor settings
    pub advisor: AdvisorConfig,
}

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override value fails to parse or the final
    /// configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        override_f64("SPROUT_BMI_SEVERE_MAX", |v| {
            self.anthropometry.bmi_bands.severe_malnutrition_max = v;
        })?;
        override_f64("SPROUT_BMI_MALNUTRITION_MAX", |v| {
            self.anthropometry.bmi_bands.malnutrition_max = v;
        })?;
        override_f64("SPROUT_BMI_NORMAL_MAX", |v| {
            self.anthropometry.bmi_bands.normal_max = v;
        })?;
        override_f64("SPROUT_BMI_OVERWEIGHT_MAX", |v| {
            self.anthropometry.bmi_bands.overweight_max = v;
        })?;
        override_f64("SPROUT_TREND_STABILITY_TOLERANCE", |v| {
            self.trend.bmi_stability_tolerance = v;
        })?;
        Ok(())
    }

    /// Validate cross-field constraints
    fn validate(&self) -> Result<(), ConfigError> {
        let bands = &self.anthropometry.bmi_bands;
        if bands.severe_malnutrition_max >= bands.malnutrition_max
            || bands.malnutrition_max >= bands.normal_max
            || bands.normal_max >= bands.overweight_max
        {
            return Err(ConfigError::InvalidRange(
                "BMI band cut points must be strictly increasing",
            ));
        }

        let bounds = &self.anthropometry.bounds;
        if bounds.height_min_cm >= bounds.height_max_cm
            || bounds.weight_min_kg >= bounds.weight_max_kg
        {
            return Err(ConfigError::InvalidRange(
                "measurement bounds must have min < max",
            ));
        }

        if self.trend.bmi_stability_tolerance <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "bmi_stability_tolerance must be positive",
            ));
        }
        if self.trend.rapid_bmi_gain <= 0.0 || self.trend.rapid_bmi_loss >= 0.0 {
            return Err(ConfigError::InvalidRange(
                "rapid_bmi_gain must be positive and rapid_bmi_loss negative",
            ));
        }
        if self.trend.days_per_month <= 0 {
            return Err(ConfigError::InvalidRange("days_per_month must be positive"));
        }

        Ok(())
    }
}

fn override_f64(var: &str, mut apply: impl FnMut(f64)) -> Result<(), ConfigError> {
    if let Ok(raw) = env::var(var) {
        let value = raw
            .parse::<f64>()
            .map_err(|e| ConfigError::Parse(format!("{var}={raw}: {e}")))?;
        apply(value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_bands_fail_validation() {
        let mut config = EngineConfig::default();
        config.anthropometry.bmi_bands.normal_max = 10.0;
        assert!(config.validate().is_err());
    }
}
