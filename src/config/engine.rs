// ABOUTME: Energy engine configuration with defaults, environment overrides, and validation
// ABOUTME: Default BMR formula, WHR risk threshold, BMI display precision, and macro split settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Engine Configuration
//!
//! Configuration covers presentation thresholds and defaults only. The
//! coefficients of the published equations, the body-mass energy density and
//! the macronutrient densities are constants and cannot be overridden here.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export NUTRIPLAN_DEFAULT_FORMULA=harris_benedict_1984
//!    export NUTRIPLAN_WHR_RISK_THRESHOLD=0.90
//!    ```
//!
//! 2. Default values (if env vars not set)

use super::error::ConfigError;
use crate::intelligence::algorithms::BmrFormula;
use crate::intelligence::macronutrients::MacroSplit;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Maximum allowed drift of the default macro split from 100%
const DEFAULT_SPLIT_EPSILON: f64 = 0.01;

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Formula used when a request does not name one
    #[serde(default)]
    pub default_formula: BmrFormula,
    /// Derived anthropometric metric settings
    #[serde(default)]
    pub anthropometrics: AnthropometricsConfig,
    /// Macronutrient distribution settings
    #[serde(default)]
    pub macros: MacroConfig,
}

/// Anthropometric display and classification settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnthropometricsConfig {
    /// Waist-hip ratio above which cardiometabolic risk is flagged: 0.85
    pub whr_risk_threshold: f64,
    /// Decimal places used when rendering BMI: 2
    pub bmi_display_decimals: u8,
}

/// Macronutrient distribution settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroConfig {
    /// Split applied when a request does not provide one (20/50/30)
    pub default_split: MacroSplit,
    /// Allowed deviation of a split's total from 100 before warning (percentage points)
    pub sum_tolerance_pct: f64,
}

impl Default for AnthropometricsConfig {
    fn default() -> Self {
        Self {
            whr_risk_threshold: 0.85,
            bmi_display_decimals: 2,
        }
    }
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            default_split: MacroSplit::new(20.0, 50.0, 30.0),
            sum_tolerance_pct: 0.0,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_formula: BmrFormula::default(),
            anthropometrics: AnthropometricsConfig::default(),
            macros: MacroConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a threshold, precision, or the default split is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let anthro = &self.anthropometrics;
        if !anthro.whr_risk_threshold.is_finite()
            || anthro.whr_risk_threshold <= 0.0
            || anthro.whr_risk_threshold > 2.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "WHR risk threshold must be in (0, 2]",
            ));
        }
        if anthro.bmi_display_decimals > 4 {
            return Err(ConfigError::ValueOutOfRange(
                "BMI display decimals must be at most 4",
            ));
        }

        let macros = &self.macros;
        if !(0.0..=10.0).contains(&macros.sum_tolerance_pct) {
            return Err(ConfigError::ValueOutOfRange(
                "Macro sum tolerance must be between 0 and 10 percentage points",
            ));
        }
        let split = &macros.default_split;
        if [split.protein_pct, split.carb_pct, split.fat_pct]
            .iter()
            .any(|pct| !(0.0..=100.0).contains(pct))
        {
            return Err(ConfigError::InvalidRange(
                "Default macro percentages must each be within 0-100",
            ));
        }
        if (split.total_pct() - 100.0).abs() > DEFAULT_SPLIT_EPSILON {
            return Err(ConfigError::InvalidWeights(
                "Default macro split must sum to 100",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("NUTRIPLAN_DEFAULT_FORMULA", &mut self.default_formula)?;

        Self::apply_env_var(
            "NUTRIPLAN_WHR_RISK_THRESHOLD",
            &mut self.anthropometrics.whr_risk_threshold,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_BMI_DECIMALS",
            &mut self.anthropometrics.bmi_display_decimals,
        )?;

        Self::apply_env_var(
            "NUTRIPLAN_MACRO_SUM_TOLERANCE",
            &mut self.macros.sum_tolerance_pct,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_DEFAULT_PROTEIN_PCT",
            &mut self.macros.default_split.protein_pct,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_DEFAULT_CARB_PCT",
            &mut self.macros.default_split.carb_pct,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_DEFAULT_FAT_PCT",
            &mut self.macros.default_split.fat_pct,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_formula, BmrFormula::MifflinStJeor1990);
        assert!((config.anthropometrics.whr_risk_threshold - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_unbalanced_default_split() {
        let mut config = EngineConfig::default();
        config.macros.default_split = MacroSplit::new(30.0, 50.0, 30.0);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        let mut config = EngineConfig::default();
        config.anthropometrics.whr_risk_threshold = 0.0;
        assert!(config.validate().is_err());

        config.anthropometrics.whr_risk_threshold = 2.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_excessive_precision() {
        let mut config = EngineConfig::default();
        config.anthropometrics.bmi_display_decimals = 9;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
