// ABOUTME: Total energy expenditure estimation from BMR with activity and clinical factors
// ABOUTME: Activity level presets, injury/stress factors, pregnancy supplement, and additive adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Total Energy Expenditure (TEE)
//!
//! `TEE = BMR x activity x injury + extra + goal + pregnancy`
//!
//! Only the BMR is scaled. The additive terms are applied after the
//! multipliers and the result is never clamped, so a large deficit can produce
//! a negative value.
//!
//! # Scientific References
//!
//! - `McArdle` et al. (2010) - Exercise Physiology (activity factors)
//! - Long, C.L. et al. (1979). "Metabolic response to injury and illness."
//!   *JPEN*, 3(6), 452-456 (injury factors)
//! - Institute of Medicine (2005). *Dietary Reference Intakes for Energy* (pregnancy increments)

use crate::constants::pregnancy::{
    FIRST_TRIMESTER_KCAL, SECOND_TRIMESTER_KCAL, THIRD_TRIMESTER_KCAL,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activity level for TEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    #[default]
    Sedentary,
    /// Lightly active (1-3 days/week)
    Light,
    /// Moderately active (3-5 days/week)
    Moderate,
    /// Intense (6-7 days/week)
    Intense,
    /// Athletic (hard training 2x/day)
    Athletic,
}

impl ActivityLevel {
    /// All presets, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Intense,
        Self::Athletic,
    ];

    /// Multiplier applied to BMR
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Sedentary => 1.200,
            Self::Light => 1.375,
            Self::Moderate => 1.550,
            Self::Intense => 1.725,
            Self::Athletic => 1.900,
        }
    }

    /// Stable key used in JSON and on the command line
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Intense => "intense",
            Self::Athletic => "athletic",
        }
    }
}

/// Clinical condition presets for the injury/stress factor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalCondition {
    /// No clinical stress
    #[default]
    Healthy,
    /// Minor surgery
    MinorSurgery,
    /// Skeletal trauma
    SkeletalTrauma,
    /// Major surgery
    MajorSurgery,
    /// Moderate infection
    ModerateInfection,
    /// Severe infection
    SevereInfection,
}

impl ClinicalCondition {
    /// All presets, mildest first
    pub const ALL: [Self; 6] = [
        Self::Healthy,
        Self::MinorSurgery,
        Self::SkeletalTrauma,
        Self::MajorSurgery,
        Self::ModerateInfection,
        Self::SevereInfection,
    ];

    /// Multiplier applied to BMR
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Healthy => 1.000,
            Self::MinorSurgery => 1.100,
            Self::SkeletalTrauma => 1.200,
            Self::MajorSurgery => 1.300,
            Self::ModerateInfection => 1.400,
            Self::SevereInfection => 1.500,
        }
    }

    /// Stable key used in JSON and on the command line
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::MinorSurgery => "minor_surgery",
            Self::SkeletalTrauma => "skeletal_trauma",
            Self::MajorSurgery => "major_surgery",
            Self::ModerateInfection => "moderate_infection",
            Self::SevereInfection => "severe_infection",
        }
    }
}

/// Activity multiplier: a named preset or an arbitrary positive factor
///
/// Serializes untagged, so `"moderate"` and `1.45` are both accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ActivityFactor {
    /// Named preset
    Preset(ActivityLevel),
    /// Custom multiplier
    Custom(f64),
}

/// Injury/stress multiplier: a named preset or an arbitrary positive factor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum InjuryFactor {
    /// Named preset
    Preset(ClinicalCondition),
    /// Custom multiplier
    Custom(f64),
}

impl Default for ActivityFactor {
    fn default() -> Self {
        Self::Preset(ActivityLevel::default())
    }
}

impl Default for InjuryFactor {
    fn default() -> Self {
        Self::Preset(ClinicalCondition::default())
    }
}

fn checked_factor(value: f64, field: &str) -> AppResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::out_of_range(format!("{field} must be a positive number, got {value}"))
            .with_field(field))
    }
}

impl ActivityFactor {
    /// Raw multiplier
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Preset(level) => level.factor(),
            Self::Custom(factor) => factor,
        }
    }

    /// Multiplier, rejecting non-positive or non-finite custom factors
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a custom factor that is not a positive number
    pub fn checked_value(self) -> AppResult<f64> {
        checked_factor(self.value(), "activity_factor")
    }
}

impl InjuryFactor {
    /// Raw multiplier
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Preset(condition) => condition.factor(),
            Self::Custom(factor) => factor,
        }
    }

    /// Multiplier, rejecting non-positive or non-finite custom factors
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a custom factor that is not a positive number
    pub fn checked_value(self) -> AppResult<f64> {
        checked_factor(self.value(), "injury_factor")
    }
}

impl FromStr for ActivityFactor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Some(level) = ActivityLevel::ALL.into_iter().find(|l| l.key() == key) {
            return Ok(Self::Preset(level));
        }
        key.parse::<f64>().map(Self::Custom).map_err(|_| {
            AppError::invalid_input(format!(
                "Unknown activity level: '{key}'. Use a preset (sedentary, light, moderate, intense, athletic) or a number"
            ))
            .with_field("activity_factor")
        })
    }
}

impl FromStr for InjuryFactor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Some(condition) = ClinicalCondition::ALL.into_iter().find(|c| c.key() == key) {
            return Ok(Self::Preset(condition));
        }
        key.parse::<f64>().map(Self::Custom).map_err(|_| {
            let valid: Vec<&str> = ClinicalCondition::ALL.iter().map(|c| c.key()).collect();
            AppError::invalid_input(format!(
                "Unknown injury factor: '{key}'. Use a preset ({}) or a number",
                valid.join(", ")
            ))
            .with_field("injury_factor")
        })
    }
}

impl fmt::Display for ActivityFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(level) => write!(f, "{} ({:.3})", level.key(), level.factor()),
            Self::Custom(factor) => write!(f, "custom ({factor:.3})"),
        }
    }
}

impl fmt::Display for InjuryFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(condition) => write!(f, "{} ({:.3})", condition.key(), condition.factor()),
            Self::Custom(factor) => write!(f, "custom ({factor:.3})"),
        }
    }
}

/// Pregnancy stage for the energy supplement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PregnancyStage {
    /// Not pregnant
    #[default]
    NotPregnant,
    /// First trimester
    FirstTrimester,
    /// Second trimester
    SecondTrimester,
    /// Third trimester
    ThirdTrimester,
}

impl PregnancyStage {
    /// Additional kcal/day for the stage
    #[must_use]
    pub const fn kcal(self) -> f64 {
        match self {
            Self::NotPregnant => 0.0,
            Self::FirstTrimester => FIRST_TRIMESTER_KCAL,
            Self::SecondTrimester => SECOND_TRIMESTER_KCAL,
            Self::ThirdTrimester => THIRD_TRIMESTER_KCAL,
        }
    }
}

/// Additive terms applied after the multipliers (kcal/day)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TeeAdjustments {
    /// Calories from extra activity (MET-based)
    pub extra_met_kcal: f64,
    /// Daily goal adjustment, signed
    pub goal_adjustment_kcal: f64,
    /// Pregnancy supplement
    pub pregnancy_kcal: f64,
}

impl TeeAdjustments {
    /// Sum of all additive terms
    #[must_use]
    pub fn total(&self) -> f64 {
        self.extra_met_kcal + self.goal_adjustment_kcal + self.pregnancy_kcal
    }
}

/// BMR and TEE pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalculationResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr_kcal: f64,
    /// Total energy expenditure (kcal/day)
    pub tee_kcal: f64,
}

/// Calculate Total Energy Expenditure
///
/// Formula: `bmr x activity_factor x injury_factor + extra_met_kcal + goal_adjustment_kcal + pregnancy_kcal`
///
/// No clamping is applied.
#[must_use]
pub fn calculate_tee(
    bmr_kcal: f64,
    activity_factor: f64,
    injury_factor: f64,
    extra_met_kcal: f64,
    goal_adjustment_kcal: f64,
    pregnancy_kcal: f64,
) -> f64 {
    bmr_kcal * activity_factor * injury_factor + extra_met_kcal + goal_adjustment_kcal + pregnancy_kcal
}

/// Calculate TEE with the additive terms bundled
#[must_use]
pub fn calculate_tee_with(
    bmr_kcal: f64,
    activity_factor: f64,
    injury_factor: f64,
    adjustments: &TeeAdjustments,
) -> f64 {
    calculate_tee(
        bmr_kcal,
        activity_factor,
        injury_factor,
        adjustments.extra_met_kcal,
        adjustments.goal_adjustment_kcal,
        adjustments.pregnancy_kcal,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tee_pure_multiplication() {
        let tee = calculate_tee(1500.0, 1.2, 1.0, 0.0, 0.0, 0.0);
        assert!((tee - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn test_additive_terms_are_not_scaled() {
        let tee = calculate_tee(1000.0, 1.5, 1.2, 100.0, -200.0, 340.0);
        assert!((tee - (1800.0 + 100.0 - 200.0 + 340.0)).abs() < 1e-9);
    }

    #[test]
    fn test_negative_result_passes_through() {
        let tee = calculate_tee(1000.0, 1.2, 1.0, 0.0, -2000.0, 0.0);
        assert!((tee - -800.0).abs() < 1e-9);
    }

    #[test]
    fn test_tee_with_adjustments_matches_positional() {
        let adjustments = TeeAdjustments {
            extra_met_kcal: 150.0,
            goal_adjustment_kcal: -500.0,
            pregnancy_kcal: PregnancyStage::ThirdTrimester.kcal(),
        };
        let bundled = calculate_tee_with(1600.0, 1.55, 1.1, &adjustments);
        let positional = calculate_tee(1600.0, 1.55, 1.1, 150.0, -500.0, 452.0);
        assert!((bundled - positional).abs() < 1e-9);
        assert!((adjustments.total() - 102.0).abs() < 1e-9);
    }

    #[test]
    fn test_preset_factors() {
        assert!((ActivityLevel::Sedentary.factor() - 1.2).abs() < f64::EPSILON);
        assert!((ActivityLevel::Athletic.factor() - 1.9).abs() < f64::EPSILON);
        assert!((ClinicalCondition::Healthy.factor() - 1.0).abs() < f64::EPSILON);
        assert!((ClinicalCondition::SevereInfection.factor() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pregnancy_supplements() {
        assert!(PregnancyStage::NotPregnant.kcal().abs() < f64::EPSILON);
        assert!(PregnancyStage::FirstTrimester.kcal().abs() < f64::EPSILON);
        assert!((PregnancyStage::SecondTrimester.kcal() - 340.0).abs() < f64::EPSILON);
        assert!((PregnancyStage::ThirdTrimester.kcal() - 452.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_factor_parsing() {
        assert_eq!(
            "Moderate".parse::<ActivityFactor>().unwrap(),
            ActivityFactor::Preset(ActivityLevel::Moderate)
        );
        assert_eq!("1.45".parse::<ActivityFactor>().unwrap(), ActivityFactor::Custom(1.45));
        assert_eq!(
            "major_surgery".parse::<InjuryFactor>().unwrap(),
            InjuryFactor::Preset(ClinicalCondition::MajorSurgery)
        );
        assert!("couch".parse::<ActivityFactor>().is_err());
    }

    #[test]
    fn test_untagged_serde_accepts_names_and_numbers() {
        let preset: ActivityFactor = serde_json::from_str("\"intense\"").unwrap();
        assert!((preset.value() - 1.725).abs() < f64::EPSILON);

        let custom: InjuryFactor = serde_json::from_str("1.25").unwrap();
        assert!((custom.value() - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_checked_value_rejects_non_positive_custom() {
        assert!(ActivityFactor::Custom(0.0).checked_value().is_err());
        assert!(InjuryFactor::Custom(f64::NAN).checked_value().is_err());
        assert!(ActivityFactor::default().checked_value().is_ok());
    }
}
