// ABOUTME: Anthropometric input consumed by BMR formulas
// ABOUTME: Sex dispatch rules and validated weight/height/age/fat-free-mass bundle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Sex recorded for a patient
///
/// Deserialization goes through [`Sex::from_str_lossy`]: any casing is
/// accepted and unrecognized values become `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Not recorded as male or female
    Other,
}

impl Sex {
    /// Parse sex from string, mapping unknown values to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "masculino" => Self::Male,
            "female" | "f" | "feminino" => Self::Female,
            _ => Self::Other,
        }
    }

    /// Whether the male coefficient set of a formula applies
    ///
    /// Every supported equation was fitted on a binary male/female sample, so
    /// `Other` is evaluated with the female coefficients. This is a known loss
    /// of information, not a clinical recommendation.
    #[must_use]
    pub const fn uses_male_coefficients(self) -> bool {
        matches!(self, Self::Male)
    }

}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Body measurements for a single BMR evaluation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnthropometricInput {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age_years: u32,
    /// Sex used for coefficient dispatch
    pub sex: Sex,
    /// Fat-free mass in kilograms, when a body composition exam is available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_free_mass_kg: Option<f64>,
}

impl AnthropometricInput {
    /// Build an input, rejecting non-positive or non-finite measurements
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if weight or height is not a positive finite
    /// number, or if a fat-free mass is given that is not positive or exceeds
    /// body weight.
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        sex: Sex,
        fat_free_mass_kg: Option<f64>,
    ) -> AppResult<Self> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(
                AppError::invalid_input(format!("Weight must be positive, got {weight_kg}"))
                    .with_field("weight_kg"),
            );
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(
                AppError::invalid_input(format!("Height must be positive, got {height_cm}"))
                    .with_field("height_cm"),
            );
        }
        if let Some(ffm) = fat_free_mass_kg {
            if !ffm.is_finite() || ffm <= 0.0 || ffm > weight_kg {
                return Err(AppError::invalid_input(format!(
                    "Fat-free mass must be positive and not exceed body weight, got {ffm}"
                ))
                .with_field("fat_free_mass_kg"));
            }
        }

        Ok(Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
            fat_free_mass_kg,
        })
    }

    /// Height in meters
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }
}
