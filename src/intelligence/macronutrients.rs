// ABOUTME: Macronutrient distribution from total energy expenditure and percentage splits
// ABOUTME: Grams, grams per kg, and an advisory check that the split sums to 100%
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macronutrient Distribution
//!
//! Formula: `grams = TEE x (percent / 100) / kcal_per_gram`
//!
//! Caloric densities are fixed (Atwater factors): protein 4, carbohydrate 4,
//! fat 9 kcal/g.
//!
//! The split check is advisory. [`distribute_macros`] computes grams for any
//! split, including one that does not add up to 100; [`validate_macro_split`]
//! reports the deviation separately and never normalizes.

use crate::constants::energy::{
    CARBOHYDRATE_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM,
};
use crate::constants::units::PERCENT;
use serde::{Deserialize, Serialize};

/// Float noise allowed on top of the configured tolerance
const SUM_EPSILON: f64 = 1e-9;

/// Energy-yielding macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Macronutrient {
    /// Protein
    Protein,
    /// Carbohydrate
    Carbohydrate,
    /// Fat
    Fat,
}

impl Macronutrient {
    /// Metabolizable energy (kcal/g)
    #[must_use]
    pub const fn kcal_per_gram(self) -> f64 {
        match self {
            Self::Protein => PROTEIN_KCAL_PER_GRAM,
            Self::Carbohydrate => CARBOHYDRATE_KCAL_PER_GRAM,
            Self::Fat => FAT_KCAL_PER_GRAM,
        }
    }
}

/// Percentage of total calories per macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Protein share (%)
    pub protein_pct: f64,
    /// Carbohydrate share (%)
    pub carb_pct: f64,
    /// Fat share (%)
    pub fat_pct: f64,
}

impl MacroSplit {
    /// Create a split from three percentages
    #[must_use]
    pub const fn new(protein_pct: f64, carb_pct: f64, fat_pct: f64) -> Self {
        Self {
            protein_pct,
            carb_pct,
            fat_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub fn total_pct(&self) -> f64 {
        self.protein_pct + self.carb_pct + self.fat_pct
    }

    /// Percentage assigned to one macronutrient
    #[must_use]
    pub const fn percent_of(&self, nutrient: Macronutrient) -> f64 {
        match nutrient {
            Macronutrient::Protein => self.protein_pct,
            Macronutrient::Carbohydrate => self.carb_pct,
            Macronutrient::Fat => self.fat_pct,
        }
    }
}

/// Advisory warning for a split that does not sum to 100%
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroSplitWarning {
    /// Actual sum of the split
    pub total_pct: f64,
    /// `total_pct - 100`
    pub deviation_pct: f64,
    /// Human-readable message
    pub message: String,
}

/// Amount of one macronutrient in a distribution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroAmount {
    /// Share of total calories (%)
    pub percent: f64,
    /// Calories from this macronutrient
    pub kcal: f64,
    /// Grams per day
    pub grams: f64,
    /// Grams per kg body weight per day (0 when weight is unavailable)
    pub grams_per_kg: f64,
}

/// Daily macronutrient distribution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroDistribution {
    /// Protein
    pub protein: MacroAmount,
    /// Carbohydrate
    pub carbohydrate: MacroAmount,
    /// Fat
    pub fat: MacroAmount,
}

/// Grams of a macronutrient for a share of total calories
#[must_use]
pub fn calculate_macro_grams(tee_kcal: f64, percent: f64, kcal_per_gram: f64) -> f64 {
    tee_kcal * (percent / PERCENT) / kcal_per_gram
}

/// Grams per kilogram of body weight, `0.0` when weight is not positive
#[must_use]
pub fn grams_per_kg(grams: f64, weight_kg: f64) -> f64 {
    if weight_kg <= 0.0 {
        return 0.0;
    }
    let ratio = grams / weight_kg;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// Check that a split sums to 100 within `tolerance_pct` percentage points
///
/// Returns `None` when the split is balanced.
#[must_use]
pub fn validate_macro_split(split: &MacroSplit, tolerance_pct: f64) -> Option<MacroSplitWarning> {
    let total = split.total_pct();
    let deviation = total - PERCENT;
    if deviation.abs() <= tolerance_pct.max(0.0) + SUM_EPSILON {
        return None;
    }
    Some(MacroSplitWarning {
        total_pct: total,
        deviation_pct: deviation,
        message: format!("macronutrient percentages sum to {total:.1}%, expected 100%"),
    })
}

fn amount(tee_kcal: f64, split: &MacroSplit, nutrient: Macronutrient, weight_kg: f64) -> MacroAmount {
    let percent = split.percent_of(nutrient);
    let grams = calculate_macro_grams(tee_kcal, percent, nutrient.kcal_per_gram());
    MacroAmount {
        percent,
        kcal: tee_kcal * percent / PERCENT,
        grams,
        grams_per_kg: grams_per_kg(grams, weight_kg),
    }
}

/// Distribute total calories across the three macronutrients
#[must_use]
pub fn distribute_macros(tee_kcal: f64, split: &MacroSplit, weight_kg: f64) -> MacroDistribution {
    MacroDistribution {
        protein: amount(tee_kcal, split, Macronutrient::Protein, weight_kg),
        carbohydrate: amount(tee_kcal, split, Macronutrient::Carbohydrate, weight_kg),
        fat: amount(tee_kcal, split, Macronutrient::Fat, weight_kg),
    }
}
