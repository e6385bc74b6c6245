// ABOUTME: Formula applicability gate for BMR equations
// ABOUTME: Flags missing measurements and age ranges a formula was not validated for
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Formula Validation Gate
//!
//! The gate never blocks a calculation. It returns a flag and a message the
//! caller shows next to the result.

use super::algorithms::BmrFormula;
use crate::constants::age_limits::{ADULT_MIN_AGE, FAO_WHO_MAX_AGE};
use serde::{Deserialize, Serialize};

/// Message when weight or height is missing
pub const MSG_MEASUREMENTS_REQUIRED: &str = "weight and height required";
/// Message when an adult-only formula is applied to a minor
pub const MSG_ADULTS_ONLY: &str = "recommended for adults only";
/// Message when FAO/WHO is applied above its accurate range
pub const MSG_ELDERLY_ACCURACY: &str = "limited accuracy for elderly";
/// Message when Katch-McArdle has no fat-free mass
pub const MSG_FFM_REQUIRED: &str = "fat-free mass required";

/// Outcome of the applicability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaValidation {
    /// Whether the formula is applicable to these inputs
    pub is_valid: bool,
    /// Reason when not applicable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormulaValidation {
    /// Applicable
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    /// Not applicable, with a reason
    #[must_use]
    pub fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            message: Some(message.to_owned()),
        }
    }
}

fn is_measured(value: Option<f64>) -> bool {
    value.is_some_and(|v| v.is_finite() && v > 0.0)
}

/// Check whether a formula applies to the given measurements
#[must_use]
pub fn validate_formula_inputs(
    formula: BmrFormula,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age_years: u32,
) -> FormulaValidation {
    if !is_measured(weight_kg) || !is_measured(height_cm) {
        return FormulaValidation::invalid(MSG_MEASUREMENTS_REQUIRED);
    }

    match formula {
        BmrFormula::HarrisBenedict1984 if age_years < ADULT_MIN_AGE => {
            FormulaValidation::invalid(MSG_ADULTS_ONLY)
        }
        BmrFormula::FaoWho2004 if age_years > FAO_WHO_MAX_AGE => {
            FormulaValidation::invalid(MSG_ELDERLY_ACCURACY)
        }
        _ => FormulaValidation::valid(),
    }
}

/// Same as [`validate_formula_inputs`], also checking fat-free mass for formulas that need it
#[must_use]
pub fn validate_formula_inputs_with_ffm(
    formula: BmrFormula,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age_years: u32,
    fat_free_mass_kg: Option<f64>,
) -> FormulaValidation {
    let base = validate_formula_inputs(formula, weight_kg, height_cm, age_years);
    if base.is_valid && formula.requires_fat_free_mass() && !is_measured(fat_free_mass_kg) {
        return FormulaValidation::invalid(MSG_FFM_REQUIRED);
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harris_benedict_rejects_minors() {
        let minor = validate_formula_inputs(BmrFormula::HarrisBenedict1984, Some(70.0), Some(170.0), 15);
        assert!(!minor.is_valid);
        assert_eq!(minor.message.as_deref(), Some(MSG_ADULTS_ONLY));

        let adult = validate_formula_inputs(BmrFormula::HarrisBenedict1984, Some(70.0), Some(170.0), 25);
        assert!(adult.is_valid);
        assert!(adult.message.is_none());
    }

    #[test]
    fn test_harris_benedict_boundary_age() {
        assert!(validate_formula_inputs(BmrFormula::HarrisBenedict1984, Some(70.0), Some(170.0), 17).message.is_some());
        assert!(validate_formula_inputs(BmrFormula::HarrisBenedict1984, Some(70.0), Some(170.0), 18).is_valid);
    }

    #[test]
    fn test_fao_who_elderly_flag() {
        assert!(validate_formula_inputs(BmrFormula::FaoWho2004, Some(70.0), Some(170.0), 60).is_valid);
        let elderly = validate_formula_inputs(BmrFormula::FaoWho2004, Some(70.0), Some(170.0), 61);
        assert_eq!(elderly.message.as_deref(), Some(MSG_ELDERLY_ACCURACY));
    }

    #[test]
    fn test_missing_measurements_take_precedence() {
        for formula in BmrFormula::ALL {
            let result = validate_formula_inputs(formula, None, Some(170.0), 15);
            assert_eq!(result.message.as_deref(), Some(MSG_MEASUREMENTS_REQUIRED));

            let result = validate_formula_inputs(formula, Some(70.0), Some(0.0), 30);
            assert!(!result.is_valid);
        }
    }

    #[test]
    fn test_other_formulas_unrestricted_by_age() {
        for formula in [
            BmrFormula::MifflinStJeor1990,
            BmrFormula::MifflinStJeorModified1980,
            BmrFormula::IomEer2005,
        ] {
            assert!(validate_formula_inputs(formula, Some(30.0), Some(130.0), 9).is_valid);
            assert!(validate_formula_inputs(formula, Some(60.0), Some(160.0), 90).is_valid);
        }
    }

    #[test]
    fn test_katch_mcardle_needs_ffm() {
        let without = validate_formula_inputs_with_ffm(
            BmrFormula::KatchMcArdle1996,
            Some(80.0),
            Some(180.0),
            30,
            None,
        );
        assert_eq!(without.message.as_deref(), Some(MSG_FFM_REQUIRED));

        let with = validate_formula_inputs_with_ffm(
            BmrFormula::KatchMcArdle1996,
            Some(80.0),
            Some(180.0),
            30,
            Some(65.0),
        );
        assert!(with.is_valid);
    }
}
