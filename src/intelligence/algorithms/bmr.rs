// ABOUTME: Basal metabolic rate estimation using published predictive equations
// ABOUTME: Implements Harris-Benedict, Mifflin-St Jeor, FAO/WHO, IOM EER, and Katch-McArdle formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{AnthropometricInput, Sex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Basal metabolic rate estimation formula
///
/// W = weight (kg), H = height (cm), A = age (years).
///
/// # Scientific References
///
/// - Roza, A.M. & Shizgal, H.M. (1984). "The Harris Benedict equation reevaluated." *Am J Clin Nutr*, 40(1), 168-182.
/// - Mifflin, M.D. et al. (1990). "A new predictive equation for resting energy expenditure." *Am J Clin Nutr*, 51(2), 241-247.
/// - FAO/WHO/UNU (2004). *Human energy requirements*. Food and Nutrition Technical Report Series 1.
/// - Institute of Medicine (2005). *Dietary Reference Intakes for Energy*. National Academies Press.
/// - `McArdle`, W.D., Katch, F.I. & Katch, V.L. (1996). *Exercise Physiology*, 4th ed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    /// Harris-Benedict, revised by Roza & Shizgal (1984)
    ///
    /// Validated on adults only
    #[serde(rename = "harris_benedict_1984")]
    HarrisBenedict1984,

    /// Mifflin-St Jeor (1990)
    ///
    /// Male: 10W + 6.25H - 5A + 5, Female: 10W + 6.25H - 5A - 161
    #[default]
    #[serde(rename = "mifflin_st_jeor_1990")]
    MifflinStJeor1990,

    /// Mifflin-St Jeor with an additional -0.5W weight correction
    #[serde(rename = "mifflin_st_jeor_modified_1980")]
    MifflinStJeorModified1980,

    /// FAO/WHO/UNU (2004) age-banded weight equations
    ///
    /// Limited accuracy above 60 years
    #[serde(rename = "fao_who_2004")]
    FaoWho2004,

    /// IOM estimated energy requirement (2005) at sedentary activity
    #[serde(rename = "iom_eer_2005")]
    IomEer2005,

    /// Katch-McArdle: 370 + 21.6 x fat-free mass
    ///
    /// Requires a body composition exam
    #[serde(rename = "katch_mcardle_1996")]
    KatchMcArdle1996,
}

/// One age band of a weight-based linear equation: `slope * W + intercept`
struct LinearBand {
    max_age_exclusive: u32,
    male: (f64, f64),
    female: (f64, f64),
}

/// FAO/WHO/UNU 2004 bands, ordered by upper bound
static FAO_WHO_BANDS: [LinearBand; 6] = [
    LinearBand {
        max_age_exclusive: 3,
        male: (59.512, -30.4),
        female: (58.317, -31.1),
    },
    LinearBand {
        max_age_exclusive: 10,
        male: (22.706, 504.3),
        female: (20.315, 485.9),
    },
    LinearBand {
        max_age_exclusive: 18,
        male: (17.686, 658.2),
        female: (13.384, 692.6),
    },
    LinearBand {
        max_age_exclusive: 30,
        male: (15.057, 692.2),
        female: (14.818, 486.6),
    },
    LinearBand {
        max_age_exclusive: 60,
        male: (11.472, 873.1),
        female: (8.126, 845.6),
    },
    LinearBand {
        max_age_exclusive: u32::MAX,
        male: (11.711, 587.7),
        female: (9.082, 658.5),
    },
];

/// IOM EER coefficients `(c1, c2, c3, c4)` for `c1 - c2*A + c3*W + c4*H/100`
#[derive(Clone, Copy)]
struct EerCoefficients(f64, f64, f64, f64);

/// One age band of the IOM EER table
struct EerBand {
    max_age_exclusive: u32,
    male: EerCoefficients,
    female: EerCoefficients,
}

const EER_INFANT: EerCoefficients = EerCoefficients(-100.0, 0.0, 89.0, 0.0);
const EER_YOUTH_MALE: EerCoefficients = EerCoefficients(88.5, 61.9, 26.7, 903.0);
const EER_YOUTH_FEMALE: EerCoefficients = EerCoefficients(135.3, 30.8, 10.0, 934.0);
const EER_ADULT_MALE: EerCoefficients = EerCoefficients(662.0, 9.53, 15.91, 539.6);
const EER_ADULT_FEMALE: EerCoefficients = EerCoefficients(354.0, 6.91, 9.36, 726.0);

/// IOM EER bands, ordered by upper bound
///
/// The 60+ band repeats the 18-60 body. Both brackets are kept so the table
/// lines up with the clinical age groups.
static IOM_EER_BANDS: [EerBand; 4] = [
    EerBand {
        max_age_exclusive: 3,
        male: EER_INFANT,
        female: EER_INFANT,
    },
    EerBand {
        max_age_exclusive: 18,
        male: EER_YOUTH_MALE,
        female: EER_YOUTH_FEMALE,
    },
    EerBand {
        max_age_exclusive: 60,
        male: EER_ADULT_MALE,
        female: EER_ADULT_FEMALE,
    },
    EerBand {
        max_age_exclusive: u32::MAX,
        male: EER_ADULT_MALE,
        female: EER_ADULT_FEMALE,
    },
];

impl BmrFormula {
    /// All supported formulas, in display order
    pub const ALL: [Self; 6] = [
        Self::HarrisBenedict1984,
        Self::MifflinStJeor1990,
        Self::MifflinStJeorModified1980,
        Self::FaoWho2004,
        Self::IomEer2005,
        Self::KatchMcArdle1996,
    ];

    /// Estimate BMR (kcal/day) for an input bundle
    #[must_use]
    pub fn estimate(self, input: &AnthropometricInput) -> f64 {
        self.evaluate(
            input.weight_kg,
            input.height_cm,
            input.age_years,
            input.sex,
            input.fat_free_mass_kg,
        )
    }

    /// Evaluate the equation on plain numbers
    ///
    /// Inputs are not validated. Katch-McArdle without a fat-free mass
    /// evaluates to `0.0`; use the validation gate to surface that.
    #[must_use]
    pub fn evaluate(
        self,
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        sex: Sex,
        fat_free_mass_kg: Option<f64>,
    ) -> f64 {
        let w = weight_kg;
        let h = height_cm;
        let a = f64::from(age_years);
        let male = sex.uses_male_coefficients();

        match self {
            Self::HarrisBenedict1984 => {
                if male {
                    66.5 + 13.75 * w + 5.003 * h - 6.775 * a
                } else {
                    655.1 + 9.563 * w + 1.85 * h - 4.676 * a
                }
            }
            Self::MifflinStJeor1990 => mifflin_st_jeor(w, h, a, male),
            Self::MifflinStJeorModified1980 => mifflin_st_jeor(w, h, a, male) - 0.5 * w,
            Self::FaoWho2004 => {
                let band = FAO_WHO_BANDS
                    .iter()
                    .find(|band| age_years < band.max_age_exclusive)
                    .unwrap_or(&FAO_WHO_BANDS[FAO_WHO_BANDS.len() - 1]);
                let (slope, intercept) = if male { band.male } else { band.female };
                slope * w + intercept
            }
            Self::IomEer2005 => {
                let band = IOM_EER_BANDS
                    .iter()
                    .find(|band| age_years < band.max_age_exclusive)
                    .unwrap_or(&IOM_EER_BANDS[IOM_EER_BANDS.len() - 1]);
                let EerCoefficients(c1, c2, c3, c4) = if male { band.male } else { band.female };
                c1 - c2 * a + c3 * w + c4 * h / 100.0
            }
            Self::KatchMcArdle1996 => fat_free_mass_kg.map_or(0.0, |ffm| 370.0 + 21.6 * ffm),
        }
    }

    /// Whether the formula needs fat-free mass
    #[must_use]
    pub const fn requires_fat_free_mass(self) -> bool {
        matches!(self, Self::KatchMcArdle1996)
    }

    /// Stable key used in JSON and on the command line
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::HarrisBenedict1984 => "harris_benedict_1984",
            Self::MifflinStJeor1990 => "mifflin_st_jeor_1990",
            Self::MifflinStJeorModified1980 => "mifflin_st_jeor_modified_1980",
            Self::FaoWho2004 => "fao_who_2004",
            Self::IomEer2005 => "iom_eer_2005",
            Self::KatchMcArdle1996 => "katch_mcardle_1996",
        }
    }

    /// Get algorithm description with formula
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::HarrisBenedict1984 => {
                "Harris-Benedict (Roza & Shizgal 1984): adults, 66.5 + 13.75W + 5.003H - 6.775A (male)"
            }
            Self::MifflinStJeor1990 => "Mifflin-St Jeor (1990): 10W + 6.25H - 5A + 5 / -161",
            Self::MifflinStJeorModified1980 => "Modified Mifflin-St Jeor: Mifflin - 0.5W",
            Self::FaoWho2004 => "FAO/WHO/UNU (2004): age-banded slope x W + intercept",
            Self::IomEer2005 => "IOM EER (2005), sedentary: c1 - c2A + c3W + c4H/100",
            Self::KatchMcArdle1996 => "Katch-McArdle: 370 + 21.6 x fat-free mass",
        }
    }
}

fn mifflin_st_jeor(w: f64, h: f64, a: f64, male: bool) -> f64 {
    let base = 10.0 * w + 6.25 * h - 5.0 * a;
    if male {
        base + 5.0
    } else {
        base - 161.0
    }
}

impl fmt::Display for BmrFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BmrFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|formula| formula.key() == key)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|f| f.key()).collect();
                AppError::invalid_input(format!(
                    "Unknown BMR formula: '{key}'. Valid options: {}",
                    valid.join(", ")
                ))
                .with_field("formula")
            })
    }
}

/// Calculate BMR (kcal/day) with the selected formula
#[must_use]
pub fn calculate_bmr(
    formula: BmrFormula,
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    fat_free_mass_kg: Option<f64>,
) -> f64 {
    formula.evaluate(weight_kg, height_cm, age_years, sex, fat_free_mass_kg)
}

/// Calculate BMR from a formula key string
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown key instead of a silent zero.
pub fn calculate_bmr_for_key(
    formula_key: &str,
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    fat_free_mass_kg: Option<f64>,
) -> AppResult<f64> {
    let formula: BmrFormula = formula_key.parse()?;
    Ok(formula.evaluate(weight_kg, height_cm, age_years, sex, fat_free_mass_kg))
}
