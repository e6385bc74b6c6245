// ABOUTME: Body composition change between two anthropometric assessments
// ABOUTME: Weight, BMI, body fat, fat mass, lean mass and waist-hip ratio deltas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::anthropometrics::{calculate_bmi, calculate_whr};
use crate::models::Measurement;
use serde::{Deserialize, Serialize};

/// Differences `later - earlier` between two measurements
///
/// Optional deltas are `None` unless both measurements carry the source value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyCompositionDelta {
    /// Days between the two assessments
    pub days: i64,
    /// Weight change (kg)
    pub weight_kg: f64,
    /// BMI change
    pub bmi: Option<f64>,
    /// Body fat change (percentage points)
    pub body_fat_pct: Option<f64>,
    /// Fat mass change (kg)
    pub fat_mass_kg: Option<f64>,
    /// Lean mass change (kg)
    pub lean_mass_kg: Option<f64>,
    /// Waist-hip ratio change
    pub whr: Option<f64>,
}

fn diff(later: Option<f64>, earlier: Option<f64>) -> Option<f64> {
    Some(later? - earlier?)
}

fn whr_of(m: &Measurement) -> Option<f64> {
    calculate_whr(m.waist_cm?, m.hip_cm?)
}

impl BodyCompositionDelta {
    /// Compare two measurements, `later - earlier`
    #[must_use]
    pub fn between(earlier: &Measurement, later: &Measurement) -> Self {
        Self {
            days: (later.date - earlier.date).num_days(),
            weight_kg: later.weight_kg - earlier.weight_kg,
            bmi: diff(
                calculate_bmi(later.weight_kg, later.height_cm),
                calculate_bmi(earlier.weight_kg, earlier.height_cm),
            ),
            body_fat_pct: diff(later.body_fat_pct, earlier.body_fat_pct),
            fat_mass_kg: diff(later.fat_mass_kg(), earlier.fat_mass_kg()),
            lean_mass_kg: diff(later.lean_mass_kg(), earlier.lean_mass_kg()),
            whr: diff(whr_of(later), whr_of(earlier)),
        }
    }

    /// Compare the oldest and newest measurement of a history
    ///
    /// `None` when fewer than two measurements are given.
    #[must_use]
    pub fn across(history: &[Measurement]) -> Option<Self> {
        if history.len() < 2 {
            return None;
        }
        let first = history.iter().min_by_key(|m| m.date)?;
        let last = history.iter().max_by_key(|m| m.date)?;
        Some(Self::between(first, last))
    }

    /// Average weight change per week, `None` for a zero-day span
    #[must_use]
    pub fn weekly_weight_rate_kg(&self) -> Option<f64> {
        (self.days != 0).then(|| self.weight_kg * 7.0 / self.days as f64)
    }
}
