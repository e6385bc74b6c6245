// ABOUTME: Converts a target body-mass change over a period into a daily caloric delta
// ABOUTME: Uses the fixed 7700 kcal/kg energy density of body mass change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::KCAL_PER_KG_BODY_MASS;
use serde::{Deserialize, Serialize};

/// Desired body-mass change over a period
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalSpec {
    /// Signed change in kg: positive to gain, negative to lose
    pub weight_change_kg: f64,
    /// Period in days
    pub days: i64,
}

impl GoalSpec {
    /// Daily caloric delta for this goal, `None` when not applicable
    #[must_use]
    pub fn daily_adjustment_kcal(&self) -> Option<f64> {
        calculate_goal_adjustment(self.weight_change_kg, self.days)
    }
}

/// Daily caloric adjustment for a weight goal
///
/// Formula: `round(weight_change_kg x 7700 / days)`, with halves rounded
/// toward positive infinity (`-192.5` becomes `-192`).
///
/// Returns `None` when there is nothing to adjust (`weight_change_kg == 0`)
/// or no period to spread it over (`days <= 0`). A positive change yields a
/// surplus, a negative change a deficit.
#[must_use]
pub fn calculate_goal_adjustment(weight_change_kg: f64, days: i64) -> Option<f64> {
    if weight_change_kg == 0.0 || !weight_change_kg.is_finite() || days <= 0 {
        return None;
    }
    Some((weight_change_kg * KCAL_PER_KG_BODY_MASS / days as f64 + 0.5).floor())
}
