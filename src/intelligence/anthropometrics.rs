// ABOUTME: Derived anthropometric metrics: body mass index and waist-hip ratio
// ABOUTME: Classification bands and the "N/A" display sentinel for unavailable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::CM_PER_METER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display value for a metric that cannot be computed
pub const NOT_AVAILABLE: &str = "N/A";

/// WHO BMI classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// 30 <= BMI < 35
    ObesityI,
    /// 35 <= BMI < 40
    ObesityII,
    /// BMI >= 40
    ObesityIII,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else if bmi < 35.0 {
            Self::ObesityI
        } else if bmi < 40.0 {
            Self::ObesityII
        } else {
            Self::ObesityIII
        }
    }

    /// Any obesity grade
    #[must_use]
    pub const fn is_obesity(self) -> bool {
        matches!(self, Self::ObesityI | Self::ObesityII | Self::ObesityIII)
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObesityI => "Obesity grade I",
            Self::ObesityII => "Obesity grade II",
            Self::ObesityIII => "Obesity grade III",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cardiometabolic risk from waist-hip ratio
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WhrRisk {
    /// At or below threshold
    Low,
    /// Above threshold
    Elevated,
}

impl WhrRisk {
    /// Classify a ratio against a configured threshold
    #[must_use]
    pub fn classify(whr: f64, threshold: f64) -> Self {
        if whr > threshold {
            Self::Elevated
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for WhrRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Elevated => "elevated",
        })
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Body mass index: `weight_kg / (height_cm / 100)^2`
///
/// `None` for non-positive or non-finite inputs.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !is_positive(weight_kg) || !is_positive(height_cm) {
        return None;
    }
    let height_m = height_cm / CM_PER_METER;
    Some(weight_kg / (height_m * height_m))
}

/// Waist-hip ratio
///
/// `None` for non-positive or non-finite inputs.
#[must_use]
pub fn calculate_whr(waist_cm: f64, hip_cm: f64) -> Option<f64> {
    if !is_positive(waist_cm) || !is_positive(hip_cm) {
        return None;
    }
    Some(waist_cm / hip_cm)
}

/// Render a metric with fixed decimals, or [`NOT_AVAILABLE`]
#[must_use]
pub fn format_metric(value: Option<f64>, decimals: u8) -> String {
    value.map_or_else(
        || NOT_AVAILABLE.to_owned(),
        |v| format!("{v:.prec$}", prec = usize::from(decimals)),
    )
}
