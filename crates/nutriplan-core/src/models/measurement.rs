// ABOUTME: Dated anthropometric measurement recorded during a consultation
// ABOUTME: Weight, height, body fat, waist and hip circumferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single anthropometric assessment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Date of the assessment
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body fat percentage (0-100), from bioimpedance or skinfolds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<f64>,
    /// Waist circumference in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Hip circumference in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
}

impl Measurement {
    /// Create a measurement with only the mandatory fields
    #[must_use]
    pub const fn new(date: NaiveDate, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            date,
            weight_kg,
            height_cm,
            body_fat_pct: None,
            waist_cm: None,
            hip_cm: None,
        }
    }

    /// Attach a body fat percentage
    #[must_use]
    pub fn with_body_fat(mut self, body_fat_pct: f64) -> Self {
        self.body_fat_pct = Some(body_fat_pct);
        self
    }

    /// Attach waist and hip circumferences
    #[must_use]
    pub fn with_circumferences(mut self, waist_cm: f64, hip_cm: f64) -> Self {
        self.waist_cm = Some(waist_cm);
        self.hip_cm = Some(hip_cm);
        self
    }

    /// Fat mass in kilograms, when body fat is known
    #[must_use]
    pub fn fat_mass_kg(&self) -> Option<f64> {
        self.body_fat_pct
            .filter(|pct| pct.is_finite() && (0.0..=100.0).contains(pct))
            .map(|pct| self.weight_kg * pct / 100.0)
    }

    /// Lean (fat-free) mass in kilograms, when body fat is known
    #[must_use]
    pub fn lean_mass_kg(&self) -> Option<f64> {
        self.fat_mass_kg().map(|fat| self.weight_kg - fat)
    }
}
