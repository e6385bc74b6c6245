// ABOUTME: Algorithm abstraction layer enabling pluggable BMR estimation methods
// ABOUTME: Provides enum-based dispatch over the published basal metabolic rate equations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Selection Module
//!
//! Formulas are enums, not strings: an unsupported formula is a parse error
//! at the boundary instead of a silent zero deep inside a calculation.
//!
//! # Example
//!
//! ```rust
//! use nutriplan::intelligence::algorithms::BmrFormula;
//! use nutriplan::models::Sex;
//!
//! let bmr = BmrFormula::MifflinStJeor1990.evaluate(75.0, 180.0, 30, Sex::Male, None);
//! assert!((bmr - 1730.0).abs() < 1e-9);
//! ```

/// Basal metabolic rate equations
pub mod bmr;

pub use bmr::{calculate_bmr, calculate_bmr_for_key, BmrFormula};
