// ABOUTME: Main library entry point for the Nutriplan energy expenditure engine
// ABOUTME: BMR/TEE estimation, goal adjustment, macronutrient distribution, and body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Energy expenditure calculations for nutrition practice: basal metabolic
//! rate from published predictive equations, total energy expenditure with
//! activity and clinical factors, weight-goal adjustment, macronutrient
//! distribution, and derived anthropometric metrics.
//!
//! All calculators are pure synchronous functions. The only process-wide
//! state is the lazily loaded [`config::EngineConfig`].
//!
//! ## Example Usage
//!
//! ```rust
//! use nutriplan::config::EngineConfig;
//! use nutriplan::errors::AppResult;
//! use nutriplan::intelligence::{calculate_energy_plan, EnergyPlanRequest};
//! use nutriplan::models::Sex;
//!
//! fn main() -> AppResult<()> {
//!     let request = EnergyPlanRequest::new(75.0, 180.0, 30, Sex::Male);
//!     let plan = calculate_energy_plan(&request, EngineConfig::global())?;
//!
//!     println!("BMR {:.0} kcal, TEE {:.0} kcal", plan.result.bmr_kcal, plan.result.tee_kcal);
//!     Ok(())
//! }
//! ```

/// Unified error types
pub mod errors;

/// Energy and unit constants
pub mod constants;

/// Anthropometric data models
pub mod models;

/// Engine configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Energy expenditure calculators
pub mod intelligence;
