// ABOUTME: Energy expenditure intelligence: BMR formulas, TEE, goals, macros, and body metrics
// ABOUTME: Pure calculators plus the energy plan orchestrator that chains them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Energy expenditure calculations for nutrition practice.
//!
//! Dependency order, leaves first: age -> BMR -> TEE -> goal adjustment ->
//! macronutrients. Anthropometric metrics and body composition deltas are
//! independent. [`energy_plan`] depends on all of them.

/// Whole-year age from birth date
pub mod age;
/// BMR formula implementations
pub mod algorithms;
/// BMI and waist-hip ratio
pub mod anthropometrics;
/// Deltas between anthropometric assessments
pub mod body_composition;
/// TEE with activity, injury, and pregnancy factors
pub mod energy_expenditure;
/// Request-to-plan orchestration
pub mod energy_plan;
/// Formula applicability gate
pub mod formula_validation;
/// Weight goal to daily caloric delta
pub mod goal_adjustment;
/// Macronutrient distribution
pub mod macronutrients;

pub use age::{age_years_for_formula, calculate_age};
pub use algorithms::{calculate_bmr, calculate_bmr_for_key, BmrFormula};
pub use anthropometrics::{
    calculate_bmi, calculate_whr, format_metric, BmiCategory, WhrRisk, NOT_AVAILABLE,
};
pub use body_composition::BodyCompositionDelta;
pub use energy_expenditure::{
    calculate_tee, calculate_tee_with, ActivityFactor, ActivityLevel, CalculationResult,
    ClinicalCondition, InjuryFactor, PregnancyStage, TeeAdjustments,
};
pub use energy_plan::{calculate_energy_plan, EnergyPlan, EnergyPlanRequest};
pub use formula_validation::{
    validate_formula_inputs, validate_formula_inputs_with_ffm, FormulaValidation,
};
pub use goal_adjustment::{calculate_goal_adjustment, GoalSpec};
pub use macronutrients::{
    calculate_macro_grams, distribute_macros, grams_per_kg, validate_macro_split, MacroAmount,
    MacroDistribution, MacroSplit, MacroSplitWarning, Macronutrient,
};
