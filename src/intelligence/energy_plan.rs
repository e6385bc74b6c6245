// ABOUTME: Energy plan orchestration from a patient request to BMR, TEE, and macro targets
// ABOUTME: Chains age, formula validation, BMR, goal adjustment, TEE, macros, and BMI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Plan
//!
//! Steps, in order:
//!
//! 1. resolve age (explicit or from birth date)
//! 2. build a checked [`AnthropometricInput`]
//! 3. run the formula applicability gate (advisory)
//! 4. BMR with the requested or configured formula
//! 5. goal adjustment
//! 6. TEE
//! 7. macronutrient distribution with the advisory split check
//! 8. BMI for context
//!
//! Advisory findings end up in [`EnergyPlan::warnings`]. Only inputs that make
//! the arithmetic meaningless are errors.

use super::age::age_years_for_formula;
use super::algorithms::BmrFormula;
use super::anthropometrics::{calculate_bmi, BmiCategory};
use super::energy_expenditure::{
    calculate_tee_with, ActivityFactor, CalculationResult, InjuryFactor, PregnancyStage,
    TeeAdjustments,
};
use super::formula_validation::{validate_formula_inputs_with_ffm, FormulaValidation};
use super::goal_adjustment::GoalSpec;
use super::macronutrients::{distribute_macros, validate_macro_split, MacroDistribution, MacroSplit};
use crate::config::EngineConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{AnthropometricInput, Sex};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Input for a full energy plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyPlanRequest {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years; takes precedence over `birth_date`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_years: Option<u32>,
    /// Birth date, used when `age_years` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Date the plan is calculated for, defaults to today
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
    /// Sex used for coefficient dispatch
    pub sex: Sex,
    /// Fat-free mass from a body composition exam
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_free_mass_kg: Option<f64>,
    /// BMR formula, defaults to the configured formula
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<BmrFormula>,
    /// Activity multiplier
    #[serde(default)]
    pub activity: ActivityFactor,
    /// Injury/stress multiplier
    #[serde(default)]
    pub injury: InjuryFactor,
    /// Extra activity calories (kcal/day)
    #[serde(default)]
    pub extra_met_kcal: f64,
    /// Weight goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalSpec>,
    /// Pregnancy stage
    #[serde(default)]
    pub pregnancy: PregnancyStage,
    /// Macronutrient split, defaults to the configured split
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macros: Option<MacroSplit>,
}

impl EnergyPlanRequest {
    /// Minimal request with defaults for everything optional
    #[must_use]
    pub fn new(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years: Some(age_years),
            birth_date: None,
            reference_date: None,
            sex,
            fat_free_mass_kg: None,
            formula: None,
            activity: ActivityFactor::default(),
            injury: InjuryFactor::default(),
            extra_met_kcal: 0.0,
            goal: None,
            pregnancy: PregnancyStage::default(),
            macros: None,
        }
    }

    fn resolve_age(&self) -> AppResult<u32> {
        if let Some(age) = self.age_years {
            return Ok(age);
        }
        let birth_date = self
            .birth_date
            .ok_or_else(|| AppError::missing_field("birth_date"))?;
        let reference = self
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());
        age_years_for_formula(birth_date, reference)
    }
}

/// Computed energy plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyPlan {
    /// Formula used for BMR
    pub formula: BmrFormula,
    /// Age fed to the formula
    pub age_years: u32,
    /// Applicability of the formula to these inputs
    pub validation: FormulaValidation,
    /// BMR and TEE
    pub result: CalculationResult,
    /// Activity multiplier applied
    pub activity_factor: f64,
    /// Injury multiplier applied
    pub injury_factor: f64,
    /// Daily goal adjustment, `None` when not applicable
    pub goal_adjustment_kcal: Option<f64>,
    /// Pregnancy supplement applied
    pub pregnancy_kcal: f64,
    /// Extra activity calories applied
    pub extra_met_kcal: f64,
    /// Split the macros were computed from
    pub macro_split: MacroSplit,
    /// Macronutrient targets
    pub macros: MacroDistribution,
    /// Body mass index
    pub bmi: Option<f64>,
    /// BMI classification
    pub bmi_category: Option<BmiCategory>,
    /// Advisory findings
    pub warnings: Vec<String>,
}

/// Compute a complete energy plan
///
/// # Errors
///
/// Returns an error if weight or height are not positive, the age cannot be
/// resolved, a custom factor is not positive, or Katch-McArdle is selected
/// without a fat-free mass.
#[instrument(
    skip(request, config),
    fields(service = "energy_plan", operation = "calculate_energy_plan")
)]
pub fn calculate_energy_plan(
    request: &EnergyPlanRequest,
    config: &EngineConfig,
) -> AppResult<EnergyPlan> {
    let mut warnings = Vec::new();

    let age_years = request.resolve_age()?;
    debug!(age_years, "Resolved age");

    let input = AnthropometricInput::new(
        request.weight_kg,
        request.height_cm,
        age_years,
        request.sex,
        request.fat_free_mass_kg,
    )?;

    let formula = request.formula.unwrap_or(config.default_formula);
    let validation = validate_formula_inputs_with_ffm(
        formula,
        Some(input.weight_kg),
        Some(input.height_cm),
        input.age_years,
        input.fat_free_mass_kg,
    );
    debug!(formula = %formula, is_valid = validation.is_valid, "Formula validation");

    if formula.requires_fat_free_mass() && input.fat_free_mass_kg.is_none() {
        return Err(AppError::missing_field("fat_free_mass_kg").with_details(
            serde_json::json!({ "formula": formula.key() }),
        ));
    }
    if let Some(message) = &validation.message {
        warnings.push(format!("{formula}: {message}"));
    }

    let bmr_kcal = formula.estimate(&input);
    debug!(bmr_kcal, "Estimated BMR");

    let goal_adjustment_kcal = request.goal.as_ref().and_then(GoalSpec::daily_adjustment_kcal);
    debug!(?goal_adjustment_kcal, "Goal adjustment");

    if request.pregnancy != PregnancyStage::NotPregnant && request.sex == Sex::Male {
        warnings.push("pregnancy supplement applied to a male patient".to_owned());
    }

    let activity_factor = request.activity.checked_value()?;
    let injury_factor = request.injury.checked_value()?;
    let adjustments = TeeAdjustments {
        extra_met_kcal: request.extra_met_kcal,
        goal_adjustment_kcal: goal_adjustment_kcal.unwrap_or(0.0),
        pregnancy_kcal: request.pregnancy.kcal(),
    };
    let tee_kcal = calculate_tee_with(bmr_kcal, activity_factor, injury_factor, &adjustments);
    debug!(tee_kcal, activity_factor, injury_factor, "Estimated TEE");

    if tee_kcal < 0.0 {
        warnings.push(format!(
            "total energy expenditure is negative ({tee_kcal:.0} kcal); check the goal adjustment"
        ));
    }

    let macro_split = request.macros.unwrap_or(config.macros.default_split);
    if let Some(warning) = validate_macro_split(&macro_split, config.macros.sum_tolerance_pct) {
        warnings.push(warning.message);
    }
    let macros = distribute_macros(tee_kcal, &macro_split, input.weight_kg);
    debug!(
        protein_g = macros.protein.grams,
        carbohydrate_g = macros.carbohydrate.grams,
        fat_g = macros.fat.grams,
        "Distributed macronutrients"
    );

    let bmi = calculate_bmi(input.weight_kg, input.height_cm);
    let bmi_category = bmi.map(BmiCategory::classify);

    info!(
        formula = %formula,
        bmr_kcal,
        tee_kcal,
        warnings = warnings.len(),
        "Energy plan computed"
    );

    Ok(EnergyPlan {
        formula,
        age_years,
        validation,
        result: CalculationResult { bmr_kcal, tee_kcal },
        activity_factor,
        injury_factor,
        goal_adjustment_kcal,
        pregnancy_kcal: adjustments.pregnancy_kcal,
        extra_met_kcal: adjustments.extra_met_kcal,
        macro_split,
        macros,
        bmi,
        bmi_category,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::intelligence::energy_expenditure::ActivityLevel;

    #[test]
    fn test_default_plan_uses_mifflin_and_sedentary() {
        let request = EnergyPlanRequest::new(75.0, 180.0, 30, Sex::Male);
        let plan = calculate_energy_plan(&request, &EngineConfig::default()).unwrap();

        assert_eq!(plan.formula, BmrFormula::MifflinStJeor1990);
        assert!((plan.result.bmr_kcal - 1730.0).abs() < 1e-9);
        assert!((plan.result.tee_kcal - 1730.0 * 1.2).abs() < 1e-9);
        assert!(plan.warnings.is_empty());
        assert!((plan.macro_split.total_pct() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_goal_and_pregnancy_are_additive() {
        let mut request = EnergyPlanRequest::new(60.0, 165.0, 25, Sex::Female);
        request.activity = ActivityFactor::Preset(ActivityLevel::Moderate);
        request.goal = Some(GoalSpec {
            weight_change_kg: -5.0,
            days: 50,
        });
        request.pregnancy = PregnancyStage::SecondTrimester;

        let plan = calculate_energy_plan(&request, &EngineConfig::default()).unwrap();
        let expected = 1345.25 * 1.55 - 770.0 + 340.0;
        assert!((plan.result.tee_kcal - expected).abs() < 1e-9);
        assert_eq!(plan.goal_adjustment_kcal, Some(-770.0));
    }

    #[test]
    fn test_age_from_birth_date() {
        let mut request = EnergyPlanRequest::new(70.0, 170.0, 0, Sex::Female);
        request.age_years = None;
        request.birth_date = NaiveDate::from_ymd_opt(1990, 6, 15);
        request.reference_date = NaiveDate::from_ymd_opt(2024, 6, 14);

        let plan = calculate_energy_plan(&request, &EngineConfig::default()).unwrap();
        assert_eq!(plan.age_years, 33);
    }

    #[test]
    fn test_missing_age_sources() {
        let mut request = EnergyPlanRequest::new(70.0, 170.0, 0, Sex::Female);
        request.age_years = None;

        let err = calculate_energy_plan(&request, &EngineConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(err.context.field.as_deref(), Some("birth_date"));
    }

    #[test]
    fn test_katch_mcardle_without_ffm_is_an_error() {
        let mut request = EnergyPlanRequest::new(80.0, 180.0, 30, Sex::Male);
        request.formula = Some(BmrFormula::KatchMcArdle1996);

        let err = calculate_energy_plan(&request, &EngineConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_applicability_is_a_warning_not_an_error() {
        let mut request = EnergyPlanRequest::new(55.0, 160.0, 15, Sex::Female);
        request.formula = Some(BmrFormula::HarrisBenedict1984);

        let plan = calculate_energy_plan(&request, &EngineConfig::default()).unwrap();
        assert!(!plan.validation.is_valid);
        assert!(plan.result.bmr_kcal > 0.0);
        assert!(plan.warnings.iter().any(|w| w.contains("adults only")));
    }

    #[test]
    fn test_unbalanced_split_still_distributes() {
        let mut request = EnergyPlanRequest::new(75.0, 180.0, 30, Sex::Male);
        request.macros = Some(MacroSplit::new(30.0, 50.0, 30.0));

        let plan = calculate_energy_plan(&request, &EngineConfig::default()).unwrap();
        assert_eq!(plan.warnings.len(), 1);
        let expected = plan.result.tee_kcal * 0.3 / 4.0;
        assert!((plan.macros.protein.grams - expected).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let request = EnergyPlanRequest::new(0.0, 180.0, 30, Sex::Male);
        let err = calculate_energy_plan(&request, &EngineConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_formula_from_config() {
        let mut config = EngineConfig::default();
        config.default_formula = BmrFormula::HarrisBenedict1984;

        let request = EnergyPlanRequest::new(80.0, 180.0, 30, Sex::Male);
        let plan = calculate_energy_plan(&request, &config).unwrap();
        assert!((plan.result.bmr_kcal - 1863.79).abs() < 1e-9);
    }
}
