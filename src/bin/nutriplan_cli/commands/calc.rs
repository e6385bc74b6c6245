// ABOUTME: Single-calculator commands for nutriplan-cli
// ABOUTME: BMR with validation, age, BMI, waist-hip ratio, and the formula listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDate};
use nutriplan::{
    config::EngineConfig,
    errors::{AppError, AppResult},
    intelligence::{
        calculate_age, calculate_bmi, calculate_whr, format_metric,
        validate_formula_inputs_with_ffm, BmiCategory, BmrFormula, WhrRisk,
    },
    logging::AppLogger,
    models::{AnthropometricInput, Sex},
};
use serde_json::json;

use crate::helpers::display::print_json;

type Result<T> = AppResult<T>;

/// Flags of the `bmr` command
pub struct BmrArgs {
    pub formula: Option<String>,
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub sex: String,
    pub ffm: Option<f64>,
}

/// Estimate BMR and report formula applicability
pub fn bmr(config: &EngineConfig, args: &BmrArgs, pretty: bool) -> Result<()> {
    let formula: BmrFormula = match &args.formula {
        Some(key) => key.parse()?,
        None => config.default_formula,
    };
    let input = AnthropometricInput::new(
        args.weight,
        args.height,
        args.age,
        Sex::from_str_lossy(&args.sex),
        args.ffm,
    )?;
    let validation = validate_formula_inputs_with_ffm(
        formula,
        Some(input.weight_kg),
        Some(input.height_cm),
        input.age_years,
        input.fat_free_mass_kg,
    );
    if formula.requires_fat_free_mass() && input.fat_free_mass_kg.is_none() {
        return Err(AppError::missing_field("ffm"));
    }

    let bmr_kcal = formula.estimate(&input);
    AppLogger::log_calculation("bmr", bmr_kcal);

    print_json(
        &json!({
            "formula": formula,
            "sex": input.sex,
            "bmr_kcal": bmr_kcal,
            "validation": validation,
        }),
        pretty,
    )
}

/// Whole-year age
pub fn age(birth: NaiveDate, reference: Option<NaiveDate>, pretty: bool) -> Result<()> {
    let reference = reference.unwrap_or_else(|| Local::now().date_naive());
    let age_years = calculate_age(birth, reference);
    if age_years < 0 {
        return Err(AppError::out_of_range(format!(
            "Reference date {reference} is before birth date {birth}"
        ))
        .with_field("reference"));
    }
    AppLogger::log_calculation("age", f64::from(age_years));

    print_json(
        &json!({
            "birth_date": birth,
            "reference_date": reference,
            "age_years": age_years,
        }),
        pretty,
    )
}

/// Body mass index
pub fn bmi(config: &EngineConfig, weight: f64, height: f64, pretty: bool) -> Result<()> {
    let bmi = calculate_bmi(weight, height);
    let category = bmi.map(BmiCategory::classify);
    if let Some(value) = bmi {
        AppLogger::log_calculation("bmi", value);
    }

    print_json(
        &json!({
            "bmi": bmi,
            "display": format_metric(bmi, config.anthropometrics.bmi_display_decimals),
            "category": category,
            "label": category.map(BmiCategory::label),
        }),
        pretty,
    )
}

/// Waist-hip ratio
pub fn whr(config: &EngineConfig, waist: f64, hip: f64, pretty: bool) -> Result<()> {
    let threshold = config.anthropometrics.whr_risk_threshold;
    let whr = calculate_whr(waist, hip);
    let risk = whr.map(|value| WhrRisk::classify(value, threshold));
    if let Some(value) = whr {
        AppLogger::log_calculation("whr", value);
    }

    print_json(
        &json!({
            "whr": whr,
            "display": format_metric(whr, 2),
            "risk": risk,
            "threshold": threshold,
        }),
        pretty,
    )
}

/// Supported formulas with descriptions
pub fn formulas(pretty: bool) -> Result<()> {
    let listing: Vec<_> = BmrFormula::ALL
        .iter()
        .map(|formula| {
            json!({
                "key": formula.key(),
                "description": formula.description(),
                "requires_fat_free_mass": formula.requires_fat_free_mass(),
            })
        })
        .collect();

    print_json(&listing, pretty)
}
