// ABOUTME: Integration tests for engine configuration loading from the environment
// ABOUTME: Validates defaults, overrides, parse failures, and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::config::{ConfigError, EngineConfig};
use nutriplan::errors::{AppError, ErrorCode};
use nutriplan::intelligence::{BmrFormula, MacroSplit};
use serial_test::serial;
use std::env;

const ENGINE_VARS: [&str; 7] = [
    "NUTRIPLAN_DEFAULT_FORMULA",
    "NUTRIPLAN_WHR_RISK_THRESHOLD",
    "NUTRIPLAN_BMI_DECIMALS",
    "NUTRIPLAN_MACRO_SUM_TOLERANCE",
    "NUTRIPLAN_DEFAULT_PROTEIN_PCT",
    "NUTRIPLAN_DEFAULT_CARB_PCT",
    "NUTRIPLAN_DEFAULT_FAT_PCT",
];

fn clear_engine_vars() {
    for var in ENGINE_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_config_validation() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.default_formula, BmrFormula::MifflinStJeor1990);
    assert!((config.anthropometrics.whr_risk_threshold - 0.85).abs() < f64::EPSILON);
    assert_eq!(config.macros.default_split, MacroSplit::new(20.0, 50.0, 30.0));
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_engine_vars();
    let config = EngineConfig::load().unwrap();
    assert_eq!(config.default_formula, EngineConfig::default().default_formula);
    assert_eq!(config.anthropometrics.bmi_display_decimals, 2);
}

#[test]
#[serial]
fn test_environment_variable_override() {
    clear_engine_vars();
    env::set_var("NUTRIPLAN_DEFAULT_FORMULA", "fao_who_2004");
    env::set_var("NUTRIPLAN_WHR_RISK_THRESHOLD", "0.9");
    env::set_var("NUTRIPLAN_BMI_DECIMALS", "1");
    env::set_var("NUTRIPLAN_DEFAULT_PROTEIN_PCT", "30");
    env::set_var("NUTRIPLAN_DEFAULT_CARB_PCT", "40");

    let config = EngineConfig::load().unwrap();

    assert_eq!(config.default_formula, BmrFormula::FaoWho2004);
    assert!((config.anthropometrics.whr_risk_threshold - 0.9).abs() < 0.001);
    assert_eq!(config.anthropometrics.bmi_display_decimals, 1);
    assert_eq!(config.macros.default_split, MacroSplit::new(30.0, 40.0, 30.0));

    clear_engine_vars();
}

#[test]
#[serial]
fn test_unknown_default_formula_is_parse_error() {
    clear_engine_vars();
    env::set_var("NUTRIPLAN_DEFAULT_FORMULA", "cunningham");

    let err = EngineConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("NUTRIPLAN_DEFAULT_FORMULA"));

    clear_engine_vars();
}

#[test]
#[serial]
fn test_threshold_out_of_range_rejected() {
    clear_engine_vars();
    env::set_var("NUTRIPLAN_WHR_RISK_THRESHOLD", "-0.5");

    let err = EngineConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));

    clear_engine_vars();
}

#[test]
#[serial]
fn test_default_split_must_sum_to_hundred() {
    clear_engine_vars();
    env::set_var("NUTRIPLAN_DEFAULT_FAT_PCT", "40");

    let err = EngineConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWeights(_)));

    clear_engine_vars();
}

#[test]
fn test_invalid_percentage_rejected() {
    let mut config = EngineConfig::default();
    config.macros.default_split = MacroSplit::new(120.0, -10.0, -10.0);
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidRange(_)
    ));
}

#[test]
fn test_config_error_maps_to_app_error() {
    let app_error: AppError = ConfigError::ValueOutOfRange("WHR risk threshold must be in (0, 2]").into();
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
    assert_eq!(app_error.code.exit_status(), 3);
    assert!(app_error.message.contains("WHR risk threshold"));
}

#[test]
#[serial]
fn test_global_falls_back_to_defaults_on_invalid_environment() {
    clear_engine_vars();
    env::set_var("NUTRIPLAN_WHR_RISK_THRESHOLD", "not-a-number");
    assert!(EngineConfig::load().is_err());

    let global = EngineConfig::global();
    assert_eq!(global, &EngineConfig::default());
    assert!(std::ptr::eq(global, EngineConfig::global()));

    clear_engine_vars();
}
