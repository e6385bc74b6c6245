// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, date helpers, and reference patient requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriplan`

use chrono::NaiveDate;
use nutriplan::intelligence::EnergyPlanRequest;
use nutriplan::models::Sex;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build a date, panicking on an invalid calendar day
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// 30-year-old male, 80 kg, 180 cm
pub fn adult_male_request() -> EnergyPlanRequest {
    EnergyPlanRequest::new(80.0, 180.0, 30, Sex::Male)
}

/// 25-year-old female, 60 kg, 165 cm
pub fn adult_female_request() -> EnergyPlanRequest {
    EnergyPlanRequest::new(60.0, 165.0, 25, Sex::Female)
}

/// Compare floats within an absolute tolerance
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}
