// ABOUTME: Energy plan command for nutriplan-cli
// ABOUTME: Reads an EnergyPlanRequest JSON from a file or stdin and prints the EnergyPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::{
    config::EngineConfig,
    errors::{AppError, AppResult, ErrorCode},
    intelligence::{calculate_energy_plan, EnergyPlanRequest},
    logging::AppLogger,
};
use std::fs;
use std::io::{self, Read};
use tracing::info;

use crate::helpers::display::print_json;

type Result<T> = AppResult<T>;

/// Read the request source: a path, or `-` for stdin
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }
    fs::read_to_string(input).map_err(|e| {
        AppError::new(
            ErrorCode::StorageError,
            format!("Cannot read request file '{input}': {e}"),
        )
        .with_field("input")
        .with_source(e)
    })
}

/// Parse a request document
pub fn parse_request(raw: &str) -> Result<EnergyPlanRequest> {
    serde_json::from_str(raw).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("Invalid energy plan request: {e}"),
        )
        .with_source(e)
    })
}

/// Compute and print an energy plan
pub fn run(input: &str, config: &EngineConfig, pretty: bool) -> Result<()> {
    info!("Computing energy plan from {}", if input == "-" { "stdin" } else { input });

    let request = parse_request(&read_input(input)?)?;
    let plan = calculate_energy_plan(&request, config)?;
    AppLogger::log_plan_computed(&plan);

    print_json(&plan, pretty)
}
