// ABOUTME: Output formatting helpers for nutriplan-cli
// ABOUTME: JSON results on stdout and the JSON error envelope on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::errors::{AppError, AppResult, ErrorResponse};
use serde::Serialize;
use tracing::debug;

/// Print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Print an error as the JSON envelope on stderr
pub fn print_error(err: AppError) {
    debug!(code = ?err.code, "Command failed: {}", err.message);
    let response = ErrorResponse::from(err);
    match serde_json::to_string(&response) {
        Ok(rendered) => eprintln!("{rendered}"),
        Err(_) => eprintln!("{}: {}", response.error.code.description(), response.error.message),
    }
}
