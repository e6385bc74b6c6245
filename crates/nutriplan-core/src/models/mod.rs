// ABOUTME: Anthropometric data models shared by every calculator
// ABOUTME: Sex, AnthropometricInput, and Measurement definitions with checked constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod anthropometric;
mod measurement;

pub use anthropometric::{AnthropometricInput, Sex};
pub use measurement::Measurement;
