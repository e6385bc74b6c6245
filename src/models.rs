// ABOUTME: Re-exports anthropometric models from nutriplan-core
// ABOUTME: Sex, AnthropometricInput, and Measurement share one type identity across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutriplan_core::models::*;
