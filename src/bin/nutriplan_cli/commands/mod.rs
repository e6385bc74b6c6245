// ABOUTME: Re-exports command modules for nutriplan-cli
// ABOUTME: Provides the energy plan command and the single-calculator commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calc;
pub mod plan;
