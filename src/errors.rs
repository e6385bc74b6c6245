// ABOUTME: Re-exports the unified error types from nutriplan-core
// ABOUTME: Keeps crate::errors paths stable for the engine, CLI, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutriplan_core::errors::*;
