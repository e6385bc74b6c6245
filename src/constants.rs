// ABOUTME: Re-exports energy and unit constants from nutriplan-core
// ABOUTME: Single source for the body-mass energy density and Atwater factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutriplan_core::constants::*;
