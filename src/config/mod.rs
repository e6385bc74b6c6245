// ABOUTME: Configuration management module for engine defaults and presentation thresholds
// ABOUTME: Loads defaults, applies environment overrides, and validates engine settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the Nutriplan engine
//!
//! - **Engine**: default formula, anthropometric thresholds, macro split defaults
//! - **Error**: configuration validation errors

/// Engine configuration with environment overrides
pub mod engine;
/// Configuration error types
pub mod error;

pub use engine::{AnthropometricsConfig, EngineConfig, MacroConfig};
pub use error::ConfigError;
