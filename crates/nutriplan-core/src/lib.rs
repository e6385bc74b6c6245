// ABOUTME: Core types and constants for the Nutriplan energy expenditure engine
// ABOUTME: Foundation crate with error handling, energy constants, and anthropometric models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types and constants for the Nutriplan
//! energy engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities and unit constants used by every calculator
//! - **models**: Anthropometric value types (`Sex`, `AnthropometricInput`, `Measurement`)

/// Unified error handling system with standard error codes and JSON responses
pub mod errors;

/// Energy and unit constants organized by domain
pub mod constants;

/// Anthropometric data models
pub mod models;
