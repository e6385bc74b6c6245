// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, unit conversions, and service identifiers for the Nutriplan engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values in here are fixed assumptions of the published equations. They are
//! deliberately kept out of runtime configuration: changing one changes the
//! meaning of every plan computed with it.

/// Energy density constants
pub mod energy {
    /// Energy stored per kilogram of body mass change (kcal/kg)
    ///
    /// Used to convert a weight goal into a daily caloric delta.
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

    /// Metabolizable energy of protein (kcal/g)
    pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;

    /// Metabolizable energy of carbohydrate (kcal/g)
    pub const CARBOHYDRATE_KCAL_PER_GRAM: f64 = 4.0;

    /// Metabolizable energy of fat (kcal/g)
    pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
}

/// Pregnancy energy supplements (IOM 2005, kcal/day added to TEE)
pub mod pregnancy {
    /// First trimester supplement
    pub const FIRST_TRIMESTER_KCAL: f64 = 0.0;
    /// Second trimester supplement
    pub const SECOND_TRIMESTER_KCAL: f64 = 340.0;
    /// Third trimester supplement
    pub const THIRD_TRIMESTER_KCAL: f64 = 452.0;
}

/// Unit conversion and measurement constants
pub mod units {
    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
    /// Percentage scale
    pub const PERCENT: f64 = 100.0;
}

/// Adult age boundaries used by formula applicability rules
pub mod age_limits {
    /// Youngest age (years) considered adult
    pub const ADULT_MIN_AGE: u32 = 18;
    /// Oldest age (years) accepted by FAO/WHO without an accuracy warning
    pub const FAO_WHO_MAX_AGE: u32 = 60;
}

/// Service identification
pub mod service_names {
    /// Name used in structured logs
    pub const NUTRIPLAN_ENGINE: &str = "nutriplan";
}
