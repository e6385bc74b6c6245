// ABOUTME: Whole-year age calculation from birth date and reference date
// ABOUTME: Calendar-aware: a birthday not yet reached in the reference year is not counted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Age in whole years at `reference`
///
/// A reference date before the birth date yields a negative number; callers
/// that need a formula age should use [`age_years_for_formula`].
#[must_use]
pub fn calculate_age(birth_date: NaiveDate, reference_date: NaiveDate) -> i32 {
    let years = reference_date.year() - birth_date.year();
    let birthday_pending =
        (reference_date.month(), reference_date.day()) < (birth_date.month(), birth_date.day());
    if birthday_pending {
        years - 1
    } else {
        years
    }
}

/// Age in whole years, as consumed by the BMR formulas
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the reference date precedes the birth date.
pub fn age_years_for_formula(birth_date: NaiveDate, reference_date: NaiveDate) -> AppResult<u32> {
    let age = calculate_age(birth_date, reference_date);
    u32::try_from(age).map_err(|_| {
        AppError::out_of_range(format!(
            "Reference date {reference_date} is before birth date {birth_date}"
        ))
        .with_field("birth_date")
    })
}
