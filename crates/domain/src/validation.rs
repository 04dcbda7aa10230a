// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// A leap year, so that February 29 is accepted for fixed observances.
const REFERENCE_LEAP_YEAR: i32 = 2024;

/// Validates that an event key is usable as a registry key.
///
/// # Arguments
///
/// * `event_key` - The key to validate
///
/// # Errors
///
/// Returns an error if the key is empty or contains whitespace.
pub fn validate_event_key(event_key: &str) -> Result<(), DomainError> {
    if event_key.is_empty() {
        return Err(DomainError::InvalidEventKey(String::from(
            "Event key cannot be empty",
        )));
    }

    if event_key.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidEventKey(format!(
            "Event key '{event_key}' cannot contain whitespace"
        )));
    }

    Ok(())
}

/// Validates that an observance name is not blank.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is empty after trimming.
pub fn validate_name(event_key: &str, name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName {
            event_key: event_key.to_string(),
        });
    }
    Ok(())
}

/// Validates a month/day pair for a fixed observance.
///
/// February 29 is a valid fixed date; whether it occurs in a given year
/// is decided when dates are computed.
///
/// # Arguments
///
/// * `month` - The month, 1-12
/// * `day` - The day of the month
///
/// # Errors
///
/// Returns an error if:
/// - The month is not between 1 and 12
/// - The day is zero or past the end of the month
pub fn validate_fixed_date(month: u8, day: u8) -> Result<(), DomainError> {
    let calendar_month: time::Month =
        time::Month::try_from(month).map_err(|_| DomainError::InvalidMonth { month })?;

    let max: u8 = calendar_month.length(REFERENCE_LEAP_YEAR);
    if day == 0 || day > max {
        return Err(DomainError::InvalidDay { month, day, max });
    }

    Ok(())
}

/// Validates a literal relative-date expression.
///
/// The expression itself is interpreted downstream; here it only has to
/// be non-blank printable text.
///
/// # Errors
///
/// Returns `DomainError::MalformedSchedule` if the expression is blank or
/// contains control characters.
pub fn validate_literal_expression(expression: &str) -> Result<(), DomainError> {
    if expression.trim().is_empty() {
        return Err(DomainError::MalformedSchedule {
            reason: String::from("literal expression cannot be empty"),
        });
    }

    if expression.chars().any(char::is_control) {
        return Err(DomainError::MalformedSchedule {
            reason: format!(
                "literal expression '{}' contains control characters",
                expression.escape_default()
            ),
        });
    }

    Ok(())
}
