// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur while constructing or validating observance data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Event key is empty or otherwise unusable.
    #[error("Invalid event key: {0}")]
    InvalidEventKey(String),
    /// Observance name is empty.
    #[error("Invalid name for '{event_key}': name cannot be empty")]
    InvalidName {
        /// The event key the name was meant for.
        event_key: String,
    },
    /// Month value outside 1-12.
    #[error("Invalid month {month}: must be between 1 and 12")]
    InvalidMonth {
        /// The rejected month.
        month: u8,
    },
    /// Day value outside the month's length.
    #[error("Invalid day {day} for month {month}: must be between 1 and {max}")]
    InvalidDay {
        /// The month the day was checked against.
        month: u8,
        /// The rejected day.
        day: u8,
        /// The last valid day of the month.
        max: u8,
    },
    /// A grade value outside the known precedence table.
    #[error("Invalid grade value {0}: must be between 0 and 7")]
    InvalidGrade(u8),
    /// A liturgical color name that is not recognized.
    #[error("Invalid liturgical color: {0}")]
    InvalidColor(String),
    /// An observance must carry at least one color.
    #[error("At least one liturgical color is required")]
    EmptyColors,
    /// Commons could not be classified.
    #[error("Invalid commons: {0}")]
    InvalidCommons(String),
    /// A weekday name that is not recognized.
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),
    /// A mobile schedule expression that is neither a usable literal
    /// nor a valid relative-date descriptor.
    #[error("Malformed schedule: {reason}")]
    MalformedSchedule {
        /// Why the expression was rejected.
        reason: String,
    },
}
