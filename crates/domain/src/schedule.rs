// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Weekday;
use crate::validation::{validate_fixed_date, validate_literal_expression};
use serde::{Deserialize, Serialize};

/// The highest ordinal accepted by a relative-date descriptor.
pub const MAX_RELATIVE_ORDINAL: u8 = 5;

/// When an observance falls in the year.
///
/// Schedules are descriptions only; turning them into concrete dates is
/// handled downstream of resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Schedule {
    /// A fixed day of a fixed month.
    Fixed {
        /// Month, 1-12.
        month: u8,
        /// Day of the month.
        day: u8,
    },
    /// A date expressed relative to something else.
    Mobile {
        /// The relative-date expression.
        strtotime: MobileSchedule,
    },
}

impl Schedule {
    /// Creates a validated fixed schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the month or day is out of range.
    pub fn fixed(month: u8, day: u8) -> Result<Self, DomainError> {
        validate_fixed_date(month, day)?;
        Ok(Self::Fixed { month, day })
    }

    /// Returns `"fixed"` or `"mobile"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Fixed { .. } => "fixed",
            Self::Mobile { .. } => "mobile",
        }
    }
}

/// Direction of a relative-date descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Counting backwards from the anchor event.
    Before,
    /// Counting forwards from the anchor event.
    After,
}

/// "The N-th weekday before/after event X".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelativeDate {
    /// Which occurrence of the weekday, starting at 1.
    pub ordinal: u8,
    /// The weekday being counted.
    pub weekday: Weekday,
    /// Counting direction.
    pub relation: Relation,
    /// The anchor event.
    pub event_key: String,
}

/// A validated mobile schedule expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MobileSchedule {
    /// A literal relative-date string, e.g. `"last Sunday of October"`.
    Literal(String),
    /// A structured relative-date descriptor.
    Relative(RelativeDate),
}

/// A mobile schedule expression as it appears in source data, before
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MobileScheduleInput {
    /// A literal string.
    Literal(String),
    /// A structured descriptor; every field is optional so that incomplete
    /// descriptors reach validation instead of failing to decode.
    Relative(RelativeDateInput),
}

/// Unvalidated fields of a structured relative-date descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeDateInput {
    /// Which occurrence of the weekday.
    #[serde(default)]
    pub ordinal: Option<i64>,
    /// The weekday name.
    #[serde(default)]
    pub weekday: Option<String>,
    /// `"before"` or `"after"`.
    #[serde(default)]
    pub relation: Option<String>,
    /// The anchor event.
    #[serde(default)]
    pub event_key: Option<String>,
}

impl TryFrom<&MobileScheduleInput> for MobileSchedule {
    type Error = DomainError;

    fn try_from(input: &MobileScheduleInput) -> Result<Self, Self::Error> {
        match input {
            MobileScheduleInput::Literal(expression) => {
                validate_literal_expression(expression)?;
                Ok(Self::Literal(expression.trim().to_string()))
            }
            MobileScheduleInput::Relative(descriptor) => {
                Ok(Self::Relative(RelativeDate::try_from(descriptor)?))
            }
        }
    }
}

impl TryFrom<&RelativeDateInput> for RelativeDate {
    type Error = DomainError;

    fn try_from(input: &RelativeDateInput) -> Result<Self, Self::Error> {
        let ordinal: i64 = input.ordinal.ok_or_else(|| malformed("missing ordinal"))?;
        let ordinal: u8 = u8::try_from(ordinal)
            .ok()
            .filter(|value| (1..=MAX_RELATIVE_ORDINAL).contains(value))
            .ok_or_else(|| {
                malformed(&format!(
                    "ordinal {ordinal} must be between 1 and {MAX_RELATIVE_ORDINAL}"
                ))
            })?;

        let weekday: Weekday = input
            .weekday
            .as_deref()
            .ok_or_else(|| malformed("missing weekday"))?
            .parse()
            .map_err(|err: DomainError| malformed(&err.to_string()))?;

        let relation: Relation = match input.relation.as_deref().map(str::trim) {
            Some("before") => Relation::Before,
            Some("after") => Relation::After,
            Some(other) => {
                return Err(malformed(&format!(
                    "relation '{other}' must be 'before' or 'after'"
                )));
            }
            None => return Err(malformed("missing relation")),
        };

        let event_key: String = match input.event_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => return Err(malformed("missing anchor event key")),
        };

        Ok(Self {
            ordinal,
            weekday,
            relation,
            event_key,
        })
    }
}

fn malformed(reason: &str) -> DomainError {
    DomainError::MalformedSchedule {
        reason: reason.to_string(),
    }
}
