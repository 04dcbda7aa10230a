// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod commons;
mod error;
mod observance;
mod schedule;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use commons::{Common, CommonGeneral, Commons};
pub use error::DomainError;
pub use observance::Observance;
pub use schedule::{
    MAX_RELATIVE_ORDINAL, MobileSchedule, MobileScheduleInput, Relation, RelativeDate,
    RelativeDateInput, Schedule,
};
pub use types::{Color, Colors, Grade, Layer, Weekday};
pub use validation::{
    validate_event_key, validate_fixed_date, validate_literal_expression, validate_name,
};
