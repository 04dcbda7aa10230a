// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::commons::Commons;
use crate::error::DomainError;
use crate::schedule::Schedule;
use crate::types::{Colors, Grade};
use crate::validation::{validate_event_key, validate_name};

/// One named entry in the liturgical calendar.
///
/// The key and schedule are fixed at creation. Name and grade may be
/// changed by later layers through the mutators below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observance {
    event_key: String,
    name: String,
    schedule: Schedule,
    colors: Colors,
    grade: Grade,
    grade_display: Option<String>,
    commons: Commons,
}

impl Observance {
    /// Creates a new `Observance`.
    ///
    /// # Arguments
    ///
    /// * `event_key` - The registry key
    /// * `name` - The localized display name
    /// * `schedule` - When the observance falls
    /// * `colors` - The liturgical colors
    /// * `grade` - The precedence rank
    /// * `commons` - The commons classification
    ///
    /// # Errors
    ///
    /// Returns an error if the key or name is invalid.
    pub fn new(
        event_key: &str,
        name: &str,
        schedule: Schedule,
        colors: Colors,
        grade: Grade,
        commons: Commons,
    ) -> Result<Self, DomainError> {
        validate_event_key(event_key)?;
        validate_name(event_key, name)?;

        Ok(Self {
            event_key: event_key.to_string(),
            name: name.to_string(),
            schedule,
            colors,
            grade,
            grade_display: forced_grade_display(grade, None),
            commons,
        })
    }

    /// Sets the grade display override.
    ///
    /// The override is always empty for [`Grade::HigherSolemnity`].
    #[must_use]
    pub fn with_grade_display(mut self, grade_display: Option<String>) -> Self {
        self.grade_display = forced_grade_display(self.grade, grade_display);
        self
    }

    /// Returns the registry key.
    #[must_use]
    pub fn event_key(&self) -> &str {
        &self.event_key
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the schedule.
    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Returns the liturgical colors.
    #[must_use]
    pub const fn colors(&self) -> &Colors {
        &self.colors
    }

    /// Returns the grade.
    #[must_use]
    pub const fn grade(&self) -> Grade {
        self.grade
    }

    /// Returns the grade display override, if any.
    #[must_use]
    pub fn grade_display(&self) -> Option<&str> {
        self.grade_display.as_deref()
    }

    /// Returns the commons classification.
    #[must_use]
    pub const fn commons(&self) -> &Commons {
        &self.commons
    }

    /// Replaces the display name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the new name is blank.
    pub fn rename(&mut self, name: &str) -> Result<(), DomainError> {
        validate_name(&self.event_key, name)?;
        self.name = name.to_string();
        Ok(())
    }

    /// Changes the grade.
    ///
    /// Leaving [`Grade::HigherSolemnity`] drops the forced empty override.
    pub fn regrade(&mut self, grade: Grade) {
        if self.grade == Grade::HigherSolemnity && self.grade_display.as_deref() == Some("") {
            self.grade_display = None;
        }
        self.grade = grade;
        self.grade_display = forced_grade_display(grade, self.grade_display.take());
    }

    /// Returns a compact one-line description used in resolution trails.
    #[must_use]
    pub fn summary(&self) -> String {
        let when: String = match &self.schedule {
            Schedule::Fixed { month, day } => format!("{month:02}-{day:02}"),
            Schedule::Mobile { .. } => String::from("mobile"),
        };
        format!(
            "key={},name={},when={},grade={},color={}",
            self.event_key,
            self.name,
            when,
            self.grade.value(),
            self.colors.primary()
        )
    }
}

fn forced_grade_display(grade: Grade, requested: Option<String>) -> Option<String> {
    if grade == Grade::HigherSolemnity {
        Some(String::new())
    } else {
        requested
    }
}
