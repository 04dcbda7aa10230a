// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serializable views of a resolved calendar.

use crate::resolver::{Resolution, Settings};
use litcal_audit::ResolutionTrail;
use litcal_domain::{Color, MobileSchedule, Observance, Schedule};
use serde::Serialize;

/// One resolved observance, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservanceView {
    /// The registry key.
    pub event_key: String,
    /// The display name.
    pub name: String,
    /// `"fixed"` or `"mobile"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Month, for fixed observances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    /// Day of the month, for fixed observances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
    /// The relative-date expression, for mobile observances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strtotime: Option<MobileSchedule>,
    /// Color codes, canonical first.
    pub color: Vec<Color>,
    /// Color labels, in the same order.
    pub color_lcl: Vec<String>,
    /// Numeric grade.
    pub grade: u8,
    /// Grade label.
    pub grade_lcl: String,
    /// Grade abbreviation.
    pub grade_abbr: String,
    /// Grade label override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_display: Option<String>,
    /// Commons codes.
    pub common: Vec<String>,
    /// Commons label.
    pub common_lcl: String,
}

impl From<&Observance> for ObservanceView {
    fn from(observance: &Observance) -> Self {
        let (month, day, strtotime) = match observance.schedule() {
            Schedule::Fixed { month, day } => (Some(*month), Some(*day), None),
            Schedule::Mobile { strtotime } => (None, None, Some(strtotime.clone())),
        };
        let colors: &[Color] = observance.colors().as_slice();

        Self {
            event_key: observance.event_key().to_string(),
            name: observance.name().to_string(),
            kind: observance.schedule().kind(),
            month,
            day,
            strtotime,
            color: colors.to_vec(),
            color_lcl: colors.iter().map(|color| color.label().to_string()).collect(),
            grade: observance.grade().value(),
            grade_lcl: observance.grade().label().to_string(),
            grade_abbr: observance.grade().abbreviation().to_string(),
            grade_display: observance.grade_display().map(str::to_string),
            common: observance.commons().to_strings(),
            common_lcl: observance.commons().label(),
        }
    }
}

/// A resolved calendar ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    /// What the calendar was resolved for.
    pub settings: Settings,
    /// The observances, in registry order.
    pub litcal: Vec<ObservanceView>,
    /// The resolution trail, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail: Option<ResolutionTrail>,
}

impl CalendarView {
    /// Builds the view of a resolution.
    ///
    /// # Arguments
    ///
    /// * `resolution` - The finished run
    /// * `include_trail` - Whether to carry the resolution trail
    #[must_use]
    pub fn new(resolution: &Resolution, include_trail: bool) -> Self {
        Self {
            settings: resolution.settings.clone(),
            litcal: resolution.registry.iter().map(ObservanceView::from).collect(),
            trail: include_trail.then(|| resolution.trail.clone()),
        }
    }
}
