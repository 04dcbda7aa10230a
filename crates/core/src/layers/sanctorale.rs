// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::Action;
use crate::error::CoreError;
use crate::names::NameTable;
use litcal_audit::Source;
use litcal_domain::{Colors, Commons, Grade, Layer};
use serde::{Deserialize, Serialize};

/// How a missal record is dated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Month and day.
    #[default]
    Fixed,
    /// Relative date; not accepted in a missal's sanctorale.
    Mobile,
}

/// One entry of a missal's proper of saints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanctoraleRecord {
    /// The registry key.
    pub event_key: String,
    /// Month, 1-12.
    pub month: u8,
    /// Day of the month.
    pub day: u8,
    /// The precedence rank.
    pub grade: Grade,
    /// The liturgical colors.
    #[serde(rename = "color")]
    pub colors: Colors,
    /// How the record is dated.
    #[serde(rename = "type", default)]
    pub kind: RecordKind,
    /// The commons classification.
    #[serde(rename = "common", default)]
    pub commons: Commons,
    /// Optional grade label override.
    #[serde(default)]
    pub grade_display: Option<String>,
}

impl SanctoraleRecord {
    /// Builds the create action for this record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The record is not of fixed type
    /// - `names` has no name for the record's key
    pub fn to_action(&self, layer: Layer, names: &NameTable) -> Result<Action, CoreError> {
        if self.kind != RecordKind::Fixed {
            return Err(CoreError::MalformedSchedule {
                event_key: self.event_key.clone(),
                reason: String::from("missal sanctorale records must have a fixed date"),
            });
        }

        Ok(Action::CreateFixed {
            event_key: self.event_key.clone(),
            name: names.require(&self.event_key, layer)?.to_string(),
            month: self.month,
            day: self.day,
            colors: self.colors.clone(),
            grade: self.grade,
            commons: self.commons.clone(),
            grade_display: self.grade_display.clone(),
        })
    }
}

/// The proper of saints of one edition of the Roman Missal, with the
/// names of its entries in the requested locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Missal {
    /// The missal identifier (e.g. `EDITIO_TYPICA_1970`).
    pub missal_id: String,
    /// The locale `names` is written in.
    #[serde(default)]
    pub locale: Option<String>,
    /// Localized names keyed by event key.
    #[serde(default)]
    pub names: NameTable,
    /// The entries, in source order.
    #[serde(default)]
    pub records: Vec<SanctoraleRecord>,
}

impl Missal {
    /// Returns the trail source for this missal's records.
    #[must_use]
    pub fn source(&self) -> Source {
        Source::new(
            self.missal_id.clone(),
            format!("missal ({})", self.locale.as_deref().unwrap_or("default locale")),
        )
    }
}
