// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::{Action, ActionKind};
use crate::error::CoreError;
use crate::names::NameTable;
use litcal_domain::{Colors, Commons, Grade, Layer, MobileSchedule, MobileScheduleInput, Schedule};
use serde::{Deserialize, Serialize};

/// One decoded `liturgical_event` entry from a decree, regional, national,
/// or diocesan dataset.
///
/// Items carry no names; names are looked up in the layer's table when the
/// item is turned into an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LayerItem {
    /// Introduce an observance on a fixed day.
    CreateFixed {
        /// The new key.
        event_key: String,
        /// Month, 1-12.
        month: u8,
        /// Day of the month.
        day: u8,
        /// The liturgical colors.
        #[serde(rename = "color")]
        colors: Colors,
        /// The precedence rank.
        grade: Grade,
        /// The commons classification.
        #[serde(rename = "common", default)]
        commons: Commons,
        /// Optional grade label override.
        #[serde(default)]
        grade_display: Option<String>,
    },
    /// Introduce an observance with a relative date.
    CreateMobile {
        /// The new key.
        event_key: String,
        /// The relative-date expression, validated on conversion.
        strtotime: MobileScheduleInput,
        /// The liturgical colors.
        #[serde(rename = "color")]
        colors: Colors,
        /// The precedence rank.
        grade: Grade,
        /// The commons classification.
        #[serde(rename = "common", default)]
        commons: Commons,
        /// Optional grade label override.
        #[serde(default)]
        grade_display: Option<String>,
    },
    /// Change an existing observance's name.
    Rename {
        /// The target key.
        event_key: String,
    },
    /// Change an existing observance's grade.
    Regrade {
        /// The target key.
        event_key: String,
        /// The new grade.
        grade: Grade,
    },
    /// Retitle an observance for a new Doctor of the Church.
    PromoteToDoctor {
        /// The target key.
        event_key: String,
        /// The commons cited by the decree.
        #[serde(rename = "common", default)]
        commons: Commons,
    },
    /// Retitle an observance for a new patron.
    PromoteToPatron {
        /// The target key.
        event_key: String,
        /// The new grade, if any.
        #[serde(default)]
        grade: Option<Grade>,
    },
    /// Move an observance; either `month` and `day`, or `strtotime`.
    Relocate {
        /// The target key.
        event_key: String,
        /// New month.
        #[serde(default)]
        month: Option<u8>,
        /// New day.
        #[serde(default)]
        day: Option<u8>,
        /// New relative-date expression.
        #[serde(default)]
        strtotime: Option<MobileScheduleInput>,
    },
}

impl LayerItem {
    /// Returns the key this item targets, before any namespacing.
    #[must_use]
    pub fn event_key(&self) -> &str {
        match self {
            Self::CreateFixed { event_key, .. }
            | Self::CreateMobile { event_key, .. }
            | Self::Rename { event_key }
            | Self::Regrade { event_key, .. }
            | Self::PromoteToDoctor { event_key, .. }
            | Self::PromoteToPatron { event_key, .. }
            | Self::Relocate { event_key, .. } => event_key,
        }
    }

    /// Returns the kind of action this item becomes.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::CreateFixed { .. } => ActionKind::CreateFixed,
            Self::CreateMobile { .. } => ActionKind::CreateMobile,
            Self::Rename { .. } => ActionKind::Rename,
            Self::Regrade { .. } => ActionKind::Regrade,
            Self::PromoteToDoctor { .. } => ActionKind::PromoteToDoctor,
            Self::PromoteToPatron { .. } => ActionKind::PromoteToPatron,
            Self::Relocate { .. } => ActionKind::Relocate,
        }
    }

    /// Builds the action for this item, localizing names from `names`.
    ///
    /// # Arguments
    ///
    /// * `layer` - The layer issuing the item, for error context
    /// * `names` - The layer's name table
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required name is missing from `names`
    /// - A mobile or relocation schedule is malformed
    pub fn to_action(&self, layer: Layer, names: &NameTable) -> Result<Action, CoreError> {
        match self {
            Self::CreateFixed {
                event_key,
                month,
                day,
                colors,
                grade,
                commons,
                grade_display,
            } => Ok(Action::CreateFixed {
                event_key: event_key.clone(),
                name: names.require(event_key, layer)?.to_string(),
                month: *month,
                day: *day,
                colors: colors.clone(),
                grade: *grade,
                commons: commons.clone(),
                grade_display: grade_display.clone(),
            }),
            Self::CreateMobile {
                event_key,
                strtotime,
                colors,
                grade,
                commons,
                grade_display,
            } => {
                let name: String = names.require(event_key, layer)?.to_string();
                let strtotime: MobileSchedule = MobileSchedule::try_from(strtotime)
                    .map_err(|err| CoreError::from_domain(event_key, err))?;
                Ok(Action::CreateMobile {
                    event_key: event_key.clone(),
                    name,
                    strtotime,
                    colors: colors.clone(),
                    grade: *grade,
                    commons: commons.clone(),
                    grade_display: grade_display.clone(),
                })
            }
            Self::Rename { event_key } => Ok(Action::Rename {
                event_key: event_key.clone(),
                name: names.require(event_key, layer)?.to_string(),
            }),
            Self::Regrade { event_key, grade } => Ok(Action::Regrade {
                event_key: event_key.clone(),
                grade: *grade,
            }),
            Self::PromoteToDoctor { event_key, commons } => Ok(Action::PromoteToDoctor {
                event_key: event_key.clone(),
                name: names.require(event_key, layer)?.to_string(),
                commons: commons.clone(),
            }),
            Self::PromoteToPatron { event_key, grade } => Ok(Action::PromoteToPatron {
                event_key: event_key.clone(),
                name: names.require(event_key, layer)?.to_string(),
                grade: *grade,
            }),
            Self::Relocate {
                event_key,
                month,
                day,
                strtotime,
            } => Ok(Action::Relocate {
                event_key: event_key.clone(),
                schedule: relocation_schedule(event_key, *month, *day, strtotime.as_ref())?,
            }),
        }
    }
}

fn relocation_schedule(
    event_key: &str,
    month: Option<u8>,
    day: Option<u8>,
    strtotime: Option<&MobileScheduleInput>,
) -> Result<Schedule, CoreError> {
    match (month, day, strtotime) {
        (Some(month), Some(day), None) => {
            Schedule::fixed(month, day).map_err(|err| CoreError::from_domain(event_key, err))
        }
        (None, None, Some(expression)) => {
            let strtotime: MobileSchedule = MobileSchedule::try_from(expression)
                .map_err(|err| CoreError::from_domain(event_key, err))?;
            Ok(Schedule::Mobile { strtotime })
        }
        _ => Err(CoreError::MalformedSchedule {
            event_key: event_key.to_string(),
            reason: String::from("relocation needs either month and day, or strtotime"),
        }),
    }
}

/// The years in which a record applies.
///
/// A record is in effect from `since_year` (inclusive) until `until_year`
/// (exclusive). Missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validity {
    /// First year the record applies.
    #[serde(default)]
    pub since_year: Option<i32>,
    /// First year the record no longer applies.
    #[serde(default)]
    pub until_year: Option<i32>,
}

impl Validity {
    /// Returns whether the record applies in `year`.
    ///
    /// Without a year every record applies.
    #[must_use]
    pub const fn in_effect(&self, year: Option<i32>) -> bool {
        let Some(year) = year else {
            return true;
        };
        let started: bool = match self.since_year {
            Some(since) => since <= year,
            None => true,
        };
        let ended: bool = match self.until_year {
            Some(until) => year >= until,
            None => false,
        };
        started && !ended
    }

    /// Describes the window for trail records.
    #[must_use]
    pub fn describe(&self) -> String {
        let since: String = self
            .since_year
            .map_or_else(|| String::from("-"), |year| year.to_string());
        let until: String = self
            .until_year
            .map_or_else(|| String::from("-"), |year| year.to_string());
        format!("since={since},until={until}")
    }
}

/// Per-record metadata of regional, national, and diocesan items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// First year the record applies.
    #[serde(default)]
    pub since_year: Option<i32>,
    /// First year the record no longer applies.
    #[serde(default)]
    pub until_year: Option<i32>,
    /// Reference for the record (e.g. the approving decree).
    #[serde(default)]
    pub url: Option<String>,
}

/// One record of a wider-region, national, or diocesan dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRecord {
    /// The item to apply.
    pub liturgical_event: LayerItem,
    /// Validity and reference data.
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl LayerRecord {
    /// Creates a record with no metadata.
    #[must_use]
    pub fn new(liturgical_event: LayerItem) -> Self {
        Self {
            liturgical_event,
            metadata: RecordMetadata::default(),
        }
    }

    /// Returns the record's validity window.
    #[must_use]
    pub const fn validity(&self) -> Validity {
        Validity {
            since_year: self.metadata.since_year,
            until_year: self.metadata.until_year,
        }
    }
}
