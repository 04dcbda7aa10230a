// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use litcal_audit::ActionRecord;
use litcal_domain::{Colors, Commons, Grade, Layer, MobileSchedule, Schedule};
use serde::Serialize;

/// An action represents a layer's intent as data only.
///
/// Actions are the only way a layer changes the registry. Names are
/// already localized by the time an action is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Introduce an observance on a fixed day.
    CreateFixed {
        /// The new registry key.
        event_key: String,
        /// The localized name.
        name: String,
        /// Month, 1-12.
        month: u8,
        /// Day of the month.
        day: u8,
        /// The liturgical colors.
        colors: Colors,
        /// The precedence rank.
        grade: Grade,
        /// The commons classification.
        commons: Commons,
        /// Optional grade label override.
        grade_display: Option<String>,
    },
    /// Introduce an observance with a relative date.
    CreateMobile {
        /// The new registry key.
        event_key: String,
        /// The localized name.
        name: String,
        /// The validated relative-date expression.
        strtotime: MobileSchedule,
        /// The liturgical colors.
        colors: Colors,
        /// The precedence rank.
        grade: Grade,
        /// The commons classification.
        commons: Commons,
        /// Optional grade label override.
        grade_display: Option<String>,
    },
    /// Change an existing observance's name.
    Rename {
        /// The target key.
        event_key: String,
        /// The new localized name.
        name: String,
    },
    /// Change an existing observance's grade.
    Regrade {
        /// The target key.
        event_key: String,
        /// The new grade.
        grade: Grade,
    },
    /// Retitle an existing observance after its saint was declared a
    /// Doctor of the Church.
    PromoteToDoctor {
        /// The target key.
        event_key: String,
        /// The new localized name.
        name: String,
        /// The commons cited by the promoting decree.
        commons: Commons,
    },
    /// Retitle an existing observance after its saint was declared patron,
    /// optionally raising its grade.
    PromoteToPatron {
        /// The target key.
        event_key: String,
        /// The new localized name.
        name: String,
        /// The new grade, if the patronage changes it.
        grade: Option<Grade>,
    },
    /// Move an existing observance to another date.
    ///
    /// The move itself happens when dates are assigned, after resolution;
    /// here only the target's existence is checked.
    Relocate {
        /// The target key.
        event_key: String,
        /// The new schedule.
        schedule: Schedule,
    },
}

impl Action {
    /// Returns the registry key this action targets.
    #[must_use]
    pub fn event_key(&self) -> &str {
        match self {
            Self::CreateFixed { event_key, .. }
            | Self::CreateMobile { event_key, .. }
            | Self::Rename { event_key, .. }
            | Self::Regrade { event_key, .. }
            | Self::PromoteToDoctor { event_key, .. }
            | Self::PromoteToPatron { event_key, .. }
            | Self::Relocate { event_key, .. } => event_key,
        }
    }

    /// Returns the kind of this action.
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

    /// Rewrites a create action into a diocese's namespace.
    ///
    /// The key becomes `"{diocese_id}_{key}"` and the name becomes
    /// `"[ {diocese_name} ] {name}"`. Other actions are returned unchanged.
    #[must_use]
    pub fn namespaced(self, diocese_id: &str, diocese_name: &str) -> Self {
        match self {
            Self::CreateFixed {
                event_key,
                name,
                month,
                day,
                colors,
                grade,
                commons,
                grade_display,
            } => Self::CreateFixed {
                event_key: format!("{diocese_id}_{event_key}"),
                name: format!("[ {diocese_name} ] {name}"),
                month,
                day,
                colors,
                grade,
                commons,
                grade_display,
            },
            Self::CreateMobile {
                event_key,
                name,
                strtotime,
                colors,
                grade,
                commons,
                grade_display,
            } => Self::CreateMobile {
                event_key: format!("{diocese_id}_{event_key}"),
                name: format!("[ {diocese_name} ] {name}"),
                strtotime,
                colors,
                grade,
                commons,
                grade_display,
            },
            other => other,
        }
    }

    /// Builds the trail record describing this action.
    #[must_use]
    pub fn record(&self) -> ActionRecord {
        let details: String = match self {
            Self::CreateFixed {
                name,
                month,
                day,
                grade,
                ..
            } => format!("name={name},month={month},day={day},grade={}", grade.value()),
            Self::CreateMobile { name, grade, .. } => {
                format!("name={name},grade={}", grade.value())
            }
            Self::Rename { name, .. } => format!("name={name}"),
            Self::Regrade { grade, .. } => format!("grade={}", grade.value()),
            Self::PromoteToDoctor { name, commons, .. } => {
                format!("name={name},commons={}", commons.to_strings().join("|"))
            }
            Self::PromoteToPatron { name, grade, .. } => match grade {
                Some(grade) => format!("name={name},grade={}", grade.value()),
                None => format!("name={name}"),
            },
            Self::Relocate { schedule, .. } => match schedule {
                Schedule::Fixed { month, day } => format!("month={month},day={day}"),
                Schedule::Mobile { .. } => String::from("mobile"),
            },
        };
        ActionRecord::new(self.kind().as_str().to_string(), Some(details))
    }
}

/// The closed set of action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActionKind {
    /// See [`Action::CreateFixed`].
    CreateFixed,
    /// See [`Action::CreateMobile`].
    CreateMobile,
    /// See [`Action::Rename`].
    Rename,
    /// See [`Action::Regrade`].
    Regrade,
    /// See [`Action::PromoteToDoctor`].
    PromoteToDoctor,
    /// See [`Action::PromoteToPatron`].
    PromoteToPatron,
    /// See [`Action::Relocate`].
    Relocate,
}

impl ActionKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateFixed => "CreateFixed",
            Self::CreateMobile => "CreateMobile",
            Self::Rename => "Rename",
            Self::Regrade => "Regrade",
            Self::PromoteToDoctor => "PromoteToDoctor",
            Self::PromoteToPatron => "PromoteToPatron",
            Self::Relocate => "Relocate",
        }
    }

    /// Returns whether this kind introduces a new observance.
    #[must_use]
    pub const fn is_create(&self) -> bool {
        matches!(self, Self::CreateFixed | Self::CreateMobile)
    }

    /// Returns whether this kind needs a localized name.
    #[must_use]
    pub const fn needs_name(&self) -> bool {
        !matches!(self, Self::Regrade | Self::Relocate)
    }

    /// Returns whether `layer` may issue this kind of action.
    ///
    /// - Sanctorale: fixed creates only
    /// - Decrees: creates, `Rename`, `Regrade`, `PromoteToDoctor`
    /// - Wider region: creates, `Rename`, `Regrade`, `PromoteToPatron`
    /// - National: as the wider region, plus `Relocate`
    /// - Diocesan: creates only
    #[must_use]
    pub const fn permitted_in(&self, layer: Layer) -> bool {
        match layer {
            Layer::Sanctorale => matches!(self, Self::CreateFixed),
            Layer::Decree => match self {
                Self::CreateFixed
                | Self::CreateMobile
                | Self::Rename
                | Self::Regrade
                | Self::PromoteToDoctor => true,
                Self::PromoteToPatron | Self::Relocate => false,
            },
            Layer::WiderRegion => match self {
                Self::CreateFixed
                | Self::CreateMobile
                | Self::Rename
                | Self::Regrade
                | Self::PromoteToPatron => true,
                Self::PromoteToDoctor | Self::Relocate => false,
            },
            Layer::National => match self {
                Self::CreateFixed
                | Self::CreateMobile
                | Self::Rename
                | Self::Regrade
                | Self::PromoteToPatron
                | Self::Relocate => true,
                Self::PromoteToDoctor => false,
            },
            Layer::Diocesan => match self {
                Self::CreateFixed | Self::CreateMobile => true,
                Self::Rename
                | Self::Regrade
                | Self::PromoteToDoctor
                | Self::PromoteToPatron
                | Self::Relocate => false,
            },
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
