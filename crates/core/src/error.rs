// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::ActionKind;
use crate::pipeline::ResolutionPhase;
use litcal_domain::{DomainError, Layer};
use thiserror::Error;

/// Errors raised by [`Registry`](crate::Registry) operations.
///
/// These carry no layer context; the apply path converts them into
/// [`CoreError`] once it knows which layer and action were involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// An observance with this key is already registered.
    #[error("Event '{0}' is already registered")]
    DuplicateKey(String),
    /// No observance with this key is registered.
    #[error("Event '{0}' is not registered")]
    UnknownKey(String),
}

/// Errors that abort a resolution run.
///
/// Every variant is fatal: the resolver stops at the first one and no
/// partially resolved registry is handed out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A create action targeted a key that already exists, in a layer that
    /// does not skip existing keys.
    #[error("Event '{event_key}' already exists; the {layer} layer cannot create it again")]
    DuplicateKey {
        /// The colliding key.
        event_key: String,
        /// The layer that issued the create.
        layer: Layer,
    },
    /// A mutation targeted a key that does not exist.
    #[error("{action} in the {layer} layer targets unknown event '{event_key}'")]
    UnknownKey {
        /// The missing key.
        event_key: String,
        /// The mutation that was attempted.
        action: ActionKind,
        /// The layer that issued the mutation.
        layer: Layer,
    },
    /// A required localized name is absent from the layer's name table.
    #[error("No name for event '{event_key}' in the {layer} layer's name table")]
    MissingTranslation {
        /// The key whose name was looked up.
        event_key: String,
        /// The layer whose table was consulted.
        layer: Layer,
    },
    /// The action is not one this layer may issue.
    #[error("{action} is not supported in the {layer} layer")]
    UnsupportedAction {
        /// The rejected action.
        action: ActionKind,
        /// The layer that issued it.
        layer: Layer,
    },
    /// A mobile schedule could not be understood.
    #[error("Malformed schedule for event '{event_key}': {reason}")]
    MalformedSchedule {
        /// The key the schedule belongs to.
        event_key: String,
        /// Why the schedule was rejected.
        reason: String,
    },
    /// Observance data failed domain validation.
    #[error("Invalid observance '{event_key}': {source}")]
    InvalidObservance {
        /// The key of the rejected observance.
        event_key: String,
        /// The underlying domain rule.
        #[source]
        source: DomainError,
    },
    /// A layer was applied outside the declared pipeline order.
    #[error("Cannot apply the {stage} layer while resolution is {phase}")]
    StageOutOfOrder {
        /// The layer that was requested.
        stage: Layer,
        /// The phase the resolver was in.
        phase: ResolutionPhase,
    },
    /// An earlier error already aborted this resolution run.
    #[error("Resolution was aborted by an earlier error")]
    ResolutionAborted,
    /// A diocesan layer was supplied without its national layer.
    #[error("Diocese '{diocese}' requires the national calendar of its nation")]
    DioceseWithoutNation {
        /// The diocese identifier.
        diocese: String,
    },
    /// A diocesan layer belongs to a different nation than the national layer.
    #[error("Diocese '{diocese}' belongs to '{found}' but the national calendar is '{expected}'")]
    DioceseNationMismatch {
        /// The diocese identifier.
        diocese: String,
        /// The nation of the national layer.
        expected: String,
        /// The nation the diocese declares.
        found: String,
    },
    /// The wider region applied before a national layer is not the one
    /// that nation declares.
    #[error(
        "National calendar '{nation}' depends on {} but {} was applied",
        region_label(.expected.as_deref()),
        region_label(.found.as_deref())
    )]
    WiderRegionMismatch {
        /// The nation of the national layer.
        nation: String,
        /// The region the nation declares, if any.
        expected: Option<String>,
        /// The region the wider-region stage applied, if any.
        found: Option<String>,
    },
}

fn region_label(region: Option<&str>) -> String {
    region.map_or_else(
        || "no wider region".to_string(),
        |region| format!("wider region '{region}'"),
    )
}

impl CoreError {
    /// Wraps a domain error raised while building or changing `event_key`.
    ///
    /// Schedule problems surface as [`CoreError::MalformedSchedule`]; every
    /// other rule surfaces as [`CoreError::InvalidObservance`].
    #[must_use]
    pub fn from_domain(event_key: &str, err: DomainError) -> Self {
        match err {
            DomainError::MalformedSchedule { reason } => Self::MalformedSchedule {
                event_key: event_key.to_string(),
                reason,
            },
            source => Self::InvalidObservance {
                event_key: event_key.to_string(),
                source,
            },
        }
    }

    /// Returns whether the error points at broken source data rather than
    /// at misuse of the resolver.
    ///
    /// Services should report these as an unavailable calendar, not as a
    /// caller mistake.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        !matches!(
            self,
            Self::StageOutOfOrder { .. } | Self::ResolutionAborted
        )
    }
}
