// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use litcal_domain::Layer;
use serde::Serialize;

/// The order in which layers are applied. Each layer may only see
/// observances created by the layers before it.
pub const PIPELINE: [Layer; 5] = [
    Layer::Sanctorale,
    Layer::Decree,
    Layer::WiderRegion,
    Layer::National,
    Layer::Diocesan,
];

/// How far a resolution run has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPhase {
    /// No layer applied yet.
    Empty,
    /// Base missals applied.
    SanctoraleApplied,
    /// Decrees applied.
    DecreesApplied,
    /// Wider-region layer applied.
    WiderRegionApplied,
    /// National layer applied.
    NationalApplied,
    /// Diocesan layer applied.
    DiocesanApplied,
    /// The registry has been handed out.
    Resolved,
    /// A layer failed; the run cannot continue.
    Failed,
}

impl ResolutionPhase {
    /// Returns the string representation of the phase.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::SanctoraleApplied => "sanctorale_applied",
            Self::DecreesApplied => "decrees_applied",
            Self::WiderRegionApplied => "wider_region_applied",
            Self::NationalApplied => "national_applied",
            Self::DiocesanApplied => "diocesan_applied",
            Self::Resolved => "resolved",
            Self::Failed => "failed",
        }
    }

    /// Returns the phase reached once `layer` has been applied.
    #[must_use]
    pub const fn after(layer: Layer) -> Self {
        match layer {
            Layer::Sanctorale => Self::SanctoraleApplied,
            Layer::Decree => Self::DecreesApplied,
            Layer::WiderRegion => Self::WiderRegionApplied,
            Layer::National => Self::NationalApplied,
            Layer::Diocesan => Self::DiocesanApplied,
        }
    }

    /// Returns the layer that may be applied in this phase, if any.
    #[must_use]
    pub const fn expected_stage(&self) -> Option<Layer> {
        match self {
            Self::Empty => Some(Layer::Sanctorale),
            Self::SanctoraleApplied => Some(Layer::Decree),
            Self::DecreesApplied => Some(Layer::WiderRegion),
            Self::WiderRegionApplied => Some(Layer::National),
            Self::NationalApplied => Some(Layer::Diocesan),
            Self::DiocesanApplied | Self::Resolved | Self::Failed => None,
        }
    }

    /// Returns whether `layer` may be applied next.
    #[must_use]
    pub fn accepts(&self, layer: Layer) -> bool {
        self.expected_stage() == Some(layer)
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Failed)
    }
}

impl std::fmt::Display for ResolutionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
