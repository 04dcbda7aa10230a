// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Decoded layer inputs.
//!
//! Each layer supplies its records together with the name table used to
//! localize them. Loading and schema validation happen before these types
//! are built.

mod decree;
mod diocesan;
mod item;
mod regional;
mod sanctorale;

pub use decree::{DecreeLayer, DecreeRecord};
pub use diocesan::DiocesanLayer;
pub use item::{LayerItem, LayerRecord, RecordMetadata, Validity};
pub use regional::{NationalLayer, WiderRegionLayer};
pub use sanctorale::{Missal, RecordKind, SanctoraleRecord};

use serde::{Deserialize, Serialize};

/// Everything one resolution run consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerInputs {
    /// Base missals, in application order.
    #[serde(default)]
    pub sanctorale: Vec<Missal>,
    /// Historical decrees.
    #[serde(default)]
    pub decrees: DecreeLayer,
    /// The requested national calendar, with its wider-region dependency.
    #[serde(default)]
    pub national: Option<NationalLayer>,
    /// The requested diocesan calendar.
    #[serde(default)]
    pub diocesan: Option<DiocesanLayer>,
}

impl LayerInputs {
    /// Returns the wider region the national layer depends on, if any.
    #[must_use]
    pub fn wider_region(&self) -> Option<&WiderRegionLayer> {
        self.national
            .as_ref()
            .and_then(|national| national.wider_region.as_ref())
    }
}
