// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::layers::item::LayerRecord;
use crate::layers::sanctorale::Missal;
use crate::names::NameTable;
use litcal_audit::Source;
use serde::{Deserialize, Serialize};

/// Calendar data shared by a group of nations (e.g. `"Europe"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiderRegionLayer {
    /// The wider region identifier.
    pub region: String,
    /// The locale `names` is written in.
    #[serde(default)]
    pub locale: Option<String>,
    /// Localized names keyed by event key.
    #[serde(default)]
    pub names: NameTable,
    /// The records, in application order.
    #[serde(default)]
    pub items: Vec<LayerRecord>,
}

impl WiderRegionLayer {
    /// Returns the trail source for this region's records.
    #[must_use]
    pub fn source(&self) -> Source {
        Source::new(
            self.region.clone(),
            format!(
                "wider region ({})",
                self.locale.as_deref().unwrap_or("default locale")
            ),
        )
    }
}

/// One nation's calendar data.
///
/// A nation may depend on a wider region, whose records are replayed
/// before the nation's own, and may declare localized missals whose
/// entries are created before the nation's own records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalLayer {
    /// The nation identifier (e.g. `"IT"`).
    pub nation: String,
    /// The locale `names` is written in.
    #[serde(default)]
    pub locale: Option<String>,
    /// The wider region this nation depends on.
    #[serde(default)]
    pub wider_region: Option<WiderRegionLayer>,
    /// Localized missals declared by the nation.
    #[serde(default)]
    pub missals: Vec<Missal>,
    /// Localized names keyed by event key.
    #[serde(default)]
    pub names: NameTable,
    /// The nation's own records, in application order.
    #[serde(default)]
    pub items: Vec<LayerRecord>,
}

impl NationalLayer {
    /// Returns the trail source for this nation's records.
    #[must_use]
    pub fn source(&self) -> Source {
        Source::new(
            self.nation.clone(),
            format!(
                "national calendar ({})",
                self.locale.as_deref().unwrap_or("default locale")
            ),
        )
    }
}
