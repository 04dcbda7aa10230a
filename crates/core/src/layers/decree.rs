// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::layers::item::{LayerItem, Validity};
use crate::names::NameTable;
use litcal_audit::Source;
use serde::{Deserialize, Serialize};

/// One historical amendment to the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecreeRecord {
    /// The decree identifier.
    pub decree_id: String,
    /// The year the decree took effect.
    pub since_year: i32,
    /// The year the decree stopped applying, if superseded.
    #[serde(default)]
    pub until_year: Option<i32>,
    /// Where the decree text can be found.
    #[serde(default)]
    pub url: Option<String>,
    /// What the decree does.
    pub liturgical_event: LayerItem,
}

impl DecreeRecord {
    /// Returns the decree's validity window.
    #[must_use]
    pub const fn validity(&self) -> Validity {
        Validity {
            since_year: Some(self.since_year),
            until_year: self.until_year,
        }
    }

    /// Returns the trail source for this decree.
    #[must_use]
    pub fn source(&self) -> Source {
        Source::new(
            self.decree_id.clone(),
            self.url
                .clone()
                .unwrap_or_else(|| format!("decree of {}", self.since_year)),
        )
    }
}

/// The decree layer: every decree plus the names it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecreeLayer {
    /// The locale `names` is written in.
    #[serde(default)]
    pub locale: Option<String>,
    /// Localized names keyed by event key.
    #[serde(default)]
    pub names: NameTable,
    /// The decrees, in application order.
    #[serde(default)]
    pub decrees: Vec<DecreeRecord>,
}
