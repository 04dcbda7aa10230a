// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::layers::item::LayerRecord;
use crate::names::NameTable;
use litcal_audit::Source;
use serde::{Deserialize, Serialize};

/// One diocese's additions to its national calendar.
///
/// Diocesan records may only create observances; their keys and names are
/// namespaced by the diocese before insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiocesanLayer {
    /// The diocese identifier, used as key prefix.
    pub diocese_id: String,
    /// The diocese display name, used as name prefix.
    pub diocese_name: String,
    /// The nation the diocese belongs to.
    pub nation: String,
    /// The locale `names` is written in.
    #[serde(default)]
    pub locale: Option<String>,
    /// Localized names keyed by the original, un-prefixed event key.
    #[serde(default)]
    pub names: NameTable,
    /// The records, in application order.
    #[serde(default)]
    pub items: Vec<LayerRecord>,
}

impl DiocesanLayer {
    /// Returns the trail source for this diocese's records.
    #[must_use]
    pub fn source(&self) -> Source {
        Source::new(self.diocese_id.clone(), self.diocese_name.clone())
    }

    /// Checks that this diocese sits on top of its own nation's calendar.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No national calendar has been applied
    /// - The national calendar belongs to another nation
    pub fn validate_nation(&self, national: Option<&str>) -> Result<(), CoreError> {
        let Some(national) = national else {
            return Err(CoreError::DioceseWithoutNation {
                diocese: self.diocese_id.clone(),
            });
        };

        if national != self.nation {
            return Err(CoreError::DioceseNationMismatch {
                diocese: self.diocese_id.clone(),
                expected: national.to_string(),
                found: self.nation.clone(),
            });
        }

        Ok(())
    }
}
