// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use litcal_domain::Layer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Localized observance names for one layer, keyed by event key.
///
/// Tables are supplied per run alongside their layer; nothing here is
/// shared between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameTable {
    names: HashMap<String, String>,
}

impl NameTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a name.
    pub fn insert(&mut self, event_key: &str, name: &str) {
        self.names.insert(event_key.to_string(), name.to_string());
    }

    /// Looks up a name. Blank names count as absent.
    #[must_use]
    pub fn get(&self, event_key: &str) -> Option<&str> {
        self.names
            .get(event_key)
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
    }

    /// Looks up a name that the acting layer requires.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingTranslation` if the key has no name.
    pub fn require(&self, event_key: &str, layer: Layer) -> Result<&str, CoreError> {
        self.get(event_key)
            .ok_or_else(|| CoreError::MissingTranslation {
                event_key: event_key.to_string(),
                layer,
            })
    }

    /// Returns a table holding this table's names, with `fallback`
    /// filling in any key this table lacks.
    #[must_use]
    pub fn with_fallback(&self, fallback: &Self) -> Self {
        let mut names: HashMap<String, String> = fallback.names.clone();
        names.extend(
            self.names
                .iter()
                .filter(|(_, name)| !name.trim().is_empty())
                .map(|(key, name)| (key.clone(), name.clone())),
        );
        Self { names }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(key, name)| (key.into(), name.into()))
                .collect(),
        }
    }
}
