// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RegistryError;
use litcal_domain::Observance;
use std::collections::HashMap;

/// The observances of one resolution run, keyed by event key.
///
/// Keys are unique. Iteration follows insertion order, which downstream
/// same-day grouping relies on, so entries are never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    /// Observances in insertion order.
    observances: Vec<Observance>,
    /// Position of each key in `observances`.
    index: HashMap<String, usize>,
}

impl Registry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new observance.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateKey` if the key is already present.
    pub fn insert(&mut self, observance: Observance) -> Result<(), RegistryError> {
        let event_key: &str = observance.event_key();
        if self.index.contains_key(event_key) {
            return Err(RegistryError::DuplicateKey(event_key.to_string()));
        }
        self.index
            .insert(event_key.to_string(), self.observances.len());
        self.observances.push(observance);
        Ok(())
    }

    /// Looks up an observance by key.
    #[must_use]
    pub fn get(&self, event_key: &str) -> Option<&Observance> {
        self.index
            .get(event_key)
            .and_then(|position| self.observances.get(*position))
    }

    /// Looks up an observance that must exist.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownKey` if the key is absent.
    pub fn must_get(&self, event_key: &str) -> Result<&Observance, RegistryError> {
        self.get(event_key)
            .ok_or_else(|| RegistryError::UnknownKey(event_key.to_string()))
    }

    /// Looks up an observance that must exist, for modification.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownKey` if the key is absent.
    pub fn must_get_mut(&mut self, event_key: &str) -> Result<&mut Observance, RegistryError> {
        match self.index.get(event_key) {
            Some(position) => self
                .observances
                .get_mut(*position)
                .ok_or_else(|| RegistryError::UnknownKey(event_key.to_string())),
            None => Err(RegistryError::UnknownKey(event_key.to_string())),
        }
    }

    /// Checks if a key is registered.
    #[must_use]
    pub fn contains(&self, event_key: &str) -> bool {
        self.index.contains_key(event_key)
    }

    /// Returns every observance in insertion order.
    #[must_use]
    pub fn values(&self) -> &[Observance] {
        &self.observances
    }

    /// Iterates over observances in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Observance> {
        self.observances.iter()
    }

    /// Returns every key in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.observances.iter().map(Observance::event_key)
    }

    /// Returns the number of registered observances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observances.len()
    }

    /// Returns whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observances.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Observance;
    type IntoIter = std::slice::Iter<'a, Observance>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
