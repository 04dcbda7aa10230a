// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Provenance records for calendar resolution.
//!
//! Every action processed during a resolution run produces exactly one
//! [`ResolutionEvent`], whether it changed the registry or not. The ordered
//! [`ResolutionTrail`] answers which layer created an observance and which
//! later layers touched it.

use litcal_domain::Layer;
use serde::Serialize;

/// Identifies the record an action came from.
///
/// For a missal this is the missal identifier, for a decree the decree
/// identifier, for regional layers the region, nation, or diocese.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    /// The unique identifier for this source.
    pub id: String,
    /// A description of the source (e.g. a decree URL or a locale).
    pub description: String,
}

impl Source {
    /// Creates a new Source.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier of the source record
    /// * `description` - A description of the source
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Describes the action that was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRecord {
    /// The name of the action (e.g., "`CreateFixed`", "`Regrade`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl ActionRecord {
    /// Creates a new `ActionRecord`.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact textual capture of one observance at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ObservanceSnapshot {
    /// A string representation of the observance.
    pub data: String,
}

impl ObservanceSnapshot {
    /// Creates a new `ObservanceSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// What processing an action did to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The registry was changed.
    Applied,
    /// A create was skipped because the key already existed.
    Skipped,
    /// The action was accepted but its effect happens after resolution.
    Deferred,
    /// The record's validity window excludes the requested year.
    NotInEffect,
}

impl Outcome {
    /// Returns whether the registry was changed.
    #[must_use]
    pub const fn changed_registry(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// An immutable record of one processed action.
///
/// Captures:
/// - Which layer issued the action (layer)
/// - Which source record it came from (source)
/// - What was requested (action)
/// - Which observance it targeted (`event_key`)
/// - What happened (outcome)
/// - The observance before and after, when it existed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionEvent {
    /// The layer that issued the action.
    pub layer: Layer,
    /// The source record.
    pub source: Source,
    /// The action that was processed.
    pub action: ActionRecord,
    /// The registry key the action targeted.
    pub event_key: String,
    /// What processing the action did.
    pub outcome: Outcome,
    /// The observance before the action, if it existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<ObservanceSnapshot>,
    /// The observance after the action, if it exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<ObservanceSnapshot>,
}

impl ResolutionEvent {
    /// Creates a new `ResolutionEvent`.
    ///
    /// # Arguments
    ///
    /// * `layer` - The layer that issued the action
    /// * `source` - The source record
    /// * `action` - The action that was processed
    /// * `event_key` - The targeted registry key
    /// * `outcome` - What processing did
    /// * `before` - The observance before the action
    /// * `after` - The observance after the action
    #[must_use]
    pub const fn new(
        layer: Layer,
        source: Source,
        action: ActionRecord,
        event_key: String,
        outcome: Outcome,
        before: Option<ObservanceSnapshot>,
        after: Option<ObservanceSnapshot>,
    ) -> Self {
        Self {
            layer,
            source,
            action,
            event_key,
            outcome,
            before,
            after,
        }
    }
}

/// The ordered list of events produced by one resolution run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolutionTrail {
    events: Vec<ResolutionEvent>,
}

impl ResolutionTrail {
    /// Creates an empty trail.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event.
    pub fn record(&mut self, event: ResolutionEvent) {
        self.events.push(event);
    }

    /// Returns every event in processing order.
    #[must_use]
    pub fn events(&self) -> &[ResolutionEvent] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns every event that targeted `event_key`, in order.
    pub fn history<'a>(&'a self, event_key: &'a str) -> impl Iterator<Item = &'a ResolutionEvent> {
        self.events
            .iter()
            .filter(move |event| event.event_key == event_key)
    }

    /// Returns the layer whose create action produced `event_key`.
    #[must_use]
    pub fn origin(&self, event_key: &str) -> Option<Layer> {
        self.history(event_key)
            .find(|event| {
                event.outcome == Outcome::Applied && event.action.name.starts_with("Create")
            })
            .map(|event| event.layer)
    }
}
