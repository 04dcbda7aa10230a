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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Layered override resolution for liturgical calendars.
//!
//! A calendar is assembled by applying independent layers, in the fixed
//! order of [`PIPELINE`], to one shared [`Registry`]. Layers speak only in
//! [`Action`]s; [`apply`] is the single place where an action changes the
//! registry, and [`Resolver`] enforces the layer order.

mod action;
mod apply;
mod error;
mod layers;
mod names;
mod pipeline;
mod registry;
mod resolver;
mod view;

#[cfg(test)]
mod tests;

pub use action::{Action, ActionKind};
pub use apply::apply;
pub use error::{CoreError, RegistryError};
pub use layers::{
    DecreeLayer, DecreeRecord, DiocesanLayer, LayerInputs, LayerItem, LayerRecord, Missal,
    NationalLayer, RecordKind, RecordMetadata, SanctoraleRecord, Validity, WiderRegionLayer,
};
pub use names::NameTable;
pub use pipeline::{PIPELINE, ResolutionPhase};
pub use registry::Registry;
pub use resolver::{Resolution, ResolveOptions, Resolver, Settings, resolve};
pub use view::{CalendarView, ObservanceView};
