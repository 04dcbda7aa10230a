// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::{Action, ActionKind};
use crate::apply::apply;
use crate::error::CoreError;
use crate::layers::{
    DecreeLayer, DiocesanLayer, LayerInputs, LayerItem, Missal, NationalLayer, Validity,
    WiderRegionLayer,
};
use crate::names::NameTable;
use crate::pipeline::{PIPELINE, ResolutionPhase};
use crate::registry::Registry;
use litcal_audit::{ActionRecord, Outcome, ResolutionEvent, ResolutionTrail, Source};
use litcal_domain::Layer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Per-run resolution settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// The calendar year being resolved. Records whose validity window
    /// excludes it are not applied. Without a year every record applies.
    #[serde(default)]
    pub year: Option<i32>,
}

/// What a finished run was resolved for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// The requested year, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// The national calendar that was applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nation: Option<String>,
    /// The diocesan calendar that was applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diocese: Option<String>,
}

/// The result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved observances, in insertion order.
    pub registry: Registry,
    /// One event per processed action, in processing order.
    pub trail: ResolutionTrail,
    /// What the run was resolved for.
    pub settings: Settings,
}

/// Applies layers to a registry in pipeline order.
///
/// Each stage must be applied exactly once, in the order of [`PIPELINE`].
/// An absent or empty layer still advances the phase. The first error moves
/// the resolver to [`ResolutionPhase::Failed`]; the registry is left as it
/// was at the point of failure and every later call is rejected.
#[derive(Debug)]
pub struct Resolver {
    options: ResolveOptions,
    phase: ResolutionPhase,
    registry: Registry,
    trail: ResolutionTrail,
    settings: Settings,
    wider_region: Option<String>,
}

impl Resolver {
    /// Creates a resolver with an empty registry.
    #[must_use]
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            options,
            phase: ResolutionPhase::Empty,
            registry: Registry::new(),
            trail: ResolutionTrail::new(),
            settings: Settings {
                year: options.year,
                nation: None,
                diocese: None,
            },
            wider_region: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> ResolutionPhase {
        self.phase
    }

    /// Returns the registry as resolved so far.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the trail recorded so far.
    #[must_use]
    pub const fn trail(&self) -> &ResolutionTrail {
        &self.trail
    }

    /// Applies the stage for `layer`, drawing its data from `inputs`.
    ///
    /// The wider-region stage applies the region the national layer
    /// depends on.
    ///
    /// # Errors
    ///
    /// Returns an error if the stage is out of order, the run has already
    /// failed, or the layer's data violates any resolution rule.
    pub fn apply_stage(&mut self, layer: Layer, inputs: &LayerInputs) -> Result<(), CoreError> {
        match layer {
            Layer::Sanctorale => self.apply_sanctorale(&inputs.sanctorale),
            Layer::Decree => self.apply_decrees(&inputs.decrees),
            Layer::WiderRegion => self.apply_wider_region(inputs.wider_region()),
            Layer::National => self.apply_national(inputs.national.as_ref()),
            Layer::Diocesan => self.apply_diocesan(inputs.diocesan.as_ref()),
        }
    }

    /// Creates every record of every missal, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The stage is out of order or the run has failed
    /// - A record has no name in its missal's table
    /// - A record is not fixed, or a key is created twice
    pub fn apply_sanctorale(&mut self, missals: &[Missal]) -> Result<(), CoreError> {
        self.run_stage(Layer::Sanctorale, |resolver| {
            for missal in missals {
                resolver.apply_missal(Layer::Sanctorale, missal, &missal.names)?;
            }
            Ok(())
        })
    }

    /// Applies every decree in effect, in order.
    ///
    /// Creates of keys that already exist are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The stage is out of order or the run has failed
    /// - A decree issues `PromoteToPatron` or `Relocate`
    /// - A decree mutates an unknown key
    /// - A required name is missing
    pub fn apply_decrees(&mut self, decrees: &DecreeLayer) -> Result<(), CoreError> {
        self.run_stage(Layer::Decree, |resolver| {
            for decree in &decrees.decrees {
                resolver.apply_item(
                    Layer::Decree,
                    &decree.source(),
                    &decrees.names,
                    &decree.liturgical_event,
                    decree.validity(),
                    None,
                )?;
            }
            Ok(())
        })
    }

    /// Applies the wider region's records, if a region is given.
    ///
    /// The region must be the one the national layer declares; the national
    /// stage checks this.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The stage is out of order or the run has failed
    /// - A record issues `PromoteToDoctor` or `Relocate`
    /// - A record creates an existing key or mutates an unknown one
    /// - A required name is missing
    pub fn apply_wider_region(
        &mut self,
        region: Option<&WiderRegionLayer>,
    ) -> Result<(), CoreError> {
        self.run_stage(Layer::WiderRegion, |resolver| {
            let Some(region) = region else {
                return Ok(());
            };
            resolver.wider_region = Some(region.region.clone());
            let source: Source = region.source();
            for record in &region.items {
                resolver.apply_item(
                    Layer::WiderRegion,
                    &source,
                    &region.names,
                    &record.liturgical_event,
                    record.validity(),
                    None,
                )?;
            }
            Ok(())
        })
    }

    /// Applies the national calendar, if one is given: first the records of
    /// its localized missals, then its own records.
    ///
    /// The wider-region stage must have applied exactly the region the
    /// nation declares, or none if it declares none.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The stage is out of order or the run has failed
    /// - The applied wider region is not the one the nation declares
    /// - A record issues `PromoteToDoctor`
    /// - A record creates an existing key or mutates an unknown one
    /// - A required name is missing
    pub fn apply_national(&mut self, national: Option<&NationalLayer>) -> Result<(), CoreError> {
        self.run_stage(Layer::National, |resolver| {
            let Some(national) = national else {
                return Ok(());
            };
            let expected: Option<&str> = national
                .wider_region
                .as_ref()
                .map(|region| region.region.as_str());
            if expected != resolver.wider_region.as_deref() {
                return Err(CoreError::WiderRegionMismatch {
                    nation: national.nation.clone(),
                    expected: expected.map(str::to_string),
                    found: resolver.wider_region.clone(),
                });
            }
            resolver.settings.nation = Some(national.nation.clone());

            for missal in &national.missals {
                let names: NameTable = missal.names.with_fallback(&national.names);
                resolver.apply_missal(Layer::National, missal, &names)?;
            }

            let source: Source = national.source();
            for record in &national.items {
                resolver.apply_item(
                    Layer::National,
                    &source,
                    &national.names,
                    &record.liturgical_event,
                    record.validity(),
                    None,
                )?;
            }
            Ok(())
        })
    }

    /// Applies the diocesan calendar, if one is given, namespacing every
    /// key and name by the diocese.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The stage is out of order or the run has failed
    /// - No national calendar, or another nation's, was applied
    /// - A record issues anything but a create
    /// - A namespaced key already exists
    /// - A required name is missing
    pub fn apply_diocesan(&mut self, diocesan: Option<&DiocesanLayer>) -> Result<(), CoreError> {
        self.run_stage(Layer::Diocesan, |resolver| {
            let Some(diocesan) = diocesan else {
                return Ok(());
            };
            diocesan.validate_nation(resolver.settings.nation.as_deref())?;
            resolver.settings.diocese = Some(diocesan.diocese_id.clone());

            let source: Source = diocesan.source();
            for record in &diocesan.items {
                resolver.apply_item(
                    Layer::Diocesan,
                    &source,
                    &diocesan.names,
                    &record.liturgical_event,
                    record.validity(),
                    Some((diocesan.diocese_id.as_str(), diocesan.diocese_name.as_str())),
                )?;
            }
            Ok(())
        })
    }

    /// Hands out the resolved registry and its trail.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The run has failed
    /// - Not every stage has been applied, or the run was already finished
    pub fn finish(&mut self) -> Result<Resolution, CoreError> {
        match self.phase {
            ResolutionPhase::Failed => Err(CoreError::ResolutionAborted),
            ResolutionPhase::DiocesanApplied => {
                self.phase = ResolutionPhase::Resolved;
                info!(
                    observances = self.registry.len(),
                    events = self.trail.len(),
                    "Resolution finished"
                );
                Ok(Resolution {
                    registry: std::mem::take(&mut self.registry),
                    trail: std::mem::take(&mut self.trail),
                    settings: self.settings.clone(),
                })
            }
            phase => Err(CoreError::StageOutOfOrder {
                stage: Layer::Diocesan,
                phase,
            }),
        }
    }

    fn run_stage<F>(&mut self, layer: Layer, stage: F) -> Result<(), CoreError>
    where
        F: FnOnce(&mut Self) -> Result<(), CoreError>,
    {
        if self.phase == ResolutionPhase::Failed {
            return Err(CoreError::ResolutionAborted);
        }
        if !self.phase.accepts(layer) {
            let err: CoreError = CoreError::StageOutOfOrder {
                stage: layer,
                phase: self.phase,
            };
            if !self.phase.is_terminal() {
                self.phase = ResolutionPhase::Failed;
            }
            return Err(err);
        }

        let observances_before: usize = self.registry.len();
        let events_before: usize = self.trail.len();

        match stage(self) {
            Ok(()) => {
                self.phase = ResolutionPhase::after(layer);
                let changed: usize = self
                    .trail
                    .events()
                    .iter()
                    .skip(events_before)
                    .filter(|event| event.outcome.changed_registry())
                    .count();
                info!(
                    layer = %layer,
                    events = self.trail.len() - events_before,
                    changed,
                    created = self.registry.len() - observances_before,
                    total = self.registry.len(),
                    "Applied layer"
                );
                Ok(())
            }
            Err(err) => {
                self.phase = ResolutionPhase::Failed;
                warn!(layer = %layer, error = %err, "Resolution failed");
                Err(err)
            }
        }
    }

    fn apply_missal(
        &mut self,
        layer: Layer,
        missal: &Missal,
        names: &NameTable,
    ) -> Result<(), CoreError> {
        let source: Source = missal.source();
        debug!(
            layer = %layer,
            missal = %missal.missal_id,
            records = missal.records.len(),
            "Applying missal"
        );
        for record in &missal.records {
            let action: Action = record.to_action(layer, names)?;
            self.apply_action(layer, &source, action)?;
        }
        Ok(())
    }

    /// Applies one layer item, after checking that the layer may issue it
    /// and that it is in effect for the requested year.
    fn apply_item(
        &mut self,
        layer: Layer,
        source: &Source,
        names: &NameTable,
        item: &LayerItem,
        validity: Validity,
        diocese: Option<(&str, &str)>,
    ) -> Result<(), CoreError> {
        let kind: ActionKind = item.kind();
        if !kind.permitted_in(layer) {
            return Err(CoreError::UnsupportedAction { action: kind, layer });
        }

        if !validity.in_effect(self.options.year) {
            let event_key: String = diocese.map_or_else(
                || item.event_key().to_string(),
                |(diocese_id, _)| format!("{diocese_id}_{}", item.event_key()),
            );
            debug!(
                layer = %layer,
                event_key = %event_key,
                window = %validity.describe(),
                "Record not in effect"
            );
            self.trail.record(ResolutionEvent::new(
                layer,
                source.clone(),
                ActionRecord::new(kind.as_str().to_string(), Some(validity.describe())),
                event_key,
                Outcome::NotInEffect,
                None,
                None,
            ));
            return Ok(());
        }

        let mut action: Action = item.to_action(layer, names)?;
        if let Some((diocese_id, diocese_name)) = diocese {
            action = action.namespaced(diocese_id, diocese_name);
        }
        self.apply_action(layer, source, action)
    }

    fn apply_action(
        &mut self,
        layer: Layer,
        source: &Source,
        action: Action,
    ) -> Result<(), CoreError> {
        let event: ResolutionEvent = apply(&mut self.registry, layer, source, action)?;
        match event.outcome {
            Outcome::Skipped => debug!(
                layer = %layer,
                event_key = %event.event_key,
                source = %event.source.id,
                "Event already exists, create skipped"
            ),
            Outcome::Deferred => debug!(
                layer = %layer,
                event_key = %event.event_key,
                source = %event.source.id,
                "Relocation deferred to date assignment"
            ),
            Outcome::Applied | Outcome::NotInEffect => debug!(
                layer = %layer,
                event_key = %event.event_key,
                action = %event.action.name,
                "Applied action"
            ),
        }
        self.trail.record(event);
        Ok(())
    }
}

/// Runs every stage of [`PIPELINE`] over `inputs`.
///
/// # Arguments
///
/// * `inputs` - The decoded layers
/// * `options` - Per-run settings
///
/// # Errors
///
/// Returns the first error raised by any stage.
pub fn resolve(inputs: &LayerInputs, options: ResolveOptions) -> Result<Resolution, CoreError> {
    let mut resolver: Resolver = Resolver::new(options);
    for layer in PIPELINE {
        resolver.apply_stage(layer, inputs)?;
    }
    resolver.finish()
}
