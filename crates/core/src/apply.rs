// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::{Action, ActionKind};
use crate::error::{CoreError, RegistryError};
use crate::registry::Registry;
use litcal_audit::{ActionRecord, ObservanceSnapshot, Outcome, ResolutionEvent, Source};
use litcal_domain::{DomainError, Layer, Observance, Schedule};

/// Applies one action to the registry, producing its trail event.
///
/// This is the only place the registry is changed during resolution.
///
/// # Arguments
///
/// * `registry` - The registry being resolved
/// * `layer` - The layer issuing the action
/// * `source` - The record the action came from
/// * `action` - The action to apply
///
/// # Returns
///
/// * `Ok(ResolutionEvent)` describing what happened
/// * `Err(CoreError)` if the action cannot be applied
///
/// # Errors
///
/// Returns an error if:
/// - The layer may not issue this kind of action
/// - A create targets an existing key and the layer does not skip existing keys
/// - A mutation targets a key that does not exist
/// - The resulting observance violates domain rules
#[allow(clippy::too_many_lines)]
pub fn apply(
    registry: &mut Registry,
    layer: Layer,
    source: &Source,
    action: Action,
) -> Result<ResolutionEvent, CoreError> {
    let kind: ActionKind = action.kind();
    if !kind.permitted_in(layer) {
        return Err(CoreError::UnsupportedAction { action: kind, layer });
    }

    let record: ActionRecord = action.record();
    let event_key: String = action.event_key().to_string();

    match action {
        Action::CreateFixed { .. } | Action::CreateMobile { .. } => {
            if let Some(existing) = registry.get(&event_key) {
                if !layer.skips_existing_on_create() {
                    return Err(CoreError::DuplicateKey { event_key, layer });
                }
                let snapshot: ObservanceSnapshot = snapshot(existing);
                return Ok(ResolutionEvent::new(
                    layer,
                    source.clone(),
                    record,
                    event_key,
                    Outcome::Skipped,
                    Some(snapshot.clone()),
                    Some(snapshot),
                ));
            }

            let observance: Observance = build_observance(action, layer)?;
            let after: ObservanceSnapshot = snapshot(&observance);
            registry
                .insert(observance)
                .map_err(|err| registry_error(err, kind, layer))?;

            Ok(ResolutionEvent::new(
                layer,
                source.clone(),
                record,
                event_key,
                Outcome::Applied,
                None,
                Some(after),
            ))
        }
        Action::Rename { name, .. } => {
            let (before, after) = mutate(registry, &event_key, kind, layer, |observance| {
                observance.rename(&name)
            })?;
            Ok(ResolutionEvent::new(
                layer,
                source.clone(),
                record,
                event_key,
                Outcome::Applied,
                Some(before),
                Some(after),
            ))
        }
        Action::Regrade { grade, .. } => {
            let (before, after) = mutate(registry, &event_key, kind, layer, |observance| {
                observance.regrade(grade);
                Ok(())
            })?;
            Ok(ResolutionEvent::new(
                layer,
                source.clone(),
                record,
                event_key,
                Outcome::Applied,
                Some(before),
                Some(after),
            ))
        }
        Action::PromoteToDoctor { name, .. } => {
            let (before, after) = mutate(registry, &event_key, kind, layer, |observance| {
                observance.rename(&name)
            })?;
            Ok(ResolutionEvent::new(
                layer,
                source.clone(),
                record,
                event_key,
                Outcome::Applied,
                Some(before),
                Some(after),
            ))
        }
        Action::PromoteToPatron { name, grade, .. } => {
            let (before, after) = mutate(registry, &event_key, kind, layer, |observance| {
                observance.rename(&name)?;
                if let Some(grade) = grade {
                    observance.regrade(grade);
                }
                Ok(())
            })?;
            Ok(ResolutionEvent::new(
                layer,
                source.clone(),
                record,
                event_key,
                Outcome::Applied,
                Some(before),
                Some(after),
            ))
        }
        Action::Relocate { .. } => {
            // The date change is applied when dates are assigned.
            let current: ObservanceSnapshot = registry
                .must_get(&event_key)
                .map(snapshot)
                .map_err(|err| registry_error(err, kind, layer))?;
            Ok(ResolutionEvent::new(
                layer,
                source.clone(),
                record,
                event_key,
                Outcome::Deferred,
                Some(current.clone()),
                Some(current),
            ))
        }
    }
}

fn build_observance(action: Action, layer: Layer) -> Result<Observance, CoreError> {
    let (event_key, name, schedule, colors, grade, commons, grade_display) = match action {
        Action::CreateFixed {
            event_key,
            name,
            month,
            day,
            colors,
            grade,
            commons,
            grade_display,
        } => {
            let schedule: Schedule =
                Schedule::fixed(month, day).map_err(|err| CoreError::from_domain(&event_key, err))?;
            (event_key, name, schedule, colors, grade, commons, grade_display)
        }
        Action::CreateMobile {
            event_key,
            name,
            strtotime,
            colors,
            grade,
            commons,
            grade_display,
        } => (
            event_key,
            name,
            Schedule::Mobile { strtotime },
            colors,
            grade,
            commons,
            grade_display,
        ),
        other => {
            return Err(CoreError::UnsupportedAction {
                action: other.kind(),
                layer,
            });
        }
    };

    Observance::new(&event_key, &name, schedule, colors, grade, commons)
        .map(|observance| observance.with_grade_display(grade_display))
        .map_err(|err| CoreError::from_domain(&event_key, err))
}

/// Changes an existing observance in place, returning its snapshots from
/// before and after the change.
fn mutate<F>(
    registry: &mut Registry,
    event_key: &str,
    kind: ActionKind,
    layer: Layer,
    change: F,
) -> Result<(ObservanceSnapshot, ObservanceSnapshot), CoreError>
where
    F: FnOnce(&mut Observance) -> Result<(), DomainError>,
{
    let observance: &mut Observance = registry
        .must_get_mut(event_key)
        .map_err(|err| registry_error(err, kind, layer))?;
    let before: ObservanceSnapshot = snapshot(observance);
    change(observance).map_err(|err| CoreError::from_domain(event_key, err))?;
    Ok((before, snapshot(observance)))
}

fn snapshot(observance: &Observance) -> ObservanceSnapshot {
    ObservanceSnapshot::new(observance.summary())
}

fn registry_error(err: RegistryError, action: ActionKind, layer: Layer) -> CoreError {
    match err {
        RegistryError::DuplicateKey(event_key) => CoreError::DuplicateKey { event_key, layer },
        RegistryError::UnknownKey(event_key) => CoreError::UnknownKey {
            event_key,
            action,
            layer,
        },
    }
}
