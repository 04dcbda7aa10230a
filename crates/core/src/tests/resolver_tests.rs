// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for stage ordering and failure handling in the resolver.

use crate::{
    CoreError, DecreeLayer, LayerInputs, PIPELINE, Resolution, ResolutionPhase, ResolveOptions,
    Resolver, resolve,
};
use litcal_domain::{Grade, Layer};

use super::helpers::{
    create_decree, create_decree_layer, create_regrade_item, create_sanctorale_record,
    create_test_missal,
};

fn create_base_inputs() -> LayerInputs {
    LayerInputs {
        sanctorale: vec![create_test_missal(
            "EDITIO_TYPICA_1970",
            vec![create_sanctorale_record("StX", 10, 4, Grade::Memorial)],
            &[("StX", "Saint X")],
        )],
        ..LayerInputs::default()
    }
}

#[test]
fn test_new_resolver_is_empty() {
    let resolver: Resolver = Resolver::new(ResolveOptions::default());

    assert_eq!(resolver.phase(), ResolutionPhase::Empty);
    assert!(resolver.registry().is_empty());
    assert!(resolver.trail().is_empty());
}

#[test]
fn test_phases_advance_in_pipeline_order() {
    let inputs: LayerInputs = create_base_inputs();
    let mut resolver: Resolver = Resolver::new(ResolveOptions::default());

    for layer in PIPELINE {
        resolver.apply_stage(layer, &inputs).unwrap();
        assert_eq!(resolver.phase(), ResolutionPhase::after(layer));
    }

    let resolution: Resolution = resolver.finish().unwrap();
    assert_eq!(resolver.phase(), ResolutionPhase::Resolved);
    assert_eq!(resolution.registry.len(), 1);
}

#[test]
fn test_stage_out_of_order_is_rejected() {
    let mut resolver: Resolver = Resolver::new(ResolveOptions::default());

    let result = resolver.apply_decrees(&DecreeLayer::default());

    assert_eq!(
        result.unwrap_err(),
        CoreError::StageOutOfOrder {
            stage: Layer::Decree,
            phase: ResolutionPhase::Empty,
        }
    );
    assert_eq!(resolver.phase(), ResolutionPhase::Failed);
}

#[test]
fn test_stage_cannot_be_applied_twice() {
    let mut resolver: Resolver = Resolver::new(ResolveOptions::default());
    resolver.apply_sanctorale(&[]).unwrap();

    let result = resolver.apply_sanctorale(&[]);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::StageOutOfOrder {
            stage: Layer::Sanctorale,
            phase: ResolutionPhase::SanctoraleApplied,
        }
    ));
}

#[test]
fn test_failed_resolver_rejects_further_calls() {
    let mut inputs: LayerInputs = create_base_inputs();
    inputs.decrees = create_decree_layer(
        vec![create_decree(
            "decree-1",
            1990,
            create_regrade_item("Nonexistent", Grade::Feast),
        )],
        &[],
    );
    let mut resolver: Resolver = Resolver::new(ResolveOptions::default());
    resolver.apply_stage(Layer::Sanctorale, &inputs).unwrap();

    assert!(resolver.apply_stage(Layer::Decree, &inputs).is_err());
    assert_eq!(resolver.phase(), ResolutionPhase::Failed);
    assert_eq!(
        resolver.apply_stage(Layer::WiderRegion, &inputs).unwrap_err(),
        CoreError::ResolutionAborted
    );
    assert_eq!(resolver.finish().unwrap_err(), CoreError::ResolutionAborted);
}

#[test]
fn test_finish_requires_every_stage() {
    let mut resolver: Resolver = Resolver::new(ResolveOptions::default());
    resolver.apply_sanctorale(&[]).unwrap();

    assert!(matches!(
        resolver.finish().unwrap_err(),
        CoreError::StageOutOfOrder {
            phase: ResolutionPhase::SanctoraleApplied,
            ..
        }
    ));
}

#[test]
fn test_finish_twice_is_rejected() {
    let mut resolver: Resolver = Resolver::new(ResolveOptions::default());
    for layer in PIPELINE {
        resolver.apply_stage(layer, &LayerInputs::default()).unwrap();
    }
    resolver.finish().unwrap();

    assert!(matches!(
        resolver.finish().unwrap_err(),
        CoreError::StageOutOfOrder {
            phase: ResolutionPhase::Resolved,
            ..
        }
    ));
}

#[test]
fn test_empty_inputs_resolve_to_empty_registry() {
    let resolution: Resolution =
        resolve(&LayerInputs::default(), ResolveOptions::default()).unwrap();

    assert!(resolution.registry.is_empty());
    assert!(resolution.trail.is_empty());
    assert_eq!(resolution.settings.nation, None);
}

#[test]
fn test_phase_expectations() {
    assert_eq!(ResolutionPhase::Empty.expected_stage(), Some(Layer::Sanctorale));
    assert_eq!(ResolutionPhase::NationalApplied.expected_stage(), Some(Layer::Diocesan));
    assert_eq!(ResolutionPhase::DiocesanApplied.expected_stage(), None);
    assert!(ResolutionPhase::Failed.is_terminal());
    assert!(!ResolutionPhase::DecreesApplied.is_terminal());
    assert_eq!(ResolutionPhase::WiderRegionApplied.to_string(), "wider_region_applied");
}

#[test]
fn test_configuration_errors_are_classified() {
    assert!(
        CoreError::MissingTranslation {
            event_key: String::from("StX"),
            layer: Layer::Decree,
        }
        .is_configuration_error()
    );
    assert!(!CoreError::ResolutionAborted.is_configuration_error());
    assert!(
        !CoreError::StageOutOfOrder {
            stage: Layer::Decree,
            phase: ResolutionPhase::Empty,
        }
        .is_configuration_error()
    );
}
