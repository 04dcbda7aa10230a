// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for decoding layer records and turning them into actions.

use crate::{
    Action, CoreError, DiocesanLayer, LayerInputs, LayerItem, LayerRecord, Missal, NameTable,
    RecordKind, Validity,
};
use litcal_domain::{
    Color, Commons, Grade, Layer, MobileSchedule, Relation, RelativeDate, Schedule, Weekday,
};

use super::helpers::{create_sanctorale_record, create_test_names};

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_decode_create_fixed_item() {
    let item: LayerItem = serde_json::from_str(
        r#"{
            "action": "create_fixed",
            "event_key": "StX",
            "month": 10,
            "day": 4,
            "color": ["white", "red"],
            "grade": 3,
            "common": ["Martyrs:For One Martyr"]
        }"#,
    )
    .unwrap();

    let LayerItem::CreateFixed {
        event_key,
        month,
        day,
        colors,
        grade,
        commons,
        grade_display,
    } = item
    else {
        panic!("expected create_fixed");
    };
    assert_eq!(event_key, "StX");
    assert_eq!((month, day), (10, 4));
    assert_eq!(colors.as_slice(), &[Color::White, Color::Red]);
    assert_eq!(grade, Grade::Memorial);
    assert_eq!(commons.to_strings(), vec!["Martyrs:For One Martyr"]);
    assert_eq!(grade_display, None);
}

#[test]
fn test_decode_create_mobile_item_with_descriptor() {
    let item: LayerItem = serde_json::from_str(
        r#"{
            "action": "create_mobile",
            "event_key": "SacredHeart",
            "strtotime": {
                "ordinal": 3,
                "weekday": "friday",
                "relation": "after",
                "event_key": "Pentecost"
            },
            "color": ["red"],
            "grade": 6
        }"#,
    )
    .unwrap();

    let action: Action = item
        .to_action(
            Layer::Decree,
            &create_test_names(&[("SacredHeart", "Most Sacred Heart of Jesus")]),
        )
        .unwrap();

    let Action::CreateMobile {
        name,
        strtotime,
        commons,
        ..
    } = action
    else {
        panic!("expected create_mobile");
    };
    assert_eq!(name, "Most Sacred Heart of Jesus");
    assert_eq!(
        strtotime,
        MobileSchedule::Relative(RelativeDate {
            ordinal: 3,
            weekday: Weekday::Friday,
            relation: Relation::After,
            event_key: String::from("Pentecost"),
        })
    );
    assert_eq!(commons, Commons::none());
}

#[test]
fn test_decode_relocate_and_mutation_items() {
    let records: Vec<LayerRecord> = serde_json::from_str(
        r#"[
            {"liturgical_event": {"action": "rename", "event_key": "StX"}},
            {"liturgical_event": {"action": "regrade", "event_key": "StX", "grade": 4},
             "metadata": {"since_year": 2000, "until_year": 2010}},
            {"liturgical_event": {"action": "promote_to_patron", "event_key": "StX"}},
            {"liturgical_event": {"action": "relocate", "event_key": "StX", "month": 11, "day": 9}}
        ]"#,
    )
    .unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(
        records[1].validity(),
        Validity {
            since_year: Some(2000),
            until_year: Some(2010),
        }
    );
    assert_eq!(
        records[2].liturgical_event,
        LayerItem::PromoteToPatron {
            event_key: String::from("StX"),
            grade: None,
        }
    );

    let action: Action = records[3]
        .liturgical_event
        .to_action(Layer::National, &NameTable::new())
        .unwrap();
    assert_eq!(
        action,
        Action::Relocate {
            event_key: String::from("StX"),
            schedule: Schedule::Fixed { month: 11, day: 9 },
        }
    );
}

#[test]
fn test_decode_rejects_invalid_grade_and_color() {
    let bad_grade = serde_json::from_str::<LayerItem>(
        r#"{"action": "regrade", "event_key": "StX", "grade": 9}"#,
    );
    assert!(bad_grade.is_err());

    let bad_color = serde_json::from_str::<LayerItem>(
        r#"{"action": "create_fixed", "event_key": "StX", "month": 1, "day": 1,
            "color": ["orange"], "grade": 3}"#,
    );
    assert!(bad_color.is_err());
}

#[test]
fn test_decode_missal_defaults_to_fixed_records() {
    let missal: Missal = serde_json::from_str(
        r#"{
            "missal_id": "EDITIO_TYPICA_1970",
            "names": {"StX": "Saint X"},
            "records": [
                {"event_key": "StX", "month": 10, "day": 4, "grade": 3, "color": ["white"]}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(missal.records.len(), 1);
    assert_eq!(missal.records[0].kind, RecordKind::Fixed);
    assert_eq!(missal.names.get("StX"), Some("Saint X"));
    assert_eq!(missal.source().id, "EDITIO_TYPICA_1970");
}

#[test]
fn test_decode_empty_bundle() {
    let inputs: LayerInputs = serde_json::from_str("{}").unwrap();

    assert!(inputs.sanctorale.is_empty());
    assert!(inputs.decrees.decrees.is_empty());
    assert!(inputs.national.is_none());
    assert!(inputs.diocesan.is_none());
    assert!(inputs.wider_region().is_none());
}

// ============================================================================
// Conversion to actions
// ============================================================================

#[test]
fn test_sanctorale_record_requires_translation() {
    let record = create_sanctorale_record("StX", 10, 4, Grade::Memorial);

    let result = record.to_action(Layer::Sanctorale, &NameTable::new());

    assert_eq!(
        result.unwrap_err(),
        CoreError::MissingTranslation {
            event_key: String::from("StX"),
            layer: Layer::Sanctorale,
        }
    );
}

#[test]
fn test_sanctorale_record_rejects_mobile_type() {
    let mut record = create_sanctorale_record("StX", 10, 4, Grade::Memorial);
    record.kind = RecordKind::Mobile;

    let result = record.to_action(Layer::Sanctorale, &create_test_names(&[("StX", "Saint X")]));

    assert!(matches!(
        result.unwrap_err(),
        CoreError::MalformedSchedule { event_key, .. } if event_key == "StX"
    ));
}

#[test]
fn test_blank_translation_counts_as_missing() {
    let item: LayerItem = LayerItem::Rename {
        event_key: String::from("StX"),
    };

    let result = item.to_action(Layer::Decree, &create_test_names(&[("StX", "   ")]));

    assert!(matches!(
        result.unwrap_err(),
        CoreError::MissingTranslation { .. }
    ));
}

#[test]
fn test_regrade_needs_no_translation() {
    let item: LayerItem = LayerItem::Regrade {
        event_key: String::from("StX"),
        grade: Grade::Feast,
    };

    assert!(item.to_action(Layer::Decree, &NameTable::new()).is_ok());
}

#[test]
fn test_mobile_descriptor_with_bad_ordinal_is_malformed() {
    let item: LayerItem = serde_json::from_str(
        r#"{"action": "create_mobile", "event_key": "StX",
            "strtotime": {"ordinal": 6, "weekday": "sunday", "relation": "before",
                          "event_key": "Advent1"},
            "color": ["purple"], "grade": 2}"#,
    )
    .unwrap();

    let result = item.to_action(Layer::National, &create_test_names(&[("StX", "Saint X")]));

    assert!(matches!(
        result.unwrap_err(),
        CoreError::MalformedSchedule { .. }
    ));
}

#[test]
fn test_relocate_needs_complete_schedule() {
    let item: LayerItem = LayerItem::Relocate {
        event_key: String::from("StX"),
        month: Some(11),
        day: None,
        strtotime: None,
    };

    let result = item.to_action(Layer::National, &NameTable::new());

    assert!(matches!(
        result.unwrap_err(),
        CoreError::MalformedSchedule { event_key, .. } if event_key == "StX"
    ));
}

// ============================================================================
// Names and validity
// ============================================================================

#[test]
fn test_name_table_fallback_prefers_own_names() {
    let national: NameTable = create_test_names(&[("StX", "San X"), ("StY", "San Y")]);
    let missal: NameTable = create_test_names(&[("StX", "Santo X"), ("StZ", "   ")]);

    let merged: NameTable = missal.with_fallback(&national);

    assert_eq!(merged.get("StX"), Some("Santo X"));
    assert_eq!(merged.get("StY"), Some("San Y"));
    assert_eq!(merged.get("StZ"), None);
}

#[test]
fn test_validity_window_bounds() {
    let validity: Validity = Validity {
        since_year: Some(2000),
        until_year: Some(2010),
    };

    assert!(validity.in_effect(None));
    assert!(!validity.in_effect(Some(1999)));
    assert!(validity.in_effect(Some(2000)));
    assert!(validity.in_effect(Some(2009)));
    assert!(!validity.in_effect(Some(2010)));
    assert!(Validity::default().in_effect(Some(1570)));
    assert_eq!(validity.describe(), "since=2000,until=2010");
}

#[test]
fn test_diocese_must_match_applied_nation() {
    let diocesan: DiocesanLayer = DiocesanLayer {
        diocese_id: String::from("romanus"),
        diocese_name: String::from("Roma"),
        nation: String::from("IT"),
        locale: None,
        names: NameTable::new(),
        items: Vec::new(),
    };

    assert!(diocesan.validate_nation(Some("IT")).is_ok());
    assert_eq!(
        diocesan.validate_nation(None).unwrap_err(),
        CoreError::DioceseWithoutNation {
            diocese: String::from("romanus"),
        }
    );
    assert_eq!(
        diocesan.validate_nation(Some("FR")).unwrap_err(),
        CoreError::DioceseNationMismatch {
            diocese: String::from("romanus"),
            expected: String::from("FR"),
            found: String::from("IT"),
        }
    );
}
