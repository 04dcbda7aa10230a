// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Color, Colors, DomainError, Grade, Layer, Weekday};

#[test]
fn test_grades_are_ordered_by_precedence() {
    assert!(Grade::Weekday < Grade::Commemoration);
    assert!(Grade::Commemoration < Grade::OptionalMemorial);
    assert!(Grade::OptionalMemorial < Grade::Memorial);
    assert!(Grade::Memorial < Grade::Feast);
    assert!(Grade::Feast < Grade::FeastOfTheLord);
    assert!(Grade::FeastOfTheLord < Grade::Solemnity);
    assert!(Grade::Solemnity < Grade::HigherSolemnity);
}

#[test]
fn test_grade_numeric_values_round_trip() {
    for value in 0..=7_u8 {
        let grade: Grade = Grade::try_from(value).unwrap();
        assert_eq!(grade.value(), value);
    }
}

#[test]
fn test_grade_rejects_out_of_range_value() {
    let result: Result<Grade, DomainError> = Grade::try_from(8);
    assert_eq!(result, Err(DomainError::InvalidGrade(8)));
}

#[test]
fn test_grade_deserializes_from_number() {
    let grade: Grade = serde_json::from_str("6").unwrap();
    assert_eq!(grade, Grade::Solemnity);
    assert!(serde_json::from_str::<Grade>("12").is_err());
}

#[test]
fn test_grade_labels_and_abbreviations() {
    assert_eq!(Grade::Memorial.label(), "Memorial");
    assert_eq!(Grade::Memorial.abbreviation(), "M");
    assert_eq!(Grade::OptionalMemorial.abbreviation(), "m");
    assert_eq!(Grade::FeastOfTheLord.abbreviation(), "F✝");
}

#[test]
fn test_color_parsing_is_case_insensitive() {
    assert_eq!("White".parse::<Color>().unwrap(), Color::White);
    assert_eq!(" purple ".parse::<Color>().unwrap(), Color::Purple);
    assert_eq!("pink".parse::<Color>().unwrap(), Color::Rose);
    assert!(matches!(
        "blue".parse::<Color>(),
        Err(DomainError::InvalidColor(_))
    ));
}

#[test]
fn test_colors_require_at_least_one_value() {
    let result: Result<Colors, DomainError> = Colors::new(Vec::new());
    assert_eq!(result, Err(DomainError::EmptyColors));
}

#[test]
fn test_colors_drop_duplicates_and_keep_order() {
    let colors: Colors = Colors::new(vec![Color::Red, Color::White, Color::Red]).unwrap();
    assert_eq!(colors.as_slice(), &[Color::Red, Color::White]);
    assert_eq!(colors.primary(), Color::Red);
}

#[test]
fn test_colors_deserialize_from_list() {
    let colors: Colors = serde_json::from_str(r#"["white", "red"]"#).unwrap();
    assert_eq!(colors.as_slice(), &[Color::White, Color::Red]);
    assert!(serde_json::from_str::<Colors>("[]").is_err());
}

#[test]
fn test_layer_order_matches_application_order() {
    assert!(Layer::Sanctorale < Layer::Decree);
    assert!(Layer::Decree < Layer::WiderRegion);
    assert!(Layer::WiderRegion < Layer::National);
    assert!(Layer::National < Layer::Diocesan);
}

#[test]
fn test_only_decrees_skip_existing_creates() {
    assert!(Layer::Decree.skips_existing_on_create());
    assert!(!Layer::Sanctorale.skips_existing_on_create());
    assert!(!Layer::WiderRegion.skips_existing_on_create());
    assert!(!Layer::National.skips_existing_on_create());
    assert!(!Layer::Diocesan.skips_existing_on_create());
}

#[test]
fn test_layer_labels() {
    for layer in [
        Layer::Sanctorale,
        Layer::Decree,
        Layer::WiderRegion,
        Layer::National,
        Layer::Diocesan,
    ] {
        assert_eq!(layer.to_string(), layer.as_str());
    }
    assert_eq!(Layer::WiderRegion.as_str(), "wider_region");
}

#[test]
fn test_weekday_parsing() {
    assert_eq!("Sunday".parse::<Weekday>().unwrap(), Weekday::Sunday);
    assert!(matches!(
        "Sabbath".parse::<Weekday>(),
        Err(DomainError::InvalidWeekday(_))
    ));
}
