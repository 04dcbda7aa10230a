// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Action, DecreeLayer, DecreeRecord, LayerItem, LayerRecord, Missal, NameTable, RecordKind,
    SanctoraleRecord,
};
use litcal_audit::Source;
use litcal_domain::{Color, Colors, Commons, Grade, Observance, Schedule};

pub fn create_test_source() -> Source {
    Source::new(String::from("test-source"), String::from("Test source"))
}

pub fn create_test_names(entries: &[(&str, &str)]) -> NameTable {
    entries.iter().copied().collect()
}

pub fn create_test_observance(event_key: &str, name: &str, grade: Grade) -> Observance {
    Observance::new(
        event_key,
        name,
        Schedule::fixed(10, 4).unwrap(),
        Colors::single(Color::White),
        grade,
        Commons::none(),
    )
    .unwrap()
}

pub fn create_fixed_action(
    event_key: &str,
    name: &str,
    month: u8,
    day: u8,
    grade: Grade,
) -> Action {
    Action::CreateFixed {
        event_key: event_key.to_string(),
        name: name.to_string(),
        month,
        day,
        colors: Colors::single(Color::White),
        grade,
        commons: Commons::none(),
        grade_display: None,
    }
}

pub fn create_sanctorale_record(
    event_key: &str,
    month: u8,
    day: u8,
    grade: Grade,
) -> SanctoraleRecord {
    SanctoraleRecord {
        event_key: event_key.to_string(),
        month,
        day,
        grade,
        colors: Colors::single(Color::White),
        kind: RecordKind::Fixed,
        commons: Commons::none(),
        grade_display: None,
    }
}

pub fn create_test_missal(
    missal_id: &str,
    records: Vec<SanctoraleRecord>,
    names: &[(&str, &str)],
) -> Missal {
    Missal {
        missal_id: missal_id.to_string(),
        locale: Some(String::from("en")),
        names: create_test_names(names),
        records,
    }
}

pub fn create_fixed_item(event_key: &str, month: u8, day: u8, grade: Grade) -> LayerItem {
    LayerItem::CreateFixed {
        event_key: event_key.to_string(),
        month,
        day,
        colors: Colors::single(Color::White),
        grade,
        commons: Commons::none(),
        grade_display: None,
    }
}

pub fn create_rename_item(event_key: &str) -> LayerItem {
    LayerItem::Rename {
        event_key: event_key.to_string(),
    }
}

pub fn create_regrade_item(event_key: &str, grade: Grade) -> LayerItem {
    LayerItem::Regrade {
        event_key: event_key.to_string(),
        grade,
    }
}

pub fn create_decree(decree_id: &str, since_year: i32, item: LayerItem) -> DecreeRecord {
    DecreeRecord {
        decree_id: decree_id.to_string(),
        since_year,
        until_year: None,
        url: None,
        liturgical_event: item,
    }
}

pub fn create_decree_layer(decrees: Vec<DecreeRecord>, names: &[(&str, &str)]) -> DecreeLayer {
    DecreeLayer {
        locale: Some(String::from("en")),
        names: create_test_names(names),
        decrees,
    }
}

pub fn create_records(items: Vec<LayerItem>) -> Vec<LayerRecord> {
    items.into_iter().map(LayerRecord::new).collect()
}
