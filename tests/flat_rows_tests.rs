//! Integration tests for the flat-table expansion and its CSV serialization.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use common::EntryBuilder;
use test_case::test_case;
use timegrid::model::{DayOfWeek, WeekType};
use timegrid::{export, flatten, ScheduleTables};

/// TUE, "10:10 — 11:40", ODD, one group/room/teacher: a single fully
/// numbered row.
#[test]
fn single_entry_produces_one_numbered_row() {
    let entries = vec![
        EntryBuilder::new(DayOfWeek::Tue, 2, "10:10 — 11:40")
            .week(Some(WeekType::Odd))
            .group("ПМ-21", "ПМ", "Математика")
            .room("А-301")
            .teacher("Иванов", "Пётр", "Сергеевич")
            .build(),
    ];
    let rows = flatten(&entries, &ScheduleTables::default());

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.group, "ПМ-21");
    assert_eq!(row.day, 2);
    assert_eq!(row.time_slot, "2");
    assert_eq!(row.aud, "А-301");
    assert_eq!(row.week, "1");
    assert_eq!(row.name, "Иванов П. С., Кафедра математики, доцент");
    assert_eq!(row.subject, "Математический анализ");
    assert_eq!(row.subj_type, "лек.");
}

/// One row per (group × room × teacher) combination.
#[test]
fn cartesian_product_of_groups_rooms_teachers() {
    let entries = vec![
        EntryBuilder::new(DayOfWeek::Mon, 1, "08:30 — 10:00")
            .group("ПМ-21", "ПМ", "Математика")
            .group("МКН-21", "МКН", "Математика")
            .room("А-301")
            .room("Б-105")
            .teacher("Иванов", "Пётр", "Сергеевич")
            .teacher("Петров", "Иван", "Андреевич")
            .build(),
    ];
    let rows = flatten(&entries, &ScheduleTables::default());
    assert_eq!(rows.len(), 2 * 2 * 2);
}

/// An entry missing any of the three lists contributes no rows.
#[test]
fn entry_without_rooms_contributes_nothing() {
    let entries = vec![
        EntryBuilder::new(DayOfWeek::Mon, 1, "08:30 — 10:00")
            .group("ПМ-21", "ПМ", "Математика")
            .teacher("Иванов", "Пётр", "Сергеевич")
            .build(),
    ];
    assert!(flatten(&entries, &ScheduleTables::default()).is_empty());
}

/// The grid filters null parity; the flat table keeps it as Unknown.
#[test]
fn null_parity_is_kept_as_unknown() {
    let entries = vec![
        EntryBuilder::new(DayOfWeek::Wed, 3, "11:50 — 13:20")
            .week(None)
            .group("ПМ-21", "ПМ", "Математика")
            .room("А-301")
            .teacher("Иванов", "Пётр", "Сергеевич")
            .build(),
    ];
    let rows = flatten(&entries, &ScheduleTables::default());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].week, "Unknown");
}

#[test_case(Some(WeekType::Even), "0")]
#[test_case(Some(WeekType::Odd), "1")]
#[test_case(None, "Unknown")]
fn week_codes(week: Option<WeekType>, expected: &str) {
    let entries = vec![
        EntryBuilder::new(DayOfWeek::Mon, 1, "08:30 — 10:00")
            .week(week)
            .group("ПМ-21", "ПМ", "Математика")
            .room("А-301")
            .teacher("Иванов", "Пётр", "Сергеевич")
            .build(),
    ];
    let rows = flatten(&entries, &ScheduleTables::default());
    assert_eq!(rows[0].week, expected);
}

/// Slot titles outside the numbering table degrade to Unknown.
#[test]
fn unmapped_slot_title_is_unknown() {
    let entries = vec![
        EntryBuilder::new(DayOfWeek::Mon, 1, "09:00 — 10:30")
            .group("ПМ-21", "ПМ", "Математика")
            .room("А-301")
            .teacher("Иванов", "Пётр", "Сергеевич")
            .build(),
    ];
    let rows = flatten(&entries, &ScheduleTables::default());
    assert_eq!(rows[0].time_slot, "Unknown");
}

/// End to end through the CSV writer: header plus one quoted record.
#[test]
fn csv_output_round_trips_the_contract() {
    let entries = vec![
        EntryBuilder::new(DayOfWeek::Tue, 2, "10:10 — 11:40")
            .group("ПМ-21", "ПМ", "Математика")
            .room("А-301")
            .teacher("Иванов", "Пётр", "Сергеевич")
            .build(),
    ];
    let rows = flatten(&entries, &ScheduleTables::default());

    let mut buf = Vec::new();
    export::csv::write_rows(&rows, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Group,Day,TimeSlot,Aud,Week,Name,Subject,Subj_type"
    );
    let record = lines.next().unwrap();
    assert!(record.starts_with("ПМ-21,2,2,А-301,1,"));
    assert!(record.ends_with("лек."));
}
