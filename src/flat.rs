//! Flat-table expansion: one row per (entry × group × room × teacher).
//!
//! Unlike the grid path, parity-less entries are kept here; their Week cell
//! serializes as `Unknown`. Slot titles outside the numbering table also
//! degrade to `Unknown` instead of failing the run.

use serde::Serialize;

use crate::compose::teacher_descriptor;
use crate::model::ScheduleEntry;
use crate::tables::ScheduleTables;

const UNKNOWN: &str = "Unknown";

/// One CSV row of the flat variant. Field order and names are the output
/// column contract.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlatRow {
    #[serde(rename = "Group")]
    pub group: String,
    /// Numeric day of week, 1–6.
    #[serde(rename = "Day")]
    pub day: u8,
    /// Slot ordinal 1–8, or `Unknown` for unmapped titles.
    #[serde(rename = "TimeSlot")]
    pub time_slot: String,
    #[serde(rename = "Aud")]
    pub aud: String,
    /// `0` for EVEN, `1` for ODD, `Unknown` for null parity.
    #[serde(rename = "Week")]
    pub week: String,
    /// Teacher descriptor: short name, department, position.
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Subj_type")]
    pub subj_type: String,
}

/// Expand entries into the cartesian product of their group, room and
/// teacher lists. Entries missing any of the three lists contribute no rows.
pub fn flatten(entries: &[ScheduleEntry], tables: &ScheduleTables) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    for entry in entries {
        let day = tables.day_number(entry.day_of_week);
        let time_slot = tables
            .slot_ordinal(&entry.time_slot.title)
            .map_or_else(|| UNKNOWN.to_string(), |n| n.to_string());
        let week = entry
            .week_type
            .map_or_else(|| UNKNOWN.to_string(), |w| tables.week_code(w).to_string());
        let subj_type = tables.type_abbrev(entry.assignment.kind).to_string();

        for group in &entry.groups {
            for room in &entry.rooms {
                for teacher in &entry.teachers {
                    rows.push(FlatRow {
                        group: group.group.title.clone(),
                        day,
                        time_slot: time_slot.clone(),
                        aud: room.audience.title.clone(),
                        week: week.clone(),
                        name: teacher_descriptor(&teacher.teacher),
                        subject: entry.assignment.discipline.clone(),
                        subj_type: subj_type.clone(),
                    });
                }
            }
        }
    }
    rows
}
