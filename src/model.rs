//! Input schema for the timetable export.
//!
//! The export is a JSON array of [`ScheduleEntry`] objects in camelCase.
//! Deserialization is strict about field types: a missing or mistyped field
//! fails the whole run before anything is written. The `groups`, `rooms` and
//! `teachers` lists default to empty when absent.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One scheduled class occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub day_of_week: DayOfWeek,
    pub time_slot_id: SlotId,
    pub time_slot: TimeSlot,
    /// `None` means the occurrence has no definite week parity; such entries
    /// never reach the grid but are kept in the flat table.
    #[serde(default)]
    pub week_type: Option<WeekType>,
    pub assignment: Assignment,
    #[serde(default)]
    pub groups: Vec<GroupLink>,
    #[serde(default)]
    pub rooms: Vec<RoomLink>,
    #[serde(default)]
    pub teachers: Vec<TeacherLink>,
}

/// Time-slot identifier, preserved verbatim from the export (some dumps use
/// numeric ids, others strings).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotId {
    Num(i64),
    Text(String),
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Day of week as exported (six-day teaching week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

/// EVEN/ODD designation for alternating-week occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeekType {
    Even,
    Odd,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Display label, e.g. `"08:30 — 10:00"`.
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub discipline: String,
    #[serde(rename = "type")]
    pub kind: DisciplineType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisciplineType {
    Lecture,
    Practice,
}

/// Wrapper mirroring the export's `groups: [{ group: {...} }]` nesting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupLink {
    pub group: Group,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub title: String,
    /// Column key of the grid.
    pub profile: String,
    /// Top-level academic track grouping one or more profiles.
    pub direction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomLink {
    pub audience: Audience,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audience {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherLink {
    pub teacher: Teacher,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub user: User,
    pub department: Department,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub title: String,
}

/// Parse a timetable export from raw JSON bytes.
pub fn parse_entries(data: &[u8]) -> Result<Vec<ScheduleEntry>> {
    Ok(serde_json::from_slice(data)?)
}
