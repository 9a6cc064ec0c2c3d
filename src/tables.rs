//! Immutable lookup tables for grid and flat-table construction.
//!
//! The original export pipeline kept these as script-level globals; here they
//! are owned by a [`ScheduleTables`] value passed into the builders, so a run
//! can swap in a different slot numbering without touching module state.

use std::collections::HashMap;

use crate::model::{DayOfWeek, DisciplineType, WeekType};

/// Fixed label of the days column header cell.
pub const DAYS_LABEL: &str = "Дни";
/// Fixed label of the hours column header cell.
pub const HOURS_LABEL: &str = "Часы";
/// Label of the upper (odd-week) sub-row.
pub const ODD_WEEK_LABEL: &str = "Нечетная неделя";
/// Label of the lower (even-week) sub-row.
pub const EVEN_WEEK_LABEL: &str = "Четная неделя";
/// Placeholder when an entry lists no teacher.
pub const NO_TEACHER: &str = "Не указан";
/// Placeholder when an entry lists no room.
pub const NO_ROOM: &str = "Не указано";

/// The standard eight daily periods with their flat-table ordinals.
const SLOT_ORDINALS: [(&str, u8); 8] = [
    ("08:30 — 10:00", 1),
    ("10:10 — 11:40", 2),
    ("11:50 — 13:20", 3),
    ("13:50 — 15:20", 4),
    ("15:30 — 17:00", 5),
    ("17:10 — 18:40", 6),
    ("18:50 — 20:20", 7),
    ("20:20 — 22:00", 8),
];

/// Lookup tables consulted by [`crate::grid::GridBuilder`] and
/// [`crate::flat::flatten`].
#[derive(Debug, Clone)]
pub struct ScheduleTables {
    slot_ordinals: HashMap<String, u8>,
}

impl Default for ScheduleTables {
    fn default() -> Self {
        Self {
            slot_ordinals: SLOT_ORDINALS
                .iter()
                .map(|&(title, n)| (title.to_string(), n))
                .collect(),
        }
    }
}

impl ScheduleTables {
    /// Build tables with a custom slot-title numbering.
    pub fn with_slot_ordinals<I>(ordinals: I) -> Self
    where
        I: IntoIterator<Item = (String, u8)>,
    {
        Self {
            slot_ordinals: ordinals.into_iter().collect(),
        }
    }

    /// Ordinal of a time-slot display label (1-based), if the label is known.
    pub fn slot_ordinal(&self, title: &str) -> Option<u8> {
        self.slot_ordinals.get(title).copied()
    }

    /// Numeric day of week, 1 (MON) through 6 (SAT).
    pub fn day_number(&self, day: DayOfWeek) -> u8 {
        match day {
            DayOfWeek::Mon => 1,
            DayOfWeek::Tue => 2,
            DayOfWeek::Wed => 3,
            DayOfWeek::Thu => 4,
            DayOfWeek::Fri => 5,
            DayOfWeek::Sat => 6,
        }
    }

    /// Full day name used in the rotated day-block label.
    pub fn day_name(&self, day: DayOfWeek) -> &'static str {
        match day {
            DayOfWeek::Mon => "ПОНЕДЕЛЬНИК",
            DayOfWeek::Tue => "ВТОРНИК",
            DayOfWeek::Wed => "СРЕДА",
            DayOfWeek::Thu => "ЧЕТВЕРГ",
            DayOfWeek::Fri => "ПЯТНИЦА",
            DayOfWeek::Sat => "СУББОТА",
        }
    }

    /// Abbreviation prefixed to the discipline in a lesson cell.
    pub fn type_abbrev(&self, kind: DisciplineType) -> &'static str {
        match kind {
            DisciplineType::Lecture => "лек.",
            DisciplineType::Practice => "пр.",
        }
    }

    /// Sub-row offset within a time-slot row pair: odd week on top.
    pub fn parity_offset(&self, week: WeekType) -> u32 {
        match week {
            WeekType::Odd => 0,
            WeekType::Even => 1,
        }
    }

    /// Flat-table week code: EVEN maps to 0, ODD to 1.
    pub fn week_code(&self, week: WeekType) -> u8 {
        match week {
            WeekType::Even => 0,
            WeekType::Odd => 1,
        }
    }
}
