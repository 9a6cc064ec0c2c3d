//! timegrid - timetable export transformer
//!
//! Turns a university timetable export (a JSON array of scheduled classes
//! with rooms, teachers, groups and time slots) into two artifacts:
//!
//! - a formatted XLSX grid: days/time-slots × group-profile columns, with
//!   merged day blocks, 90°-rotated day labels and odd/even week sub-rows
//! - a flat CSV table with one row per (entry × group × room × teacher)
//!
//! Each run is a single synchronous pass: read input, build the artifact in
//! memory, write one output file. The grid layout is deterministic: entries
//! are sorted by day and time-slot rank before any column or row is
//! allocated, regardless of input order.

pub mod compose;
pub mod error;
pub mod export;
pub mod flat;
pub mod grid;
pub mod model;
pub mod tables;

pub use compose::PickPolicy;
pub use error::{Result, TimegridError};
pub use flat::{flatten, FlatRow};
pub use grid::{Grid, GridBuilder};
pub use model::{parse_entries, ScheduleEntry};
pub use tables::ScheduleTables;
