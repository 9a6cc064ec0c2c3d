//! Grid builder: maps the flat entry list into a merged-cell schedule grid.
//!
//! The grid is a sparse table addressed by `(row, col)`, 0-indexed. Layout:
//!
//! - row 0: direction headers, merged across the profiles of each direction
//! - row 1: profile headers (one column per distinct profile, starting at
//!   column 3)
//! - row 2: group-title headers plus the fixed "Дни"/"Часы" labels
//! - rows 3+: two sub-rows per time slot (odd week above even week), grouped
//!   into day blocks merged vertically in the days column with a 90°-rotated
//!   label
//!
//! Entries are stably sorted by (day, slot rank, slot id) before layout, so
//! the grid is deterministic regardless of input order.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, warn};

use crate::compose::{lesson_label, PickPolicy};
use crate::error::{Result, TimegridError};
use crate::model::{DayOfWeek, ScheduleEntry, SlotId};
use crate::tables::{
    ScheduleTables, DAYS_LABEL, EVEN_WEEK_LABEL, HOURS_LABEL, ODD_WEEK_LABEL,
};

/// Merged day-block column.
pub const DAYS_COL: u16 = 0;
/// Time-slot title column.
pub const HOURS_COL: u16 = 1;
/// Odd/even week label column.
pub const WEEK_COL: u16 = 2;
/// First profile column; one column per distinct profile from here on.
pub const FIRST_PROFILE_COL: u16 = 3;

/// Direction header row.
pub const DIRECTION_ROW: u32 = 0;
/// Profile header row.
pub const PROFILE_ROW: u32 = 1;
/// Group-title header row, also holding the fixed column labels.
pub const GROUP_ROW: u32 = 2;
/// First time-slot row.
pub const FIRST_SLOT_ROW: u32 = 3;

/// Extra character width added to every sized column.
const WIDTH_PADDING: usize = 2;

/// What a populated cell holds; drives formatting on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    DirectionHeader,
    ProfileHeader,
    GroupHeader,
    /// The fixed "Дни"/"Часы" labels.
    FixedLabel,
    /// Rotated full day name anchoring a day block.
    DayLabel,
    /// Time-slot title anchoring a two-row merge.
    SlotLabel,
    WeekLabel,
    /// Composed multi-line lesson label.
    Lesson,
}

/// A populated grid cell.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub kind: CellKind,
}

/// Inclusive rectangular merge region; the anchor cell is its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

impl MergeRange {
    /// Whether `(row, col)` falls inside this region (anchor included).
    pub fn contains(&self, row: u32, col: u16) -> bool {
        row >= self.first_row && row <= self.last_row && col >= self.first_col && col <= self.last_col
    }
}

/// The fully laid-out schedule grid, ready for serialization.
///
/// Covered (non-anchor) merge cells hold no value and are absent from the
/// cell map; only anchors and plain cells carry text.
#[derive(Debug, Default)]
pub struct Grid {
    cells: BTreeMap<(u32, u16), Cell>,
    merges: Vec<MergeRange>,
    col_widths: Vec<usize>,
    n_rows: u32,
    n_cols: u16,
}

impl Grid {
    /// Cell at `(row, col)`, if populated.
    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// All populated cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u16, &Cell)> {
        self.cells.iter().map(|(&(r, c), cell)| (r, c, cell))
    }

    /// All merge regions.
    pub fn merges(&self) -> &[MergeRange] {
        &self.merges
    }

    /// The merge region covering `(row, col)`, if any.
    pub fn merge_covering(&self, row: u32, col: u16) -> Option<&MergeRange> {
        self.merges.iter().find(|m| m.contains(row, col))
    }

    /// Computed column widths in character units, padding included.
    pub fn col_widths(&self) -> &[usize] {
        &self.col_widths
    }

    /// Total row count (header rows included).
    pub fn n_rows(&self) -> u32 {
        self.n_rows
    }

    /// Total column count (the three fixed columns plus one per profile).
    pub fn n_cols(&self) -> u16 {
        self.n_cols
    }

    fn set(&mut self, row: u32, col: u16, text: String, kind: CellKind) {
        self.cells.insert((row, col), Cell { text, kind });
    }
}

/// One direction with its profile columns, in encounter order.
struct DirectionBlock {
    title: String,
    profiles: Vec<String>,
}

/// Builds a [`Grid`] from schedule entries using immutable lookup tables.
pub struct GridBuilder<'a> {
    tables: &'a ScheduleTables,
    policy: PickPolicy,
}

impl<'a> GridBuilder<'a> {
    pub fn new(tables: &'a ScheduleTables) -> Self {
        Self {
            tables,
            policy: PickPolicy::default(),
        }
    }

    /// Override the teacher/room resolution policy.
    pub fn with_policy(mut self, policy: PickPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run the full layout: filter, sort, headers, day/slot rows, fill,
    /// column sizing.
    pub fn build(&self, entries: &[ScheduleEntry]) -> Result<Grid> {
        let kept = self.filter_and_sort(entries);
        debug!(
            total = entries.len(),
            kept = kept.len(),
            "building schedule grid"
        );

        let mut grid = Grid::default();
        let profile_cols = self.lay_out_headers(&kept, &mut grid)?;
        let slot_rows = self.lay_out_day_blocks(&kept, &mut grid);
        self.fill_lessons(&kept, &profile_cols, &slot_rows, &mut grid)?;
        self.size_columns(&mut grid);
        Ok(grid)
    }

    /// Drop parity-less entries and sort the rest into a deterministic
    /// layout order. The sort is stable, so equal coordinates keep their
    /// input order and "last write wins" is well defined.
    fn filter_and_sort<'e>(&self, entries: &'e [ScheduleEntry]) -> Vec<&'e ScheduleEntry> {
        let mut kept: Vec<&ScheduleEntry> = entries
            .iter()
            .filter(|e| e.week_type.is_some())
            .collect();
        kept.sort_by(|a, b| self.sort_key(a).cmp(&self.sort_key(b)));
        kept
    }

    /// Unknown slot titles sort after the known ordinals, then by raw id.
    fn sort_key<'e>(&self, entry: &'e ScheduleEntry) -> (u8, u8, u8, &'e SlotId) {
        let (unknown, ordinal) = match self.tables.slot_ordinal(&entry.time_slot.title) {
            Some(n) => (0, n),
            None => (1, 0),
        };
        (
            self.tables.day_number(entry.day_of_week),
            unknown,
            ordinal,
            &entry.time_slot_id,
        )
    }

    /// Header rows 0..=2: direction blocks, profile columns, group titles.
    /// Returns the profile → column map; a profile maps to exactly one
    /// column for the whole run (first direction wins on duplicates).
    fn lay_out_headers(
        &self,
        kept: &[&ScheduleEntry],
        grid: &mut Grid,
    ) -> Result<HashMap<String, u16>> {
        let mut blocks: Vec<DirectionBlock> = Vec::new();
        let mut block_index: HashMap<String, usize> = HashMap::new();
        let mut seen_profiles: HashSet<String> = HashSet::new();
        let mut group_titles: HashMap<String, Vec<String>> = HashMap::new();

        for entry in kept {
            for link in &entry.groups {
                let group = &link.group;
                if seen_profiles.insert(group.profile.clone()) {
                    let idx = match block_index.get(&group.direction) {
                        Some(&idx) => idx,
                        None => {
                            blocks.push(DirectionBlock {
                                title: group.direction.clone(),
                                profiles: Vec::new(),
                            });
                            let idx = blocks.len() - 1;
                            block_index.insert(group.direction.clone(), idx);
                            idx
                        }
                    };
                    if let Some(block) = blocks.get_mut(idx) {
                        block.profiles.push(group.profile.clone());
                    }
                }
                let titles = group_titles.entry(group.profile.clone()).or_default();
                if !titles.contains(&group.title) {
                    titles.push(group.title.clone());
                }
            }
        }

        grid.set(GROUP_ROW, DAYS_COL, DAYS_LABEL.to_string(), CellKind::FixedLabel);
        grid.set(GROUP_ROW, HOURS_COL, HOURS_LABEL.to_string(), CellKind::FixedLabel);

        let mut profile_cols: HashMap<String, u16> = HashMap::new();
        let mut col = FIRST_PROFILE_COL;
        for block in &blocks {
            let start = col;
            for profile in &block.profiles {
                grid.set(PROFILE_ROW, col, profile.clone(), CellKind::ProfileHeader);
                if let Some(titles) = group_titles.get(profile) {
                    grid.set(GROUP_ROW, col, titles.join(", "), CellKind::GroupHeader);
                }
                profile_cols.insert(profile.clone(), col);
                col = col.checked_add(1).ok_or_else(|| {
                    TimegridError::Layout("profile column index overflow".to_string())
                })?;
            }
            let end = col - 1;
            grid.set(DIRECTION_ROW, start, block.title.clone(), CellKind::DirectionHeader);
            if end > start {
                grid.merges.push(MergeRange {
                    first_row: DIRECTION_ROW,
                    first_col: start,
                    last_row: DIRECTION_ROW,
                    last_col: end,
                });
            }
        }

        grid.n_cols = col.max(FIRST_PROFILE_COL);
        Ok(profile_cols)
    }

    /// Rows 3+: one merged day block per day, two rows per distinct slot,
    /// week labels in the third column. Returns the (day, slot id) → base
    /// row map used by the fill pass.
    fn lay_out_day_blocks(
        &self,
        kept: &[&ScheduleEntry],
        grid: &mut Grid,
    ) -> HashMap<(DayOfWeek, SlotId), u32> {
        // Days are contiguous after sorting; slots dedup by id per day.
        let mut day_slots: Vec<(DayOfWeek, Vec<(SlotId, String)>)> = Vec::new();
        for entry in kept {
            match day_slots.last_mut() {
                Some((day, slots)) if *day == entry.day_of_week => {
                    if !slots.iter().any(|(id, _)| *id == entry.time_slot_id) {
                        slots.push((entry.time_slot_id.clone(), entry.time_slot.title.clone()));
                    }
                }
                _ => {
                    day_slots.push((
                        entry.day_of_week,
                        vec![(entry.time_slot_id.clone(), entry.time_slot.title.clone())],
                    ));
                }
            }
        }

        let mut slot_rows: HashMap<(DayOfWeek, SlotId), u32> = HashMap::new();
        let mut row = FIRST_SLOT_ROW;
        for (day, slots) in day_slots {
            let block_start = row;
            for (slot_id, slot_title) in slots {
                grid.set(row, HOURS_COL, slot_title, CellKind::SlotLabel);
                grid.merges.push(MergeRange {
                    first_row: row,
                    first_col: HOURS_COL,
                    last_row: row + 1,
                    last_col: HOURS_COL,
                });
                grid.set(row, WEEK_COL, ODD_WEEK_LABEL.to_string(), CellKind::WeekLabel);
                grid.set(row + 1, WEEK_COL, EVEN_WEEK_LABEL.to_string(), CellKind::WeekLabel);
                slot_rows.insert((day, slot_id), row);
                row += 2;
            }
            let block_end = row - 1;
            grid.set(
                block_start,
                DAYS_COL,
                self.tables.day_name(day).to_string(),
                CellKind::DayLabel,
            );
            if block_end > block_start {
                grid.merges.push(MergeRange {
                    first_row: block_start,
                    first_col: DAYS_COL,
                    last_row: block_end,
                    last_col: DAYS_COL,
                });
            }
        }

        grid.n_rows = row;
        slot_rows
    }

    /// Write each entry's composed label into its (day, slot, profile,
    /// parity) coordinate. Collisions keep the later entry and are logged.
    fn fill_lessons(
        &self,
        kept: &[&ScheduleEntry],
        profile_cols: &HashMap<String, u16>,
        slot_rows: &HashMap<(DayOfWeek, SlotId), u32>,
        grid: &mut Grid,
    ) -> Result<()> {
        for entry in kept {
            let Some(week) = entry.week_type else { continue };
            if entry.groups.is_empty() {
                continue;
            }
            let label = lesson_label(entry, self.tables, self.policy)?;
            let base = slot_rows
                .get(&(entry.day_of_week, entry.time_slot_id.clone()))
                .copied()
                .ok_or_else(|| {
                    TimegridError::Layout(format!(
                        "no row pair for day {:?} slot {}",
                        entry.day_of_week, entry.time_slot_id
                    ))
                })?;
            let row = base + self.tables.parity_offset(week);

            for link in &entry.groups {
                let col = profile_cols
                    .get(&link.group.profile)
                    .copied()
                    .ok_or_else(|| {
                        TimegridError::Layout(format!(
                            "no column for profile {:?}",
                            link.group.profile
                        ))
                    })?;
                if grid.cell(row, col).is_some() {
                    warn!(row, col = u32::from(col), "grid cell collision, keeping the later entry");
                }
                grid.set(row, col, label.clone(), CellKind::Lesson);
            }
        }
        Ok(())
    }

    /// Column width = longest populated value (merge anchors included,
    /// covered cells hold nothing) plus the fixed padding.
    fn size_columns(&self, grid: &mut Grid) {
        let mut widths = vec![WIDTH_PADDING; usize::from(grid.n_cols)];
        for (&(_, col), cell) in &grid.cells {
            let width = cell.text.chars().count() + WIDTH_PADDING;
            if let Some(slot) = widths.get_mut(usize::from(col)) {
                *slot = (*slot).max(width);
            }
        }
        grid.col_widths = widths;
    }
}
