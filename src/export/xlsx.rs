//! XLSX serialization of the schedule grid via rust_xlsxwriter.
//!
//! The grid model carries coordinates, merge regions and cell kinds; this
//! module maps kinds onto formats (thin borders everywhere, 90° rotation for
//! day labels, centered slot/week labels, wrapped lesson text) and replays
//! the merge regions as worksheet merges.

use std::collections::HashSet;
use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};

use crate::error::Result;
use crate::grid::{Cell, CellKind, Grid};

struct Formats {
    header: Format,
    day: Format,
    centered: Format,
    lesson: Format,
}

impl Formats {
    fn new() -> Self {
        let bordered = Format::new().set_border(FormatBorder::Thin);
        Self {
            header: bordered.clone(),
            day: bordered
                .clone()
                .set_rotation(90)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            centered: bordered
                .clone()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            lesson: bordered.set_text_wrap().set_align(FormatAlign::Top),
        }
    }

    fn for_cell(&self, cell: &Cell) -> &Format {
        match cell.kind {
            CellKind::DirectionHeader
            | CellKind::ProfileHeader
            | CellKind::GroupHeader
            | CellKind::FixedLabel => &self.header,
            CellKind::DayLabel => &self.day,
            CellKind::SlotLabel | CellKind::WeekLabel => &self.centered,
            CellKind::Lesson => &self.lesson,
        }
    }
}

/// Render the grid into a single-sheet workbook.
pub fn build_workbook(grid: &Grid) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let formats = Formats::new();

    let mut anchors: HashSet<(u32, u16)> = HashSet::new();
    for merge in grid.merges() {
        let anchor = (merge.first_row, merge.first_col);
        anchors.insert(anchor);
        let (text, format) = match grid.cell(merge.first_row, merge.first_col) {
            Some(cell) => (cell.text.as_str(), formats.for_cell(cell)),
            None => ("", &formats.header),
        };
        worksheet.merge_range(
            merge.first_row,
            merge.first_col,
            merge.last_row,
            merge.last_col,
            text,
            format,
        )?;
    }

    for (row, col, cell) in grid.cells() {
        if anchors.contains(&(row, col)) {
            continue;
        }
        worksheet.write_string_with_format(row, col, &cell.text, formats.for_cell(cell))?;
    }

    for (col, &width) in grid.col_widths().iter().enumerate() {
        if let Ok(col) = u16::try_from(col) {
            worksheet.set_column_width(col, width as f64)?;
        }
    }

    Ok(workbook)
}

/// Render the grid and save it to `path`.
pub fn write_file(grid: &Grid, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(grid)?;
    workbook.save(path)?;
    Ok(())
}

/// Render the grid into an in-memory XLSX container.
pub fn to_buffer(grid: &Grid) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(grid)?;
    Ok(workbook.save_to_buffer()?)
}
