//! CSV serialization of the flat table.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::flat::FlatRow;

/// Serialize rows to any writer; the header row comes from the
/// [`FlatRow`] field contract.
pub fn write_rows<W: Write>(rows: &[FlatRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Serialize rows to a file at `path`.
pub fn write_file(rows: &[FlatRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
