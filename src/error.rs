//! Structured error types for timegrid.
//!
//! Every failure aborts the run before any output file is written; there are
//! no partial artifacts.

/// All errors that can occur while reading a timetable export and writing
/// the grid or flat artifacts.
#[derive(Debug, thiserror::Error)]
pub enum TimegridError {
    /// JSON deserialization error from serde_json.
    #[error("JSON parsing: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error.
    #[error("CSV output: {0}")]
    Csv(#[from] csv::Error),

    /// XLSX serialization error from rust_xlsxwriter.
    #[error("XLSX output: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// A list that the pick policy requires to hold exactly one element
    /// held several.
    #[error("ambiguous {what}: {count} candidates where exactly one is required")]
    Ambiguous { what: &'static str, count: usize },

    /// Grid coordinate bookkeeping failure (e.g. column index overflow).
    #[error("grid layout: {0}")]
    Layout(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimegridError>;
