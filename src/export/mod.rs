//! Serialization of the in-memory artifacts to their output formats.

pub mod csv;
pub mod xlsx;
