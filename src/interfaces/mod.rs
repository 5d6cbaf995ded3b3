//! Outward-facing formats: the CSV fee report and the printable documents.

pub mod csv;
pub mod documents;
