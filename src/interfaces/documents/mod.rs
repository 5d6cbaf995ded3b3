//! Printable documents handed to students: payment receipts and the no-dues
//! admin slip.

pub mod admin_slip;
pub mod layout;
pub mod receipt;

use crate::domain::student::Student;
use crate::error::{FeeError, Result};
use layout::PageLayout;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub const ISSUER: &str = "SEC Fee Management";

pub trait Document {
    /// File name without extension, e.g. `SEC-Receipt-23UCS001`.
    fn file_stem(&self) -> String;
    fn lines(&self) -> Vec<String>;

    /// The document as PDF bytes.
    fn render(&self, layout: &PageLayout) -> Result<Vec<u8>> {
        layout.render_pdf(&self.file_stem(), &self.lines())
    }
}

/// Renders `document` onto A4 pages and writes it to `dir/<stem>.pdf`.
pub fn write_document(document: &dyn Document, dir: &Path, layout: &PageLayout) -> Result<PathBuf> {
    let path = dir.join(format!("{}.pdf", document.file_stem()));
    document
        .render(layout)
        .and_then(|pdf| {
            fs::create_dir_all(dir)?;
            fs::write(&path, pdf)?;
            Ok(())
        })
        .map_err(|e| {
            error!(path = %path.display(), error = ?e, "document generation failed");
            match e {
                FeeError::Document(_) => e,
                other => FeeError::Document(other.to_string()),
            }
        })?;
    info!(path = %path.display(), "document written");
    Ok(path)
}

/// `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`...
pub fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `BE Computer Science Engineering - 3rd Year, Sem 5`
pub fn course_line(student: &Student) -> String {
    format!(
        "{} - {}{} Year, Sem {}",
        student.course,
        student.year,
        ordinal_suffix(u32::from(student.year)),
        student.semester
    )
}

/// Left label, right-aligned value, padded to a fixed width.
pub(crate) fn summary_line(label: &str, value: &str) -> String {
    const WIDTH: usize = 48;
    let used = label.chars().count() + value.chars().count();
    let pad = WIDTH.saturating_sub(used).max(1);
    format!("  {label}{}{value}", " ".repeat(pad))
}
