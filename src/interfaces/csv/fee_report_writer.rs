use crate::application::admin::FeeReportRow;
use crate::error::{FeeError, Result};
use std::io::Write;

pub const REPORT_FILE_NAME: &str = "student_fees_report.csv";

pub const REPORT_HEADER: [&str; 7] = [
    "Roll Number",
    "Name",
    "Email",
    "Total Fees",
    "Paid Amount",
    "Due Amount",
    "Status",
];

/// Writes the admin fee report as CSV.
///
/// Wraps `csv::Writer`; amounts are written as plain numbers, fields that need
/// it are quoted.
pub struct FeeReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> FeeReportWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(sink);
        Self { writer }
    }

    /// Writes the header and one record per row, then flushes.
    pub fn write_report<'a, I>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a FeeReportRow>,
    {
        self.writer.write_record(REPORT_HEADER)?;
        let mut written = 0;
        for row in rows {
            self.writer.write_record([
                row.roll_number.clone(),
                row.name.clone(),
                row.email.clone(),
                row.total_fees.to_string(),
                row.paid_amount.to_string(),
                row.due_amount.to_string(),
                row.status.to_string(),
            ])?;
            written += 1;
        }
        self.writer.flush()?;
        Ok(written)
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| FeeError::Io(e.into_error()))
    }
}
