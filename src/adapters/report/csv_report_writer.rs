use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::core::errors::{ActivityError, Result};
use crate::core::models::activity_record::ActivityRecord;
use crate::core::traits::report::ReportWriter;

/// Header row, always written, even for an empty report.
pub const CSV_HEADER: [&str; 3] = ["UserName", "DisplayName", "LastSeen"];

/// Default report location, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "sso_last_activity.csv";

/// One CSV data row, in header column order.
#[derive(Debug, Serialize)]
struct CsvActivityRow<'a> {
    user_name: &'a str,
    display_name: &'a str,
    last_seen: String,
}

impl<'a> From<&'a ActivityRecord> for CsvActivityRow<'a> {
    fn from(record: &'a ActivityRecord) -> Self {
        Self {
            user_name: &record.user_name,
            display_name: &record.display_name,
            last_seen: record.last_seen_display(),
        }
    }
}

/// Writes the activity report as UTF-8, comma-delimited CSV with CRLF
/// line endings. Fields are quoted only when they need to be.
pub struct CsvReportWriter;

impl ReportWriter for CsvReportWriter {
    fn write(&self, path: &Path, records: &[ActivityRecord]) -> Result<()> {
        let failed = |reason: String| ActivityError::ReportWriteFailed {
            path: path.to_path_buf(),
            reason,
        };

        // File::create truncates: a rerun replaces the previous report.
        let file = File::create(path).map_err(|e| failed(e.to_string()))?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        wtr.write_record(CSV_HEADER)
            .map_err(|e| failed(e.to_string()))?;
        for record in records {
            wtr.serialize(CsvActivityRow::from(record))
                .map_err(|e| failed(e.to_string()))?;
        }

        wtr.flush().map_err(|e| failed(e.to_string()))?;
        Ok(())
    }
}
