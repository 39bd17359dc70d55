use std::path::Path;

use crate::core::errors::Result;
use crate::core::models::activity_record::ActivityRecord;

/// Port for persisting the finished activity report.
pub trait ReportWriter {
    /// Write all records to `path`, replacing any existing content.
    fn write(&self, path: &Path, records: &[ActivityRecord]) -> Result<()>;
}
