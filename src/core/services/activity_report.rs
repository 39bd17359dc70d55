use std::path::{Path, PathBuf};

use crate::core::errors::Result;
use crate::core::models::activity_record::ActivityRecord;
use crate::core::models::directory_user::DirectoryUser;
use crate::core::services::activity_lookup::ActivityLookup;
use crate::core::services::directory_resolver::DirectoryResolver;
use crate::core::services::user_enumerator::UserEnumerator;
use crate::core::traits::report::ReportWriter;

/// Which users a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    AllUsers,
    /// Exactly one user, matched by exact case-sensitive user name.
    User(String),
}

/// Receives progress notifications while a report is built.
///
/// All methods default to doing nothing.
pub trait ReportProgress {
    fn identity_store_resolved(&mut self, _identity_store_id: &str) {}
    fn targets_selected(&mut self, _count: usize) {}
    fn record_ready(&mut self, _record: &ActivityRecord) {}
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub identity_store_id: String,
    pub users: usize,
    pub never_seen: usize,
    pub output: PathBuf,
}

/// Drives the full audit: resolve the store, pick users, look up each
/// user's activity in order, then write the report.
pub struct ActivityReportService<'a> {
    resolver: DirectoryResolver<'a>,
    users: UserEnumerator<'a>,
    lookup: ActivityLookup<'a>,
    writer: &'a dyn ReportWriter,
}

impl<'a> ActivityReportService<'a> {
    pub fn new(
        resolver: DirectoryResolver<'a>,
        users: UserEnumerator<'a>,
        lookup: ActivityLookup<'a>,
        writer: &'a dyn ReportWriter,
    ) -> Self {
        Self {
            resolver,
            users,
            lookup,
            writer,
        }
    }

    /// Build the report and write it to `output`.
    ///
    /// Any error, including [`ActivityError::UserNotFound`], ends the run
    /// before the writer is called, so no file is created or truncated.
    ///
    /// [`ActivityError::UserNotFound`]: crate::core::errors::ActivityError::UserNotFound
    pub fn run(
        &self,
        target: &Target,
        output: &Path,
        progress: &mut dyn ReportProgress,
    ) -> Result<ReportSummary> {
        let (identity_store_id, records) = self.collect(target, progress)?;

        self.writer.write(output, &records)?;
        tracing::info!(
            path = %output.display(),
            rows = records.len(),
            "activity report written"
        );

        Ok(ReportSummary {
            identity_store_id,
            users: records.len(),
            never_seen: records.iter().filter(|r| r.last_seen.is_none()).count(),
            output: output.to_path_buf(),
        })
    }

    /// Resolve, select and look up, returning one record per target user
    /// in enumeration order.
    pub fn collect(
        &self,
        target: &Target,
        progress: &mut dyn ReportProgress,
    ) -> Result<(String, Vec<ActivityRecord>)> {
        let identity_store_id = self.resolver.resolve()?;
        progress.identity_store_resolved(&identity_store_id);

        let targets: Vec<DirectoryUser> = match target {
            Target::User(name) => vec![self.users.find_by_name(&identity_store_id, name)?],
            Target::AllUsers => self
                .users
                .list_all(&identity_store_id)
                .collect::<Result<_>>()?,
        };
        tracing::debug!(
            identity_store_id = %identity_store_id,
            users = targets.len(),
            "target users selected"
        );
        progress.targets_selected(targets.len());

        let mut records = Vec::with_capacity(targets.len());
        for user in &targets {
            tracing::debug!(user = %user.user_name, user_id = %user.user_id, "looking up activity");
            let last_seen = self.lookup.last_activity(&user.user_name)?;
            let record = ActivityRecord::new(user, last_seen);
            progress.record_ready(&record);
            records.push(record);
        }

        Ok((identity_store_id, records))
    }
}
