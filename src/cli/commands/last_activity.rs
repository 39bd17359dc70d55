use crate::adapters::aws::cloudtrail::CloudTrailClient;
use crate::adapters::aws::identity_store::IdentityStoreClient;
use crate::adapters::aws::session::AwsSession;
use crate::adapters::aws::sso_admin::SsoAdminClient;
use crate::adapters::report::csv_report_writer::CsvReportWriter;
use crate::cli::output;
use crate::cli::progress::ConsoleProgress;
use crate::cli::Cli;
use crate::config::app_config::AppConfig;
use crate::core::errors::{ActivityError, Result};
use crate::core::services::activity_lookup::ActivityLookup;
use crate::core::services::activity_report::{ActivityReportService, Target};
use crate::core::services::directory_resolver::DirectoryResolver;
use crate::core::services::user_enumerator::UserEnumerator;

/// Execute the activity report.
///
/// Checks either every user or the one named by `--user`, then writes the
/// CSV report. An unknown `--user` is reported and leaves any existing
/// report untouched.
pub fn execute(args: &Cli) -> Result<()> {
    let config = args.apply_overrides(AppConfig::load(args.config.as_deref())?);
    config.validate()?;

    let target = match &args.user {
        Some(name) => Target::User(name.clone()),
        None => Target::AllUsers,
    };

    if !args.quiet {
        output::run_banner(args.user.as_deref());
    }

    let session = AwsSession::connect(&config.aws)?;
    let admin = SsoAdminClient::new(&session);
    let directory = IdentityStoreClient::new(&session);
    let history = CloudTrailClient::new(&session);
    let writer = CsvReportWriter;

    let resolver = DirectoryResolver::new(&admin, config.directory.instance_selection)
        .with_explicit_store(config.directory.identity_store_id.clone());
    let service = ActivityReportService::new(
        resolver,
        UserEnumerator::new(&directory),
        ActivityLookup::new(&history),
        &writer,
    );

    let mut progress = ConsoleProgress::new(args.quiet);
    let result = service.run(&target, &config.report.output, &mut progress);
    progress.finish();

    match result {
        Ok(summary) => {
            if !args.quiet {
                output::report_saved(
                    summary.users,
                    summary.never_seen,
                    &summary.identity_store_id,
                    &summary.output,
                );
            }
            Ok(())
        }
        Err(ActivityError::UserNotFound { name }) => {
            output::user_not_found(&name);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
