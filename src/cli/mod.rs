pub mod commands;
pub mod logging;
pub mod output;
pub mod progress;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::app_config::AppConfig;
use crate::core::models::instance::InstanceSelection;

const AFTER_HELP: &str = "\
Sign-ins are read from the CloudTrail event history of the selected region.
No time window is applied, so \"Never\" means no sign-in within whatever
CloudTrail still retains (90 days of management events).

Settings can also come from sso-activity.toml (or --config):
  [aws]        region, profile, max_attempts
  [directory]  identity_store_id, instance_selection
  [report]     output";

/// Report the last sign-in of every IAM Identity Center user as CSV.
#[derive(Parser, Debug)]
#[command(name = "sso-last-activity", version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Username to check (case sensitive). Checks all users when omitted
    #[arg(long)]
    pub user: Option<String>,

    /// Where to write the CSV report [default: sso_last_activity.csv]
    #[arg(short, long, env = "SSO_ACTIVITY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// AWS region for Identity Center and CloudTrail [default: us-east-1]
    #[arg(long, env = "SSO_ACTIVITY_REGION")]
    pub region: Option<String>,

    /// Named AWS profile to load credentials from
    #[arg(long, env = "SSO_ACTIVITY_PROFILE")]
    pub profile: Option<String>,

    /// Identity store to query, skipping instance discovery
    #[arg(long, env = "SSO_ACTIVITY_IDENTITY_STORE_ID")]
    pub identity_store_id: Option<String>,

    /// What to do when several Identity Center instances exist [default: first]
    #[arg(long, value_enum, env = "SSO_ACTIVITY_INSTANCE_SELECTION")]
    pub instance_selection: Option<SelectionArg>,

    /// Path to alternative config file
    #[arg(long, env = "SSO_ACTIVITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, env = "SSO_ACTIVITY_VERBOSE", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, env = "SSO_ACTIVITY_QUIET")]
    pub quiet: bool,
}

/// `--instance-selection` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionArg {
    /// Take the first instance the management API returns
    First,
    /// Require exactly one instance and fail otherwise
    Single,
}

impl From<SelectionArg> for InstanceSelection {
    fn from(arg: SelectionArg) -> Self {
        match arg {
            SelectionArg::First => InstanceSelection::First,
            SelectionArg::Single => InstanceSelection::Single,
        }
    }
}

impl Cli {
    /// Layer command-line values over the loaded configuration.
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(output) = &self.output {
            config.report.output = output.clone();
        }
        if let Some(region) = &self.region {
            config.aws.region = region.clone();
        }
        if let Some(profile) = &self.profile {
            config.aws.profile = Some(profile.clone());
        }
        if let Some(store) = &self.identity_store_id {
            config.directory.identity_store_id = Some(store.clone());
        }
        if let Some(selection) = self.instance_selection {
            config.directory.instance_selection = selection.into();
        }
        config
    }
}
