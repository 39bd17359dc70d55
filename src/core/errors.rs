use std::path::PathBuf;

/// All domain errors for the activity audit.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error(
        "No IAM Identity Center instances found\n\n  \
         The account and region you are querying have no Identity Center instance.\n\n  \
         Solutions:\n    \
         → Check the region: sso-last-activity --region <region>\n    \
         → Use the management account (or a delegated administrator)\n    \
         → Pass the store directly: --identity-store-id d-xxxxxxxxxx"
    )]
    NoInstanceFound,

    #[error(
        "Found {count} IAM Identity Center instances but instance_selection = \"single\"\n\n  \
         Solutions:\n    \
         → Pick one explicitly: --identity-store-id d-xxxxxxxxxx\n    \
         → Or accept the first instance: instance_selection = \"first\""
    )]
    AmbiguousInstance { count: usize },

    #[error("User {name} not found in Identity Center")]
    UserNotFound { name: String },

    #[error(
        "Cannot write report to {path}: {reason}\n\n  \
         Check that the directory exists and is writable.\n  \
         Choose another location with --output <path>."
    )]
    ReportWriteFailed { path: PathBuf, reason: String },

    #[error(
        "{service} {operation} failed: {reason}\n\n  \
         Solutions:\n    \
         → Check your credentials: aws sts get-caller-identity\n    \
         → Select a profile: --profile <name>\n    \
         → Raise retries for throttling: [aws] max_attempts in the config file"
    )]
    AwsRequestFailed {
        service: &'static str,
        operation: &'static str,
        reason: String,
    },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Failed to start async runtime: {reason}")]
    Runtime { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ActivityError>;
