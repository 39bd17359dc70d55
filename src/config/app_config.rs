use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::adapters::report::csv_report_writer::DEFAULT_REPORT_PATH;
use crate::core::errors::{ActivityError, Result};
use crate::core::models::instance::InstanceSelection;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "sso-activity.toml";

/// Region used when neither the config file nor `--region` name one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// SDK attempts per request (first try included) unless configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Top-level configuration read from `sso-activity.toml`.
///
/// Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub aws: AwsSection,
    pub directory: DirectorySection,
    pub report: ReportSection,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `sso-activity.toml` in the
    /// working directory is used if present, and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                return Err(ActivityError::InvalidConfig {
                    detail: format!("config file {} not found", p.display()),
                });
            }
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&config_path)?;
        let config = Self::parse(&content).map_err(|e| match e {
            ActivityError::InvalidConfig { detail } => ActivityError::InvalidConfig {
                detail: format!("{}: {detail}", config_path.display()),
            },
            other => other,
        })?;

        tracing::debug!(path = %config_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse and validate TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ActivityError::InvalidConfig {
            detail: format!("Failed to parse config: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the AWS clients or the report writer cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.aws.region.trim().is_empty() {
            return Err(ActivityError::InvalidConfig {
                detail: "aws.region must not be empty".into(),
            });
        }
        if self.aws.max_attempts == 0 {
            return Err(ActivityError::InvalidConfig {
                detail: "aws.max_attempts must be at least 1".into(),
            });
        }
        if self.aws.profile.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(ActivityError::InvalidConfig {
                detail: "aws.profile must not be empty when set".into(),
            });
        }
        if self
            .directory
            .identity_store_id
            .as_deref()
            .is_some_and(|id| id.trim().is_empty())
        {
            return Err(ActivityError::InvalidConfig {
                detail: "directory.identity_store_id must not be empty when set".into(),
            });
        }
        if self.report.output.as_os_str().is_empty() {
            return Err(ActivityError::InvalidConfig {
                detail: "report.output must not be empty".into(),
            });
        }
        Ok(())
    }
}

/// The `[aws]` section. One region serves every client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AwsSection {
    pub region: String,
    pub profile: Option<String>,
    pub max_attempts: u32,
}

impl Default for AwsSection {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            profile: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// The `[directory]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectorySection {
    /// Skip instance discovery and query this identity store.
    pub identity_store_id: Option<String>,
    pub instance_selection: InstanceSelection,
}

/// The `[report]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSection {
    pub output: PathBuf,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}
