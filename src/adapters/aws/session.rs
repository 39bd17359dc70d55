use std::sync::Arc;

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use tokio::runtime::Runtime;

use crate::config::app_config::AwsSection;
use crate::core::errors::{ActivityError, Result};

/// Shared SDK configuration and the runtime used to drive SDK futures.
///
/// Built once at start-up; every AWS adapter borrows the same runtime and
/// blocks on one request at a time.
pub struct AwsSession {
    runtime: Arc<Runtime>,
    sdk_config: SdkConfig,
}

impl AwsSession {
    /// Resolve credentials and region for all clients.
    ///
    /// Retries and backoff for throttling or transient network errors are
    /// left to the SDK's standard retry mode, capped at `max_attempts`.
    pub fn connect(settings: &AwsSection) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ActivityError::Runtime {
                reason: e.to_string(),
            })?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .retry_config(RetryConfig::standard().with_max_attempts(settings.max_attempts));
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }

        let sdk_config = runtime.block_on(loader.load());

        tracing::debug!(
            region = %settings.region,
            profile = settings.profile.as_deref().unwrap_or("default"),
            max_attempts = settings.max_attempts,
            "AWS session initialized"
        );

        Ok(Self {
            runtime: Arc::new(runtime),
            sdk_config,
        })
    }

    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }

    pub fn runtime(&self) -> Arc<Runtime> {
        Arc::clone(&self.runtime)
    }
}

/// Map an SDK error into [`ActivityError::AwsRequestFailed`], keeping the
/// full error chain in the message.
pub fn request_failed<E: std::error::Error>(
    service: &'static str,
    operation: &'static str,
    err: E,
) -> ActivityError {
    ActivityError::AwsRequestFailed {
        service,
        operation,
        reason: aws_sdk_ssoadmin::error::DisplayErrorContext(&err).to_string(),
    }
}
