use std::sync::Arc;

use aws_sdk_cloudtrail::primitives::DateTime as SmithyDateTime;
use aws_sdk_cloudtrail::types::{LookupAttribute, LookupAttributeKey};
use chrono::{DateTime, FixedOffset};
use tokio::runtime::Runtime;

use crate::adapters::aws::session::{request_failed, AwsSession};
use crate::core::errors::Result;
use crate::core::models::activity_event::ActivityEvent;
use crate::core::models::page::Page;
use crate::core::traits::event_history::EventHistory;

/// [`EventHistory`] backed by CloudTrail `LookupEvents`.
///
/// Only the management-event history of the configured region is searched,
/// and only as far back as CloudTrail keeps it (90 days).
pub struct CloudTrailClient {
    client: aws_sdk_cloudtrail::Client,
    runtime: Arc<Runtime>,
}

impl CloudTrailClient {
    pub fn new(session: &AwsSession) -> Self {
        Self {
            client: aws_sdk_cloudtrail::Client::new(session.sdk_config()),
            runtime: session.runtime(),
        }
    }
}

impl EventHistory for CloudTrailClient {
    fn lookup_events(
        &self,
        user_name: &str,
        page_size: i32,
        next_token: Option<&str>,
    ) -> Result<Page<ActivityEvent>> {
        let attribute = LookupAttribute::builder()
            .attribute_key(LookupAttributeKey::Username)
            .attribute_value(user_name)
            .build()
            .map_err(|e| request_failed("cloudtrail", "LookupEvents", e))?;

        let output = self
            .runtime
            .block_on(
                self.client
                    .lookup_events()
                    .lookup_attributes(attribute)
                    .max_results(page_size)
                    .set_next_token(next_token.map(str::to_string))
                    .send(),
            )
            .map_err(|e| request_failed("cloudtrail", "LookupEvents", e))?;

        // Events without a timestamp can never be the latest one.
        let items = output
            .events()
            .iter()
            .filter_map(|event| {
                Some(ActivityEvent {
                    event_name: event.event_name().unwrap_or_default().to_string(),
                    event_source: event.event_source().unwrap_or_default().to_string(),
                    event_time: to_chrono(event.event_time()?)?,
                })
            })
            .collect();

        Ok(Page {
            items,
            next_token: output.next_token().map(str::to_string),
        })
    }
}

/// CloudTrail reports event times in UTC.
fn to_chrono(time: &SmithyDateTime) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp(time.secs(), time.subsec_nanos()).map(|utc| utc.fixed_offset())
}
