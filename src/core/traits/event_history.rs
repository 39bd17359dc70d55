use crate::core::errors::Result;
use crate::core::models::activity_event::ActivityEvent;
use crate::core::models::page::Page;

/// Port for searching recorded account activity.
pub trait EventHistory {
    /// Fetch one page of events whose `Username` attribute equals `user_name`.
    ///
    /// No time range is applied; how far back results go depends on what
    /// the backing service retains.
    fn lookup_events(
        &self,
        user_name: &str,
        page_size: i32,
        next_token: Option<&str>,
    ) -> Result<Page<ActivityEvent>>;
}
