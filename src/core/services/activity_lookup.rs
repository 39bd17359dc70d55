use chrono::{DateTime, FixedOffset};

use crate::core::errors::Result;
use crate::core::services::pagination::Paginated;
use crate::core::traits::event_history::EventHistory;

/// Page size requested from the event history (the CloudTrail maximum).
pub const LOOKUP_PAGE_SIZE: i32 = 50;

/// Finds the latest sign-in event of a user.
pub struct ActivityLookup<'a> {
    history: &'a dyn EventHistory,
}

impl<'a> ActivityLookup<'a> {
    pub fn new(history: &'a dyn EventHistory) -> Self {
        Self { history }
    }

    /// Latest sign-in time of `user_name`, or `None` if there is none.
    ///
    /// Every page of the user's history is read. Events from sources outside
    /// the sign-in set are ignored whatever their name or time.
    pub fn last_activity(&self, user_name: &str) -> Result<Option<DateTime<FixedOffset>>> {
        let mut events = Paginated::new(|token| {
            self.history
                .lookup_events(user_name, LOOKUP_PAGE_SIZE, token)
        });

        let mut latest: Option<DateTime<FixedOffset>> = None;
        let mut scanned = 0usize;
        for event in events.by_ref() {
            let event = event?;
            scanned += 1;
            if !event.is_sign_in() {
                continue;
            }
            tracing::trace!(
                user = user_name,
                source = %event.event_source,
                name = %event.event_name,
                time = %event.event_time,
                "sign-in event"
            );
            if latest.is_none_or(|current| event.event_time > current) {
                latest = Some(event.event_time);
            }
        }

        tracing::debug!(
            user = user_name,
            pages = events.pages_fetched(),
            events = scanned,
            last_seen = ?latest,
            "activity lookup finished"
        );
        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::test_support::{event, FakeHistory};

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn latest_among_sign_in_sources() {
        let history = FakeHistory::default().with(
            "alice",
            vec![vec![
                event("sso.amazonaws.com", "2024-01-01T00:00:00Z"),
                event("signin.amazonaws.com", "2024-02-01T00:00:00Z"),
                event("ec2.amazonaws.com", "2024-03-01T00:00:00Z"),
            ]],
        );
        let last = ActivityLookup::new(&history).last_activity("alice").unwrap();
        assert_eq!(last, Some(ts("2024-02-01T00:00:00Z")));
    }

    #[test]
    fn sts_included_other_sources_excluded_even_if_newer() {
        let history = FakeHistory::default().with(
            "alice",
            vec![vec![
                event("sts.amazonaws.com", "2024-05-01T00:00:00Z"),
                event("s3.amazonaws.com", "2024-06-01T00:00:00Z"),
            ]],
        );
        let last = ActivityLookup::new(&history).last_activity("alice").unwrap();
        assert_eq!(last, Some(ts("2024-05-01T00:00:00Z")));
    }

    #[test]
    fn none_when_no_qualifying_event() {
        let history = FakeHistory::default().with(
            "alice",
            vec![vec![event("s3.amazonaws.com", "2024-06-01T00:00:00Z")]],
        );
        let last = ActivityLookup::new(&history).last_activity("alice").unwrap();
        assert_eq!(last, None);
    }

    #[test]
    fn none_when_no_events_at_all() {
        let history = FakeHistory::default();
        let last = ActivityLookup::new(&history).last_activity("ghost").unwrap();
        assert_eq!(last, None);
    }

    #[test]
    fn maximum_found_on_later_page() {
        let history = FakeHistory::default().with(
            "alice",
            vec![
                vec![event("sso.amazonaws.com", "2024-01-01T00:00:00Z")],
                vec![event("s3.amazonaws.com", "2024-09-01T00:00:00Z")],
                vec![event("signin.amazonaws.com", "2024-04-01T00:00:00Z")],
            ],
        );
        let last = ActivityLookup::new(&history).last_activity("alice").unwrap();
        assert_eq!(last, Some(ts("2024-04-01T00:00:00Z")));
    }

    #[test]
    fn result_does_not_depend_on_event_order() {
        let forward = FakeHistory::default().with(
            "alice",
            vec![vec![
                event("sso.amazonaws.com", "2024-01-01T00:00:00Z"),
                event("sso.amazonaws.com", "2024-03-01T00:00:00Z"),
            ]],
        );
        let backward = FakeHistory::default().with(
            "alice",
            vec![vec![
                event("sso.amazonaws.com", "2024-03-01T00:00:00Z"),
                event("sso.amazonaws.com", "2024-01-01T00:00:00Z"),
            ]],
        );
        assert_eq!(
            ActivityLookup::new(&forward).last_activity("alice").unwrap(),
            ActivityLookup::new(&backward).last_activity("alice").unwrap(),
        );
    }

    #[test]
    fn compares_instants_across_offsets() {
        // 10:00+02:00 is 08:00Z, earlier than 09:00Z.
        let history = FakeHistory::default().with(
            "alice",
            vec![vec![
                event("sso.amazonaws.com", "2024-01-01T09:00:00Z"),
                event("sso.amazonaws.com", "2024-01-01T10:00:00+02:00"),
            ]],
        );
        let last = ActivityLookup::new(&history).last_activity("alice").unwrap();
        assert_eq!(last, Some(ts("2024-01-01T09:00:00Z")));
    }

    #[test]
    fn requests_pages_of_fifty() {
        let history = FakeHistory::default().with(
            "alice",
            vec![
                vec![event("sso.amazonaws.com", "2024-01-01T00:00:00Z")],
                vec![event("sso.amazonaws.com", "2024-01-02T00:00:00Z")],
            ],
        );
        ActivityLookup::new(&history).last_activity("alice").unwrap();
        assert_eq!(*history.page_sizes.borrow(), vec![50, 50]);
    }

    #[test]
    fn lookup_errors_propagate() {
        let history = FakeHistory {
            fail_for: Some("alice".into()),
            ..Default::default()
        };
        assert!(ActivityLookup::new(&history).last_activity("alice").is_err());
    }
}
