use chrono::{DateTime, FixedOffset};

/// Event sources that count as a sign-in: console/portal sign-in,
/// the SSO portal itself, and role credentials issued through STS.
pub const SIGN_IN_SOURCES: [&str; 3] = [
    "signin.amazonaws.com",
    "sso.amazonaws.com",
    "sts.amazonaws.com",
];

/// A CloudTrail event attributed to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEvent {
    pub event_name: String,
    pub event_source: String,
    pub event_time: DateTime<FixedOffset>,
}

impl ActivityEvent {
    /// Whether this event came from one of the [`SIGN_IN_SOURCES`].
    ///
    /// The event name is irrelevant; only the source decides.
    pub fn is_sign_in(&self) -> bool {
        SIGN_IN_SOURCES.contains(&self.event_source.as_str())
    }
}
