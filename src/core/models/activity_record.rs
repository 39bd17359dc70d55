use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::core::models::directory_user::DirectoryUser;

/// Marker written in place of a timestamp for users with no sign-in.
pub const NEVER: &str = "Never";

/// One row of the activity report.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub user_name: String,
    pub display_name: String,
    /// Latest sign-in, or `None` when no qualifying event exists.
    pub last_seen: Option<DateTime<FixedOffset>>,
}

impl ActivityRecord {
    pub fn new(user: &DirectoryUser, last_seen: Option<DateTime<FixedOffset>>) -> Self {
        Self {
            user_name: user.user_name.clone(),
            display_name: user.display_name.clone(),
            last_seen,
        }
    }

    /// ISO 8601 timestamp with an explicit offset, or [`NEVER`].
    ///
    /// Whole seconds are written without a fraction, anything finer as six
    /// microsecond digits. UTC is written as `+00:00` rather than `Z`.
    pub fn last_seen_display(&self) -> String {
        match &self.last_seen {
            Some(ts) => {
                let precision = if ts.timestamp_subsec_micros() == 0 {
                    SecondsFormat::Secs
                } else {
                    SecondsFormat::Micros
                };
                ts.to_rfc3339_opts(precision, false)
            }
            None => NEVER.to_string(),
        }
    }
}
