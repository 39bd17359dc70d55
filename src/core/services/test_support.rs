//! In-memory collaborators for service tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::DateTime;

use crate::core::errors::{ActivityError, Result};
use crate::core::models::activity_event::ActivityEvent;
use crate::core::models::activity_record::ActivityRecord;
use crate::core::models::directory_user::DirectoryUser;
use crate::core::models::instance::IdentityCenterInstance;
use crate::core::models::page::Page;
use crate::core::traits::directory::{Directory, DirectoryAdmin};
use crate::core::traits::event_history::EventHistory;
use crate::core::traits::report::ReportWriter;

/// Serve page `token` (parsed as an index) out of `pages`.
fn serve<T: Clone>(pages: &[Vec<T>], token: Option<&str>) -> Page<T> {
    let index: usize = token.map(|t| t.parse().unwrap()).unwrap_or(0);
    let next = index + 1;
    Page {
        items: pages.get(index).cloned().unwrap_or_default(),
        next_token: (next < pages.len()).then(|| next.to_string()),
    }
}

pub fn user(name: &str, display: &str) -> DirectoryUser {
    DirectoryUser {
        user_name: name.to_string(),
        display_name: display.to_string(),
        user_id: format!("id-{name}"),
    }
}

pub fn event(source: &str, time: &str) -> ActivityEvent {
    ActivityEvent {
        event_name: "ConsoleLogin".to_string(),
        event_source: source.to_string(),
        event_time: DateTime::parse_from_rfc3339(time).unwrap(),
    }
}

pub fn instance(store: &str) -> IdentityCenterInstance {
    IdentityCenterInstance {
        instance_arn: format!("arn:aws:sso:::instance/ssoins-{store}"),
        identity_store_id: store.to_string(),
    }
}

#[derive(Default)]
pub struct FakeAdmin {
    pub pages: Vec<Vec<IdentityCenterInstance>>,
    pub calls: Cell<usize>,
}

impl FakeAdmin {
    pub fn with(instances: Vec<IdentityCenterInstance>) -> Self {
        Self {
            pages: vec![instances],
            calls: Cell::new(0),
        }
    }
}

impl DirectoryAdmin for FakeAdmin {
    fn list_instances(&self, next_token: Option<&str>) -> Result<Page<IdentityCenterInstance>> {
        self.calls.set(self.calls.get() + 1);
        Ok(serve(&self.pages, next_token))
    }
}

#[derive(Default)]
pub struct FakeDirectory {
    pub pages: Vec<Vec<DirectoryUser>>,
    pub calls: Cell<usize>,
    pub seen_store: RefCell<Option<String>>,
}

impl FakeDirectory {
    pub fn paged(pages: Vec<Vec<DirectoryUser>>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }
}

impl Directory for FakeDirectory {
    fn list_users(
        &self,
        identity_store_id: &str,
        next_token: Option<&str>,
    ) -> Result<Page<DirectoryUser>> {
        self.calls.set(self.calls.get() + 1);
        *self.seen_store.borrow_mut() = Some(identity_store_id.to_string());
        Ok(serve(&self.pages, next_token))
    }
}

/// Event history keyed by user name. Users absent from the map have no events.
#[derive(Default)]
pub struct FakeHistory {
    pub pages: HashMap<String, Vec<Vec<ActivityEvent>>>,
    pub page_sizes: RefCell<Vec<i32>>,
    pub queried: RefCell<Vec<String>>,
    pub fail_for: Option<String>,
}

impl FakeHistory {
    pub fn with(mut self, user: &str, pages: Vec<Vec<ActivityEvent>>) -> Self {
        self.pages.insert(user.to_string(), pages);
        self
    }
}

impl EventHistory for FakeHistory {
    fn lookup_events(
        &self,
        user_name: &str,
        page_size: i32,
        next_token: Option<&str>,
    ) -> Result<Page<ActivityEvent>> {
        if self.fail_for.as_deref() == Some(user_name) {
            return Err(ActivityError::AwsRequestFailed {
                service: "cloudtrail",
                operation: "LookupEvents",
                reason: "ThrottlingException".into(),
            });
        }
        self.page_sizes.borrow_mut().push(page_size);
        if next_token.is_none() {
            self.queried.borrow_mut().push(user_name.to_string());
        }
        let pages = self.pages.get(user_name).cloned().unwrap_or_default();
        Ok(serve(&pages, next_token))
    }
}

/// Captures what would have been written instead of touching the filesystem.
#[derive(Default)]
pub struct MemoryWriter {
    pub written: RefCell<Option<(PathBuf, Vec<ActivityRecord>)>>,
}

impl ReportWriter for MemoryWriter {
    fn write(&self, path: &Path, records: &[ActivityRecord]) -> Result<()> {
        *self.written.borrow_mut() = Some((path.to_path_buf(), records.to_vec()));
        Ok(())
    }
}
