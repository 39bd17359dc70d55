use crate::core::errors::{ActivityError, Result};
use crate::core::models::directory_user::DirectoryUser;
use crate::core::services::pagination::Paginated;
use crate::core::traits::directory::Directory;

/// Lists users of an identity store.
pub struct UserEnumerator<'a> {
    directory: &'a dyn Directory,
}

impl<'a> UserEnumerator<'a> {
    pub fn new(directory: &'a dyn Directory) -> Self {
        Self { directory }
    }

    /// Lazily enumerate every user in the order the directory returns them.
    pub fn list_all(
        &self,
        identity_store_id: &str,
    ) -> impl Iterator<Item = Result<DirectoryUser>> + use<'a> {
        let directory = self.directory;
        let store = identity_store_id.to_string();
        Paginated::new(move |token| directory.list_users(&store, token))
    }

    /// Find a user by exact, case-sensitive user name.
    ///
    /// Enumeration stops at the first match; later pages are never fetched.
    pub fn find_by_name(&self, identity_store_id: &str, name: &str) -> Result<DirectoryUser> {
        for user in self.list_all(identity_store_id) {
            let user = user?;
            if user.user_name == name {
                return Ok(user);
            }
        }
        Err(ActivityError::UserNotFound {
            name: name.to_string(),
        })
    }
}
