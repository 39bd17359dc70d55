use crate::core::errors::Result;
use crate::core::models::directory_user::DirectoryUser;
use crate::core::models::instance::IdentityCenterInstance;
use crate::core::models::page::Page;

/// Port for the Identity Center management API.
pub trait DirectoryAdmin {
    /// Fetch one page of provisioned instances.
    fn list_instances(&self, next_token: Option<&str>) -> Result<Page<IdentityCenterInstance>>;
}

/// Port for the identity store holding user records.
pub trait Directory {
    /// Fetch one page of users from the given identity store.
    fn list_users(
        &self,
        identity_store_id: &str,
        next_token: Option<&str>,
    ) -> Result<Page<DirectoryUser>>;
}
