/// A user record from the Identity Center identity store.
///
/// Fields are copied verbatim from the directory service. A record only
/// lives for the duration of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryUser {
    pub user_name: String,
    pub display_name: String,
    pub user_id: String,
}
