pub mod cloudtrail;
pub mod identity_store;
pub mod session;
pub mod sso_admin;
