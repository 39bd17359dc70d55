pub mod activity_event;
pub mod activity_record;
pub mod directory_user;
pub mod instance;
pub mod page;
