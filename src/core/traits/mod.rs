pub mod directory;
pub mod event_history;
pub mod report;
