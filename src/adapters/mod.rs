pub mod aws;
pub mod report;
