pub mod activity_lookup;
pub mod activity_report;
pub mod directory_resolver;
pub mod pagination;
pub mod user_enumerator;

#[cfg(test)]
pub mod test_support;
