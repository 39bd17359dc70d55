use std::path::Path;

use colored::Colorize;

use crate::core::models::activity_record::ActivityRecord;

/// Print a success message.
pub fn success(msg: &str) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    println!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message on stderr.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print the banner naming which users a run covers.
pub fn run_banner(user: Option<&str>) {
    let title = match user {
        Some(name) => format!("🔎 Checking user: {name}"),
        None => "📋 Checking all users...".to_string(),
    };
    println!("\n{}", title.bold());
}

/// Status line for one finished user, e.g. `✓ User alice: 2024-03-01T12:00:00+00:00`.
pub fn user_status(record: &ActivityRecord) -> String {
    let seen = match record.last_seen {
        Some(_) => record.last_seen_display(),
        None => "Never seen".dimmed().to_string(),
    };
    format!("  {} User {}: {}", "✓".green(), record.user_name, seen)
}

/// Closing lines after the report has been written.
pub fn report_saved(users: usize, never_seen: usize, identity_store_id: &str, path: &Path) {
    if never_seen > 0 {
        warning(&format!("{never_seen} of {users} users never seen"));
    }
    success(&format!("{users} users checked in {}", identity_store_id.cyan()));
    success(&format!("Done! CSV saved to {}", path.display()));
}

/// Report a `--user` that does not exist in the identity store.
pub fn user_not_found(name: &str) {
    error(&format!("User {name} not found in Identity Center."));
}
