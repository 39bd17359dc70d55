use std::io::{self, Stdout, Write};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::cli::output;
use crate::core::models::activity_record::ActivityRecord;
use crate::core::services::activity_report::ReportProgress;

/// Prints per-user results as they arrive, with a progress bar when
/// several users are checked.
///
/// Status lines always go to `out` (stdout in the binary). The bar draws on
/// stderr and is suspended while a line is written, so the lines survive
/// when stderr is not a terminal and the bar hides itself.
pub struct ConsoleProgress<W: Write = Stdout> {
    quiet: bool,
    out: W,
    show_bar: bool,
    bar: Option<ProgressBar>,
}

impl ConsoleProgress<Stdout> {
    pub fn new(quiet: bool) -> Self {
        Self::with_output(quiet, io::stdout(), true)
    }
}

impl<W: Write> ConsoleProgress<W> {
    /// Write status lines to `out`. With `show_bar` false the bar is never drawn.
    pub fn with_output(quiet: bool, out: W, show_bar: bool) -> Self {
        Self {
            quiet,
            out,
            show_bar,
            bar: None,
        }
    }

    /// Remove the progress bar, if any.
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn line(&mut self, msg: &str) {
        let out = &mut self.out;
        let _ = match &self.bar {
            Some(bar) => bar.suspend(|| writeln!(out, "{msg}")),
            None => writeln!(out, "{msg}"),
        };
    }
}

impl<W: Write> ReportProgress for ConsoleProgress<W> {
    fn identity_store_resolved(&mut self, identity_store_id: &str) {
        if !self.quiet {
            let msg = format!("  Identity store id: {}", identity_store_id.cyan());
            self.line(&msg);
        }
    }

    fn targets_selected(&mut self, count: usize) {
        if self.quiet || count < 2 {
            return;
        }
        let target = if self.show_bar {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let bar = ProgressBar::with_draw_target(Some(count as u64), target);
        if let Ok(style) = ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} users") {
            bar.set_style(style.progress_chars("█░ "));
        }
        self.bar = Some(bar);
    }

    fn record_ready(&mut self, record: &ActivityRecord) {
        if !self.quiet {
            self.line(&output::user_status(record));
        }
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }
}

impl<W: Write> Drop for ConsoleProgress<W> {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn record(user: &str, last_seen: Option<&str>) -> ActivityRecord {
        ActivityRecord {
            user_name: user.to_string(),
            display_name: user.to_uppercase(),
            last_seen: last_seen.map(|s| DateTime::parse_from_rfc3339(s).unwrap()),
        }
    }

    fn run(quiet: bool, records: &[ActivityRecord]) -> String {
        let mut buf = Vec::new();
        {
            let mut progress = ConsoleProgress::with_output(quiet, &mut buf, false);
            progress.identity_store_resolved("d-1234567890");
            progress.targets_selected(records.len());
            for r in records {
                progress.record_ready(r);
            }
            progress.finish();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn every_user_line_printed_when_bar_is_hidden() {
        let text = run(
            false,
            &[
                record("alice", Some("2024-03-01T12:00:00Z")),
                record("bob", None),
            ],
        );
        assert!(text.contains("d-1234567890"));
        assert!(text.contains("User alice: 2024-03-01T12:00:00+00:00"));
        assert!(text.contains("User bob: "));
        assert!(text.contains("Never seen"));
    }

    #[test]
    fn single_user_line_printed_without_bar() {
        let text = run(false, &[record("carol", None)]);
        assert!(text.contains("User carol: "));
    }

    #[test]
    fn lines_keep_enumeration_order() {
        let text = run(false, &[record("bob", None), record("alice", None)]);
        let bob = text.find("User bob").unwrap();
        let alice = text.find("User alice").unwrap();
        assert!(bob < alice);
    }

    #[test]
    fn quiet_prints_nothing() {
        let text = run(true, &[record("alice", None), record("bob", None)]);
        assert!(text.is_empty());
    }
}
