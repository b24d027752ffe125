//! Change reporter - desktop notifications plus the append-only error log

use crate::{Context, Result};
use chrono::Local;
use colored::Colorize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::process::Command;

const UPDATE_TITLE: &str = "Website Update Report";
const UPDATE_HEADING: &str = "The following urls have been updated:";
const CHECKED_HEADING: &str = "The following urls were checked for updates:";
const UNPARSED_HEADING: &str = "The following lines could not be parsed:";
const ERRORS_HEADING: &str = "Checking the following urls resulted in error:";
const ERROR_TITLE: &str = "Errors when checking website updates";
const SEPARATOR: &str = "-------------------";

/// Everything one run observed, grouped for reporting
#[derive(Debug, Default)]
pub struct RunReport {
    /// All identifiers that were checked this run
    pub checked: Vec<String>,

    /// Identifiers whose content hash changed
    pub updated: Vec<String>,

    /// Raw state-file lines that could not be parsed
    pub unparsed: Vec<String>,

    /// Identifiers whose fetch failed
    pub errors: Vec<String>,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        !self.unparsed.is_empty() || !self.errors.is_empty()
    }
}

/// Desktop notification sink; failures are best-effort, fire-and-forget
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

/// Sends notifications through `notify-send`. A failure to spawn is printed
/// and otherwise ignored.
pub struct NotifySend;

impl Notifier for NotifySend {
    fn notify(&self, title: &str, body: &str) {
        if let Err(e) = Command::new("notify-send").arg(title).arg(body).status() {
            eprintln!("{}", format!("Could not send notification: {}", e).yellow());
        }
    }
}

/// Notify the operator of updates and failures, then append the run summary
/// to the error log.
///
/// At most two notifications go out: one listing updated urls, one pointing at
/// the error log when anything failed. The log append happens on every run,
/// updates or not.
pub fn notify_and_log(report: &RunReport, log_path: &Path, notifier: &dyn Notifier) -> Result<()> {
    if !report.updated.is_empty() {
        let body = format!("{}\n{}", UPDATE_HEADING, report.updated.join("\n"));
        notifier.notify(UPDATE_TITLE, &body);
    }

    if report.has_failures() {
        let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
        let body = format!(
            "Some urls could not be checked. Please see the file {} in {}.",
            log_path.display(),
            cwd.display()
        );
        notifier.notify(ERROR_TITLE, &body);
    }

    append_log(report, log_path)
}

/// Append one block for this run: timestamp, the four identifier lists, then
/// a separator line. Empty lists still render their headings so every block
/// has the same shape.
fn append_log(report: &RunReport, log_path: &Path) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open error log {}", log_path.display()))?;

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let checked = format!("{}\n{}", CHECKED_HEADING, report.checked.join("\n"));
    let updated = format!("{}\n{}", UPDATE_HEADING, report.updated.join("\n"));
    let unparsed = format!("{}\n{}", UNPARSED_HEADING, report.unparsed.join("\n"));
    let errors = format!("{}\n{}", ERRORS_HEADING, report.errors.join("\n"));

    write!(
        file,
        "{}\n\n{}\n\n{}\n\n{}\n\n{}\n{}\n",
        timestamp, checked, updated, unparsed, errors, SEPARATOR
    )
    .with_context(|| format!("Failed to append to error log {}", log_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Records every notification instead of displaying it
    #[derive(Default)]
    struct RecordingNotifier {
        sent: RefCell<Vec<(String, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, title: &str, body: &str) {
            self.sent
                .borrow_mut()
                .push((title.to_string(), body.to_string()));
        }
    }

    fn report_with(
        checked: &[&str],
        updated: &[&str],
        unparsed: &[&str],
        errors: &[&str],
    ) -> RunReport {
        let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        RunReport {
            checked: to_vec(checked),
            updated: to_vec(updated),
            unparsed: to_vec(unparsed),
            errors: to_vec(errors),
        }
    }

    #[test]
    fn test_updates_send_one_notification() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("errors.txt");
        let notifier = RecordingNotifier::default();
        let report = report_with(&["http://a.test"], &["http://a.test"], &[], &[]);

        notify_and_log(&report, &log_path, &notifier).unwrap();

        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, UPDATE_TITLE);
        assert!(sent[0].1.contains("http://a.test"));
    }

    #[test]
    fn test_failures_send_separate_notification() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("errors.txt");
        let notifier = RecordingNotifier::default();
        let report = report_with(
            &["http://a.test", "http://b.test"],
            &["http://a.test"],
            &[],
            &["http://b.test"],
        );

        notify_and_log(&report, &log_path, &notifier).unwrap();

        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].0, ERROR_TITLE);
        assert!(sent[1].1.contains("errors.txt"));
    }

    #[test]
    fn test_unparsed_only_sends_error_notification() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("errors.txt");
        let notifier = RecordingNotifier::default();
        let report = report_with(&["http://a.test"], &[], &["\t\t\textra"], &[]);

        notify_and_log(&report, &log_path, &notifier).unwrap();

        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, ERROR_TITLE);
    }

    #[test]
    fn test_quiet_run_sends_nothing_but_still_logs() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("errors.txt");
        let notifier = RecordingNotifier::default();
        let report = report_with(&["http://a.test"], &[], &[], &[]);

        notify_and_log(&report, &log_path, &notifier).unwrap();

        assert!(notifier.sent.borrow().is_empty());

        let log = fs::read_to_string(&log_path).unwrap();
        assert_eq!(log.matches(SEPARATOR).count(), 1);
        assert!(log.contains(CHECKED_HEADING));
        assert!(log.contains("http://a.test"));
        // Empty sections still render their headings
        assert!(log.contains(UPDATE_HEADING));
        assert!(log.contains(UNPARSED_HEADING));
        assert!(log.contains(ERRORS_HEADING));
    }

    #[test]
    fn test_log_appends_one_block_per_run() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("errors.txt");
        let notifier = RecordingNotifier::default();
        let report = report_with(&["http://a.test"], &[], &[], &[]);

        notify_and_log(&report, &log_path, &notifier).unwrap();
        notify_and_log(&report, &log_path, &notifier).unwrap();

        let log = fs::read_to_string(&log_path).unwrap();
        assert_eq!(log.matches(SEPARATOR).count(), 2);
    }
}
