//! One check cycle: read state, refresh fingerprints, report, persist

use crate::config::WatchConfig;
use crate::fetch::Fetcher;
use crate::report::{self, Notifier, RunReport};
use crate::state;
use crate::updater;
use crate::Result;

/// Run a single check cycle with the given collaborators.
///
/// Per-target and per-line failures are absorbed into the run report; only an
/// unreadable or unwritable state/log file aborts the run. State is written
/// last, so a crash earlier in the cycle leaves the previous run's file
/// untouched.
pub fn run_check(
    config: &WatchConfig,
    fetcher: &dyn Fetcher,
    notifier: &dyn Notifier,
) -> Result<RunReport> {
    let parsed = state::read_state(&config.state_path)?;
    let mut targets = parsed.targets;

    let outcome = updater::refresh(&mut targets, fetcher);

    let run_report = RunReport {
        checked: targets.iter().map(|t| t.identifier.clone()).collect(),
        updated: outcome.updated,
        unparsed: parsed.unparsed,
        errors: outcome.errors,
    };

    report::notify_and_log(&run_report, &config.log_path, notifier)?;

    state::write_state(&config.state_path, &targets)?;

    Ok(run_report)
}
