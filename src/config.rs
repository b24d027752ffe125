//! Run configuration - file locations and fetch tuning

use std::path::PathBuf;
use std::time::Duration;

/// Default location of the monitored-urls file, relative to the working directory
pub const DEFAULT_STATE_FILE: &str = "urls.txt";

/// Default location of the error log, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "errors.txt";

/// Default per-request timeout in seconds. Bounds worst-case run time when a
/// target hangs; tunable, not part of the file-format contract.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Configuration for one check cycle, built in `main` and passed down the pipeline
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// File holding the monitored urls and their last-seen hashes
    pub state_path: PathBuf,

    /// Append-only error log
    pub log_path: PathBuf,

    /// Per-request timeout for the HTTP client
    pub fetch_timeout: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_FILE),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}
