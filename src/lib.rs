// Webwatch - Website change monitor
// Checks a list of urls for content changes and notifies the operator
// through the OS notification system

pub mod config;
pub mod fetch;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod state;
pub mod updater;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use config::WatchConfig;
pub use models::{ParsedLine, Target};
pub use report::RunReport;
