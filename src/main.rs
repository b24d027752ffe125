use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use webwatch::config::{
    WatchConfig, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_LOG_FILE, DEFAULT_STATE_FILE,
};
use webwatch::fetch::HttpFetcher;
use webwatch::report::NotifySend;
use webwatch::Result;

#[derive(Parser)]
#[command(name = "webwatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Checks monitored websites for content changes", long_about = None)]
struct Cli {
    /// File holding the monitored urls and their last-seen hashes
    #[arg(long, default_value = DEFAULT_STATE_FILE)]
    state_file: PathBuf,

    /// Append-only error log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    timeout_secs: u64,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = WatchConfig {
        state_path: cli.state_file,
        log_path: cli.log_file,
        fetch_timeout: Duration::from_secs(cli.timeout_secs),
    };

    let fetcher = HttpFetcher::new(config.fetch_timeout)?;
    let report = webwatch::pipeline::run_check(&config, &fetcher, &NotifySend)?;

    println!(
        "{}",
        format!(
            "✅ Update check concluded: {} checked, {} updated, {} failed.",
            report.checked.len(),
            report.updated.len(),
            report.errors.len() + report.unparsed.len()
        )
        .green()
    );

    Ok(())
}
