//! Reads and rewrites the monitored-urls file
//!
//! One record per line, either `url` alone or `url<TAB>hash`. Record order is
//! preserved across a read-modify-write cycle and duplicates are never
//! deduplicated.

use crate::models::{ParsedLine, Target};
use crate::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Result of reading the state file: the targets that parsed plus the raw
/// lines that did not
#[derive(Debug, Default)]
pub struct ParsedState {
    pub targets: Vec<Target>,
    pub unparsed: Vec<String>,
}

/// Read and parse the state file. Unparsable lines are collected, never
/// fatal; a missing or unreadable file is.
pub fn read_state(path: &Path) -> Result<ParsedState> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file {}", path.display()))?;
    Ok(parse_state(&content))
}

/// Parse state-file content, one record per line, preserving input order.
/// Unparsable lines are echoed to the terminal as they are found.
pub fn parse_state(content: &str) -> ParsedState {
    let mut state = ParsedState::default();

    for line in content.lines() {
        match ParsedLine::from_line(line) {
            Some(ParsedLine::Target(target)) => state.targets.push(target),
            Some(ParsedLine::Unparsed(raw)) => {
                eprintln!("{}", format!("Could not parse line: {:?}", raw).yellow());
                state.unparsed.push(raw);
            }
            None => {}
        }
    }

    state
}

/// Rewrite the state file in full, one line per target in input order.
/// Targets dropped from the list before this step are removed for good.
pub fn write_state(path: &Path, targets: &[Target]) -> Result<()> {
    let mut out = String::new();

    for target in targets {
        match &target.fingerprint {
            Some(fingerprint) => {
                out.push_str(&format!("{}\t{}\n", target.identifier, fingerprint));
            }
            None => {
                out.push_str(&target.identifier);
                out.push('\n');
            }
        }
    }

    fs::write(path, out)
        .with_context(|| format!("Failed to write state file {}", path.display()))
}
