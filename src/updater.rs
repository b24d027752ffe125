//! Fingerprint updater - recomputes content hashes and diffs them against the
//! previous run

use crate::fetch::Fetcher;
use crate::models::Target;
use colored::Colorize;
use sha2::{Digest, Sha256};

/// Identifiers touched by one updater pass
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Targets whose content hash changed, or was computed for the first time
    pub updated: Vec<String>,

    /// Targets whose fetch failed; their previous fingerprint is kept
    pub errors: Vec<String>,
}

/// Hex-encoded SHA-256 over the UTF-8 bytes of a target's content
pub fn fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Fetch every target in list order and replace stale fingerprints in place.
///
/// A failed fetch is recorded and never aborts the pass; the target keeps
/// whatever fingerprint it had, including none at all. Each identifier ends up
/// in at most one of `updated` and `errors`.
pub fn refresh(targets: &mut [Target], fetcher: &dyn Fetcher) -> UpdateOutcome {
    let mut outcome = UpdateOutcome::default();

    for target in targets.iter_mut() {
        match fetcher.fetch(&target.identifier) {
            Ok(body) => {
                let new = fingerprint(&body);
                if target.fingerprint.as_deref() != Some(new.as_str()) {
                    target.fingerprint = Some(new);
                    outcome.updated.push(target.identifier.clone());
                }
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("Could not check {}: {}", target.identifier, e).yellow()
                );
                outcome.errors.push(target.identifier.clone());
            }
        }
    }

    outcome
}
