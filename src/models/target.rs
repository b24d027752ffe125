//! A monitored target: one url plus the hash of its last-observed content

/// One watched resource from the state file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Opaque key, a url in practice; never empty
    pub identifier: String,

    /// Hex-encoded SHA-256 of the last-observed content; `None` before the
    /// first successful check
    pub fingerprint: Option<String>,
}

impl Target {
    pub fn new(identifier: impl Into<String>, fingerprint: Option<String>) -> Self {
        Self {
            identifier: identifier.into(),
            fingerprint,
        }
    }
}

/// Outcome of parsing a single state-file line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Line fit one of the two recognized shapes
    Target(Target),

    /// Line could not be parsed; carries the raw text for the error log
    Unparsed(String),
}

impl ParsedLine {
    /// Parse one line of the state file.
    ///
    /// The line is split on tabs and each field trimmed: exactly two non-empty
    /// fields give `url<TAB>hash`, anything else is read as a bare url with no
    /// prior hash. A line whose url field ends up empty cannot be parsed.
    /// Lines that are blank after trimming yield `None` and are skipped.
    pub fn from_line(line: &str) -> Option<ParsedLine> {
        if line.trim().is_empty() {
            return None;
        }

        let parts: Vec<&str> = line.split('\t').map(str::trim).collect();

        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return Some(ParsedLine::Target(Target::new(
                parts[0],
                Some(parts[1].to_string()),
            )));
        }

        let identifier = parts[0];
        if identifier.is_empty() {
            return Some(ParsedLine::Unparsed(line.to_string()));
        }

        Some(ParsedLine::Target(Target::new(identifier, None)))
    }
}
