//! Fetch collaborator - retrieves the current content of a monitored url

use crate::Result;
use std::time::Duration;
use thiserror::Error;

/// Failure to retrieve a target's content
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, TLS)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Retrieves the raw content of a url. The pipeline only sees this trait;
/// tests substitute an in-memory fake.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError>;
}

/// Production fetcher backed by a blocking reqwest client. Redirect following
/// and TLS are the client's concern; requests are never retried.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.text()?)
    }
}
