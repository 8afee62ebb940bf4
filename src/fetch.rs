//! Profile page retrieval
//!
//! The matching core never touches the network itself; it asks a
//! [`DocumentSource`] for page markup.

use crate::error::{MatchError, Result};
use std::future::Future;
use std::time::Duration;

const USER_AGENT: &str = "PTCGP-Trade-Matcher/0.1";

/// Anything that can turn a profile URL into page markup
pub trait DocumentSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches profile pages over HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl DocumentSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        log::info!("Fetching profile page: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Failed to fetch page content from {}: {}", url, status);
            return Err(MatchError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
