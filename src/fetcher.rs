use crate::config::Config;
use crate::traits::FetchPage;
use crate::types::{Result, TriageError};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

const USER_AGENT: &str = concat!("news-triage/", env!("CARGO_PKG_VERSION"));

/// HTTP transport shared by the feed reader and the article fetcher.
///
/// Wraps a single reusable `reqwest::Client` with an explicit, bounded
/// timeout. A non-2xx status on any fetch is an error; how far that error
/// propagates is the caller's decision.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.http_timeout)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<Response> {
        debug!("fetching {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TriageError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl FetchPage for Fetcher {
    async fn fetch_feed(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self.get(url).await?.bytes().await?;
        debug!("fetched feed ({} bytes)", bytes.len());
        Ok(bytes.to_vec())
    }

    async fn fetch_article(&self, url: &str) -> Result<String> {
        let body = self.get(url).await?.text().await?;
        debug!("fetched article ({} bytes)", body.len());
        Ok(body)
    }
}
