use crate::types::Result;
use async_trait::async_trait;

/// Transport for pulling the feed document and linked article pages.
///
/// The production implementation is [`crate::Fetcher`]; tests substitute a
/// canned transport so no test touches the network.
#[async_trait]
pub trait FetchPage: Send + Sync {
    /// Fetch the raw feed document.
    async fn fetch_feed(&self, url: &str) -> Result<Vec<u8>>;

    /// Fetch the raw markup of a linked article page.
    async fn fetch_article(&self, url: &str) -> Result<String>;
}
