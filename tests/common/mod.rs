// Shared fixtures for the integration tests: a canned HTTP transport plus
// builders for feed documents and article pages.

use async_trait::async_trait;
use news_triage::{FetchPage, Result, TriageError};
use std::collections::HashMap;

/// Canned transport: serves one fixed feed document and a map of article
/// pages, with optional scripted HTTP failures. No test touches the network.
pub struct StubFetcher {
    feed: Vec<u8>,
    pages: HashMap<String, String>,
    failures: HashMap<String, u16>,
}

impl StubFetcher {
    pub fn new(feed: &str) -> Self {
        Self {
            feed: feed.as_bytes().to_vec(),
            pages: HashMap::new(),
            failures: HashMap::new(),
        }
    }

    pub fn with_page(mut self, url: &str, markup: &str) -> Self {
        self.pages.insert(url.to_string(), markup.to_string());
        self
    }

    pub fn with_failure(mut self, url: &str, status: u16) -> Self {
        self.failures.insert(url.to_string(), status);
        self
    }
}

#[async_trait]
impl FetchPage for StubFetcher {
    async fn fetch_feed(&self, _url: &str) -> Result<Vec<u8>> {
        Ok(self.feed.clone())
    }

    async fn fetch_article(&self, url: &str) -> Result<String> {
        if let Some(&status) = self.failures.get(url) {
            return Err(TriageError::Status {
                status,
                url: url.to_string(),
            });
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| TriageError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}

/// Builds a minimal RSS 2.0 document from (title, link) pairs.
pub fn rss_feed(items: &[(&str, &str)]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <rss version=\"2.0\"><channel>\
         <title>Test Feed</title>\
         <link>https://news.example.com</link>\
         <description>Fixture feed</description>",
    );
    for (title, link) in items {
        xml.push_str(&format!(
            "<item><title>{title}</title><link>{link}</link></item>"
        ));
    }
    xml.push_str("</channel></rss>");
    xml
}

/// Builds an article page whose body sits in the container the extractor
/// looks for.
pub fn story_page(body: &str) -> String {
    format!(
        "<html><body><header>Site Header</header>\
         <bsp-story-page><p>{body}</p></bsp-story-page>\
         </body></html>"
    )
}
