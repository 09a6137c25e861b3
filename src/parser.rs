use crate::types::{FeedEntry, Result, TriageError};
use feed_rs::parser;
use tracing::{debug, warn};

/// Parses raw feed bytes into (title, link) entries in document order.
///
/// Malformed feed markup fails the whole run; an individual item missing its
/// title or link is logged and skipped so one bad entry cannot abort the
/// batch.
pub fn parse_feed(content: &[u8]) -> Result<Vec<FeedEntry>> {
    let feed = parser::parse(content).map_err(|e| TriageError::FeedParse(e.to_string()))?;

    let mut entries = Vec::new();
    for entry in feed.entries {
        let title = match entry.title {
            Some(title) => title.content,
            None => {
                warn!("skipping feed item without a title (id: {})", entry.id);
                continue;
            }
        };

        let link = match entry.links.first() {
            Some(link) => link.href.clone(),
            None => {
                warn!("skipping feed item without a link: {}", title);
                continue;
            }
        };

        entries.push(FeedEntry { title, link });
    }

    debug!("parsed {} feed entries", entries.len());
    Ok(entries)
}
