use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One syndicated item (title + link) from the source feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
}

/// A relevant article together with its best-effort structured summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResult {
    pub title: String,
    pub link: String,
    pub summary: serde_json::Value,
}

/// Final output of a triage run, written to disk exactly once.
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub articles: Vec<ArticleResult>,
    pub skipped_irrelevant: u32,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} fetching {url}")]
    Status { status: u16, url: String },

    #[error("feed parse error: {0}")]
    FeedParse(String),

    #[error("language model error: {0}")]
    Llm(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;
