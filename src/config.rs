use crate::types::{Result, TriageError};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Prompt used when the prompts file does not define a relevance classifier.
pub const DEFAULT_CLASSIFIER_PROMPT: &str = "Is this article absolutely relevant?";

/// Prompt used when the prompts file does not define a summarization prompt.
pub const DEFAULT_SUMMARY_PROMPT: &str = "Summarize the article in a few sentences.";

/// Runtime configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub prompts_file: PathBuf,
    pub api_key: String,
    /// Upper bound on feed entries processed per run.
    pub max_articles: usize,
    pub output_file: PathBuf,
    pub http_timeout: Duration,
    pub llm_model: String,
    pub llm_base_url: String,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// `RSS_FEED_URL` and `OPENAI_API_KEY` are required; everything else
    /// falls back to a documented default.
    pub fn from_env() -> Result<Self> {
        let feed_url = required_var("RSS_FEED_URL")?;
        validate_feed_url(&feed_url)?;

        let api_key = required_var("OPENAI_API_KEY")?;

        let prompts_file = env::var("PROMPTS_FILE")
            .unwrap_or_else(|_| "prompts.json".to_string())
            .into();

        let max_articles = parsed_var("MAX_ARTICLES", 5)?;
        let timeout_seconds: u64 = parsed_var("HTTP_TIMEOUT_SECS", 30)?;

        let output_file = env::var("OUTPUT_FILE")
            .unwrap_or_else(|_| "output.json".to_string())
            .into();

        let llm_model = env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let llm_base_url = env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        Ok(Self {
            feed_url,
            prompts_file,
            api_key,
            max_articles,
            output_file,
            http_timeout: Duration::from_secs(timeout_seconds),
            llm_model,
            llm_base_url,
        })
    }
}

fn required_var(key: &str) -> Result<String> {
    env::var(key).map_err(|_| TriageError::Config(format!("{key} environment variable not set")))
}

fn parsed_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| TriageError::Config(format!("{key} is not a valid value: {raw}"))),
        Err(_) => Ok(default),
    }
}

fn validate_feed_url(feed_url: &str) -> Result<()> {
    let url = Url::parse(feed_url)
        .map_err(|e| TriageError::Config(format!("invalid RSS_FEED_URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(TriageError::Config(format!(
            "RSS_FEED_URL must be http or https, got {other}"
        ))),
    }
}

/// Named prompts grouped by category, loaded once from a JSON file and
/// treated as read-only for the process lifetime.
///
/// The file maps category names (`"relevance_classifiers"`,
/// `"summarization"`) to named prompt texts.
#[derive(Debug, Clone, Default)]
pub struct PromptLibrary {
    categories: HashMap<String, HashMap<String, String>>,
}

impl PromptLibrary {
    pub fn new(categories: HashMap<String, HashMap<String, String>>) -> Self {
        Self { categories }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            TriageError::Config(format!("cannot read prompts file {}: {e}", path.display()))
        })?;
        let categories = serde_json::from_str(&contents).map_err(|e| {
            TriageError::Config(format!("invalid prompts file {}: {e}", path.display()))
        })?;
        debug!("loaded prompts from {}", path.display());
        Ok(Self { categories })
    }

    /// Looks up a prompt by category and name, falling back to `default`
    /// when either level is missing.
    pub fn get<'a>(&'a self, category: &str, name: &str, default: &'a str) -> &'a str {
        self.categories
            .get(category)
            .and_then(|prompts| prompts.get(name))
            .map(String::as_str)
            .unwrap_or(default)
    }
}
