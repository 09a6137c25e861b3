use crate::config::{PromptLibrary, DEFAULT_CLASSIFIER_PROMPT, DEFAULT_SUMMARY_PROMPT};
use crate::extract::ArticleExtractor;
use crate::llm::LanguageModel;
use crate::parser;
use crate::processing::{Classifier, Summarizer, Verdict};
use crate::report::wrap_summary;
use crate::traits::FetchPage;
use crate::types::{ArticleResult, FeedEntry, Report, Result};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Per-entry result inside a run. An entry either contributes an article,
/// counts as irrelevant, or is dropped with a logged reason; the outcomes
/// are mutually exclusive.
enum EntryOutcome {
    Recorded(ArticleResult),
    Irrelevant,
    Dropped { reason: String },
}

/// Drives the whole triage run: fetch feed, then for each entry (up to the
/// configured cap) fetch → extract → classify → summarize, strictly one
/// entry at a time.
pub struct TriagePipeline<'a> {
    fetcher: &'a dyn FetchPage,
    extractor: &'a dyn ArticleExtractor,
    classifier: Classifier<'a>,
    summarizer: Summarizer<'a>,
    max_articles: usize,
}

impl<'a> TriagePipeline<'a> {
    pub fn new(
        fetcher: &'a dyn FetchPage,
        extractor: &'a dyn ArticleExtractor,
        model: &'a dyn LanguageModel,
        prompts: &'a PromptLibrary,
        max_articles: usize,
    ) -> Self {
        let classifier = Classifier::new(
            model,
            prompts.get("relevance_classifiers", "absolute", DEFAULT_CLASSIFIER_PROMPT),
        );
        let summarizer = Summarizer::new(
            model,
            prompts.get("summarization", "detailed", DEFAULT_SUMMARY_PROMPT),
        );

        Self {
            fetcher,
            extractor,
            classifier,
            summarizer,
            max_articles,
        }
    }

    /// Runs the full pipeline against `feed_url` and returns the report.
    ///
    /// Feed fetch and parse failures abort the run; failures inside a single
    /// entry are logged and skipped so one broken link cannot abort the
    /// batch.
    pub async fn run(&self, feed_url: &str) -> Result<Report> {
        let content = self.fetcher.fetch_feed(feed_url).await?;
        let entries = parser::parse_feed(&content)?;

        let total = entries.len();
        let cap = self.max_articles.min(total);
        info!("processing {} of {} feed entries", cap, total);

        let mut articles = Vec::new();
        let mut skipped_irrelevant = 0u32;

        for (index, entry) in entries.into_iter().take(self.max_articles).enumerate() {
            info!("[{}/{}] processing: {}", index + 1, cap, entry.title);

            match self.process_entry(&entry).await {
                EntryOutcome::Recorded(result) => articles.push(result),
                EntryOutcome::Irrelevant => skipped_irrelevant += 1,
                EntryOutcome::Dropped { reason } => {
                    warn!("dropping entry {}: {}", entry.link, reason);
                }
            }
        }

        Ok(Report {
            articles,
            skipped_irrelevant,
            generated_at: Utc::now(),
        })
    }

    async fn process_entry(&self, entry: &FeedEntry) -> EntryOutcome {
        let markup = match self.fetcher.fetch_article(&entry.link).await {
            Ok(markup) => markup,
            Err(e) => {
                return EntryOutcome::Dropped {
                    reason: format!("article fetch failed: {e}"),
                }
            }
        };

        let text = self.extractor.extract(&markup);
        if text.is_empty() {
            // No recognizable article body: skip before spending model calls.
            return EntryOutcome::Dropped {
                reason: "no article content".to_string(),
            };
        }
        debug!("extracted {} bytes of article text", text.len());

        match self.classifier.classify(&text).await {
            Verdict::Relevant => {}
            Verdict::Irrelevant { .. } => return EntryOutcome::Irrelevant,
            Verdict::Failed { reason } => {
                return EntryOutcome::Dropped {
                    reason: format!("classification failed: {reason}"),
                }
            }
        }

        let raw = match self.summarizer.summarize(&text).await {
            Ok(raw) => raw,
            Err(e) => {
                return EntryOutcome::Dropped {
                    reason: format!("summarization failed: {e}"),
                }
            }
        };

        EntryOutcome::Recorded(ArticleResult {
            title: entry.title.clone(),
            link: entry.link.clone(),
            summary: wrap_summary(&raw),
        })
    }
}
