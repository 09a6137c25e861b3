use crate::llm::LanguageModel;
use crate::types::Result;
use tracing::{debug, error};

/// Token budget for the short classification completion.
pub const CLASSIFY_MAX_TOKENS: u32 = 50;

/// Token budget for the longer summarization completion.
pub const SUMMARIZE_MAX_TOKENS: u32 = 250;

/// Both stages want deterministic, low-variability output.
const TEMPERATURE: f32 = 0.0;

/// Outcome of a relevance classification.
///
/// A failed model call is its own variant: it must never be confused with a
/// genuine label, including a model that literally answers "error".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Relevant,
    Irrelevant { label: String },
    Failed { reason: String },
}

/// Stage that asks the model whether an article matches the configured
/// topic filter.
pub struct Classifier<'a> {
    model: &'a dyn LanguageModel,
    prompt: &'a str,
}

impl<'a> Classifier<'a> {
    pub fn new(model: &'a dyn LanguageModel, prompt: &'a str) -> Self {
        Self { model, prompt }
    }

    /// Classifies article text. The relevance gate is a case-insensitive
    /// exact match against "yes"; any other label is irrelevant. A service
    /// failure is logged and surfaced as [`Verdict::Failed`].
    pub async fn classify(&self, article_text: &str) -> Verdict {
        let message = format!("Article:\n{article_text}");
        match self
            .model
            .complete(self.prompt, &message, CLASSIFY_MAX_TOKENS, TEMPERATURE)
            .await
        {
            Ok(label) if label.eq_ignore_ascii_case("yes") => Verdict::Relevant,
            Ok(label) => {
                debug!("classified as not relevant: {}", label);
                Verdict::Irrelevant { label }
            }
            Err(e) => {
                error!("classification call failed: {}", e);
                Verdict::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Stage that asks the model for a longer, possibly JSON-shaped summary.
pub struct Summarizer<'a> {
    model: &'a dyn LanguageModel,
    prompt: &'a str,
}

impl<'a> Summarizer<'a> {
    pub fn new(model: &'a dyn LanguageModel, prompt: &'a str) -> Self {
        Self { model, prompt }
    }

    pub async fn summarize(&self, article_text: &str) -> Result<String> {
        let message = format!("Article:\n{article_text}");
        self.model
            .complete(self.prompt, &message, SUMMARIZE_MAX_TOKENS, TEMPERATURE)
            .await
    }
}
