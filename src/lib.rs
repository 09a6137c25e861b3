pub mod config;
pub mod extract;
pub mod fetcher;
pub mod llm;
pub mod parser;
pub mod pipeline;
pub mod processing;
pub mod report;
pub mod traits;
pub mod types;

pub use config::{Config, PromptLibrary};
pub use extract::{ArticleExtractor, StoryPageExtractor};
pub use fetcher::Fetcher;
pub use llm::{LanguageModel, MockModel, OpenAiModel};
pub use pipeline::TriagePipeline;
pub use processing::{Classifier, Summarizer, Verdict};
pub use report::{wrap_summary, write_report};
pub use traits::FetchPage;
pub use types::*;
