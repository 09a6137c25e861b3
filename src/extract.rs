use scraper::{Html, Selector};

/// Everything after this marker is boilerplate (related links, footers) and
/// is cut from the extracted text.
const BOUNDARY_MARKER: &str = "Related Stories";

/// Strategy for pulling plain article text out of page markup.
///
/// Extraction heuristics are tied to one site's markup convention, so each
/// site structure gets its own implementation; the pipeline only sees this
/// trait.
pub trait ArticleExtractor: Send + Sync {
    /// Returns the extracted body text, or an empty string when the page has
    /// no recognizable article container. Empty output is a "no content"
    /// signal, not an error.
    fn extract(&self, markup: &str) -> String;
}

/// Extractor for story pages that wrap the article body in a
/// `bsp-story-page` element.
pub struct StoryPageExtractor {
    container: Selector,
}

impl StoryPageExtractor {
    pub fn new() -> Self {
        Self {
            container: Selector::parse("bsp-story-page").unwrap(),
        }
    }
}

impl Default for StoryPageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleExtractor for StoryPageExtractor {
    fn extract(&self, markup: &str) -> String {
        let document = Html::parse_document(markup);

        let container = match document.select(&self.container).next() {
            Some(container) => container,
            None => return String::new(),
        };

        let text = container.text().collect::<Vec<_>>().join(" ");
        let body = text.split(BOUNDARY_MARKER).next().unwrap_or_default();
        collapse_whitespace(body)
    }
}

/// Collapses line breaks and runs of whitespace into single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
