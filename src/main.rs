use anyhow::Context;
use news_triage::{
    Config, Fetcher, OpenAiModel, PromptLibrary, StoryPageExtractor, TriagePipeline,
};
use news_triage::report::write_report;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("starting news triage run");

    let config = Config::from_env().context("loading configuration")?;
    let prompts = PromptLibrary::load(&config.prompts_file)
        .with_context(|| format!("loading prompts from {}", config.prompts_file.display()))?;

    let fetcher = Fetcher::new(&config).context("building HTTP client")?;
    let model = OpenAiModel::new(&config).context("building language model client")?;
    let extractor = StoryPageExtractor::new();

    let pipeline = TriagePipeline::new(
        &fetcher,
        &extractor,
        &model,
        &prompts,
        config.max_articles,
    );

    let report = pipeline
        .run(&config.feed_url)
        .await
        .context("triage run failed")?;

    write_report(&report, &config.output_file).context("writing report")?;

    info!(
        "processing complete: {} articles, {} skipped as irrelevant",
        report.articles.len(),
        report.skipped_irrelevant
    );
    Ok(())
}
