use crate::types::{Report, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Best-effort structured summary: model output parsed as JSON when it is
/// valid JSON, wrapped in a single-field object otherwise. A parse failure
/// never surfaces to the caller.
pub fn wrap_summary(raw: &str) -> Value {
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => serde_json::json!({ "summary": raw }),
    }
}

/// Writes the report once, as indented UTF-8 JSON.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    info!(
        "report written to {} ({} articles, {} skipped as irrelevant)",
        path.display(),
        report.articles.len(),
        report.skipped_irrelevant
    );
    Ok(())
}
