use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use cite_model::ValidationReport;

pub fn parse_report(json: &str) -> Result<ValidationReport> {
    serde_json::from_str(json).context("parse validation report")
}

pub fn load_report(path: &Path) -> Result<ValidationReport> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read report: {}", path.display()))?;
    let report =
        parse_report(&contents).with_context(|| format!("load report: {}", path.display()))?;
    debug!(path = %path.display(), errors = report.len(), "loaded validation report");
    Ok(report)
}
