//! Annotation pipeline: read, detect, parse, model, map, write.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use cite_ingest::{RawTable, load_report, parse_rows, read_raw_table};
use cite_map::{AnnotatedTable, ColorAllocator, map_errors, model_rows};
use cite_model::TableType;

use crate::logging::redact_value;

/// Inputs of one annotation run.
#[derive(Debug, Clone)]
pub struct AnnotateRequest {
    pub csv_path: PathBuf,
    pub report_path: PathBuf,
    /// Forces the table variant instead of detecting it from the headers.
    pub table_type: Option<TableType>,
    /// Seed for color allocation; entropy when absent.
    pub seed: Option<u64>,
}

impl AnnotateRequest {
    pub fn new(csv_path: impl Into<PathBuf>, report_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            report_path: report_path.into(),
            table_type: None,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_table_type(mut self, table_type: Option<TableType>) -> Self {
        self.table_type = table_type;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Run the whole pipeline for one table and its report.
pub fn annotate(request: &AnnotateRequest) -> Result<AnnotatedTable> {
    let span = info_span!("annotate", csv = %request.csv_path.display());
    let _guard = span.enter();

    let raw = info_span!("ingest").in_scope(|| read_raw_table(&request.csv_path))?;
    let report = load_report(&request.report_path)?;
    let table_type = resolve_table_type(&raw, request.table_type)?;
    info!(
        table_type = %table_type,
        rows = raw.rows.len(),
        report_entries = report.len(),
        "loaded inputs"
    );
    if report.is_empty() {
        info!("no errors found");
    }

    let models = info_span!("model").in_scope(|| model_rows(&parse_rows(&raw.rows, table_type)));
    let table = info_span!("map").in_scope(|| match request.seed {
        Some(seed) => map_errors(models, table_type, &report, &mut ColorAllocator::seeded(seed)),
        None => map_errors(
            models,
            table_type,
            &report,
            &mut ColorAllocator::from_entropy(),
        ),
    });
    let table = table.with_context(|| {
        format!(
            "map report {} onto {}",
            request.report_path.display(),
            request.csv_path.display()
        )
    })?;

    for row in table.rows.iter().filter(|row| row.contains_issue()) {
        for item in row.items().filter(|item| item.has_issues()) {
            trace!(
                item_id = %item.item_id,
                value = redact_value(&item.raw),
                issues = item.issues().len(),
                "flagged item"
            );
        }
    }
    Ok(table)
}

fn resolve_table_type(raw: &RawTable, explicit: Option<TableType>) -> Result<TableType> {
    if let Some(table_type) = explicit {
        debug!(table_type = %table_type, "using explicit table type");
        return Ok(table_type);
    }
    let table_type = TableType::from_headers(&raw.headers).context("detect table type")?;
    debug!(table_type = %table_type, "detected table type from headers");
    Ok(table_type)
}

/// Serialize `table` as JSON to `path`, or to stdout when `path` is `None`.
pub fn write_output(table: &AnnotatedTable, path: Option<&Path>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(table)
    } else {
        serde_json::to_string(table)
    }
    .context("serialize annotated table")?;
    match path {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("write output: {}", path.display()))?;
            debug!(path = %path.display(), bytes = json.len(), "wrote annotated table");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("write output to stdout")?;
        }
    }
    Ok(())
}
