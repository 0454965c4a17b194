use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use crate::parse::RawRow;

/// A source table read as header-keyed rows.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let file =
        std::fs::File::open(path).with_context(|| format!("read csv: {}", path.display()))?;
    let table = read_raw_table_from_reader(file)
        .with_context(|| format!("read csv: {}", path.display()))?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "read csv table"
    );
    Ok(table)
}

/// Read CSV data whose first record is the header row.
///
/// Cell values are kept verbatim. Short records are padded with empty
/// strings and cells beyond the header are dropped. Records of empty cells
/// (`,,,`) are rows like any other; only empty lines are skipped.
pub fn read_raw_table_from_reader<R: Read>(reader: R) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .context("read header row")?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read record {}", idx + 1))?;
        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(col, header)| (header.clone(), record.get(col).unwrap_or("").to_string()))
            .collect();
        rows.push(row);
    }
    Ok(RawTable { headers, rows })
}
