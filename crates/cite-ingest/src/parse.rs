//! Row parsing: raw field-name to string rows into typed rows.
//!
//! Parsing is total. Missing or empty values degrade to empty lists or absent
//! values; checking their content is the validator's job.

use std::collections::BTreeMap;

use cite_model::{
    AGENT_SEPARATOR, CitationsRow, CompositeItem, CompositeKind, ID_SEPARATOR, MetadataRow,
    TableType, TypedRow,
};
use tracing::debug;

use crate::extract::extract;

/// A row as read from the source table, keyed by header.
pub type RawRow = BTreeMap<String, String>;

pub fn parse_row(raw: &RawRow, table_type: TableType) -> TypedRow {
    match table_type {
        TableType::Meta => TypedRow::Metadata(parse_metadata_row(raw)),
        TableType::Cits => TypedRow::Citations(parse_citations_row(raw)),
    }
}

/// Parse every row with the same, caller-chosen variant.
pub fn parse_rows(rows: &[RawRow], table_type: TableType) -> Vec<TypedRow> {
    let parsed: Vec<TypedRow> = rows.iter().map(|raw| parse_row(raw, table_type)).collect();
    debug!(table_type = %table_type, rows = parsed.len(), "parsed rows");
    parsed
}

pub fn parse_metadata_row(raw: &RawRow) -> MetadataRow {
    MetadataRow {
        id: id_list(raw.get("id")),
        title: scalar(raw.get("title")),
        author: agents(raw.get("author")),
        pub_date: scalar(raw.get("pub_date")),
        venue: venue(raw.get("venue")),
        volume: scalar(raw.get("volume")),
        issue: scalar(raw.get("issue")),
        page: scalar(raw.get("page")),
        r#type: scalar(raw.get("type")),
        publisher: agents(raw.get("publisher")),
        editor: agents(raw.get("editor")),
    }
}

pub fn parse_citations_row(raw: &RawRow) -> CitationsRow {
    CitationsRow {
        citing_id: id_list(raw.get("citing_id")),
        citing_publication_date: scalar(raw.get("citing_publication_date")),
        cited_id: id_list(raw.get("cited_id")),
        cited_publication_date: scalar(raw.get("cited_publication_date")),
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|value| !value.is_empty())
}

// Empty tokens from doubled separators are kept so item positions line up
// with the indexes in the report.
fn id_list(value: Option<&String>) -> Vec<String> {
    non_empty(value)
        .map(|value| value.split(ID_SEPARATOR).map(str::to_string).collect())
        .unwrap_or_default()
}

fn scalar(value: Option<&String>) -> Option<String> {
    non_empty(value).map(str::to_string)
}

fn agents(value: Option<&String>) -> Option<Vec<CompositeItem>> {
    non_empty(value).map(|value| {
        value
            .split(AGENT_SEPARATOR)
            .map(|item| extract(item, CompositeKind::Agent))
            .collect()
    })
}

fn venue(value: Option<&String>) -> Option<CompositeItem> {
    non_empty(value).map(|value| extract(value, CompositeKind::Venue))
}
