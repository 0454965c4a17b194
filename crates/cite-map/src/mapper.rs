//! Error mapping: resolve report coordinates against row models.
//!
//! Report entries are processed in order; the position of an entry in the
//! report is its ordinal and fixes its id (`meta-0`, `cits-3`, ...). Every
//! entry gets a catalog record with its own color, and its id is attached to
//! each item addressed by `position.table`. A `null` item selector stands for
//! the whole field and resolves to item 0, which is the sentinel when the
//! field is empty.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use cite_model::{ErrorLevel, ErrorObject, TableType, item_separators};

use crate::{ColorAllocator, ErrorId, MappingError, RowItemModel};

const WHOLE_FIELD: [i64; 1] = [0];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub message: String,
    pub label: String,
    pub level: ErrorLevel,
    pub color: String,
}

/// Error id to catalog entry, iterated in report order.
pub type ErrorCatalog = BTreeMap<ErrorId, CatalogEntry>;

/// Enriched rows plus the error catalog, ready for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedTable {
    pub table_type: TableType,
    pub item_separators: BTreeMap<&'static str, &'static str>,
    pub rows: Vec<RowItemModel>,
    pub errors: ErrorCatalog,
}

impl AnnotatedTable {
    /// True when the report had no entries.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.count_level(ErrorLevel::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_level(ErrorLevel::Warning)
    }

    fn count_level(&self, level: ErrorLevel) -> usize {
        self.errors
            .values()
            .filter(|entry| entry.level == level)
            .count()
    }

    pub fn rows_with_issues(&self) -> usize {
        self.rows.iter().filter(|row| row.contains_issue()).count()
    }

    /// Indexes of the rows that carry `error_id` on at least one item.
    pub fn affected_rows(&self, error_id: ErrorId) -> BTreeSet<usize> {
        self.rows
            .iter()
            .filter(|row| row.items().any(|item| item.issues().contains(&error_id)))
            .map(RowItemModel::row_index)
            .collect()
    }
}

/// Enrich `models` with the entries of `report`.
///
/// Takes ownership of the models for the duration of the pass. Any coordinate
/// that does not resolve aborts the pass with a [`MappingError`].
pub fn map_errors<R: Rng>(
    mut models: Vec<RowItemModel>,
    table_type: TableType,
    report: &[ErrorObject],
    allocator: &mut ColorAllocator<R>,
) -> Result<AnnotatedTable, MappingError> {
    let colors = allocator.allocate(report.len());
    let mut errors = ErrorCatalog::new();

    for ((ordinal, error), color) in report.iter().enumerate().zip(colors) {
        let error_id = ErrorId::new(table_type, ordinal);
        errors.insert(
            error_id,
            CatalogEntry {
                message: error.message.clone(),
                label: error.error_label.clone(),
                level: error.error_type,
                color,
            },
        );
        let attached = enrich(&mut models, error, error_id)?;
        debug!(
            error_id = %error_id,
            label = %error.error_label,
            rows = error.position.table.len(),
            attached,
            "mapped report entry"
        );
    }

    let table = AnnotatedTable {
        table_type,
        item_separators: item_separators(table_type),
        rows: models,
        errors,
    };
    info!(
        table_type = %table_type,
        rows = table.rows.len(),
        errors = table.errors.len(),
        rows_with_issues = table.rows_with_issues(),
        "mapped validation report"
    );
    Ok(table)
}

/// Attach one report entry to every item it addresses. Returns the number of
/// newly added attachments.
fn enrich(
    models: &mut [RowItemModel],
    error: &ErrorObject,
    error_id: ErrorId,
) -> Result<usize, MappingError> {
    let row_count = models.len();
    let mut attached = 0;
    for (key, fields) in &error.position.table {
        let row_index = key
            .trim()
            .parse::<usize>()
            .map_err(|_| MappingError::InvalidRowKey {
                error_id,
                key: key.clone(),
            })?;
        let model = models
            .get_mut(row_index)
            .ok_or(MappingError::RowOutOfRange {
                error_id,
                row_index,
                row_count,
            })?;
        for (field, selector) in fields {
            let indexes = selector.as_deref().unwrap_or(&WHOLE_FIELD);
            for &item_index in indexes {
                if model.attach(field, item_index, error_id)? {
                    attached += 1;
                }
            }
        }
    }
    Ok(attached)
}
