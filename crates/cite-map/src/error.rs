//! Errors raised while resolving report coordinates against row models.

use thiserror::Error;

use crate::ErrorId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("{error_id}: row key {key:?} is not a row index")]
    InvalidRowKey { error_id: ErrorId, key: String },
    #[error("{error_id}: row {row_index} is out of range (table has {row_count} rows)")]
    RowOutOfRange {
        error_id: ErrorId,
        row_index: usize,
        row_count: usize,
    },
    #[error("{error_id}: row {row_index} has no field {field:?}")]
    UnknownField {
        error_id: ErrorId,
        row_index: usize,
        field: String,
    },
    #[error(
        "{error_id}: item {item_index} of row {row_index} field {field:?} is out of range ({item_count} items)"
    )]
    ItemOutOfRange {
        error_id: ErrorId,
        row_index: usize,
        field: String,
        item_index: i64,
        item_count: usize,
    },
}

impl MappingError {
    pub fn error_id(&self) -> ErrorId {
        match self {
            Self::InvalidRowKey { error_id, .. }
            | Self::RowOutOfRange { error_id, .. }
            | Self::UnknownField { error_id, .. }
            | Self::ItemOutOfRange { error_id, .. } => *error_id,
        }
    }
}
