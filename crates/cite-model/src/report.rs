//! Validation report entries as produced by the upstream validator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorLevel {
    Error,
    Warning,
}

impl ErrorLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Item indexes addressed in one field. `None` is the whole-field wildcard.
///
/// Indexes are signed so that a negative one reaches the mapper and is
/// reported with its coordinates instead of failing the whole report.
pub type ItemSelector = Option<Vec<i64>>;

/// Coordinates of an error: row key (a stringified integer) to field label to
/// item selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Position {
    pub table: BTreeMap<String, BTreeMap<String, ItemSelector>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorObject {
    pub message: String,
    pub error_label: String,
    pub error_type: ErrorLevel,
    pub position: Position,
}

pub type ValidationReport = Vec<ErrorObject>;
