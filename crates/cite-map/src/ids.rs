#![deny(unsafe_code)]

use std::fmt;

use cite_model::TableType;

/// Suffix of the sentinel item that stands for an empty field.
pub const EMPTY_ITEM_SUFFIX: &str = "empty";

/// Identifier of one report entry: `"{table_type}-{ordinal}"`.
///
/// Orders by ordinal within a table type, so catalogs iterate in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorId {
    table_type: TableType,
    ordinal: usize,
}

impl ErrorId {
    pub fn new(table_type: TableType, ordinal: usize) -> Self {
        Self {
            table_type,
            ordinal,
        }
    }

    pub fn table_type(&self) -> TableType {
        self.table_type
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.table_type, self.ordinal)
    }
}

impl serde::Serialize for ErrorId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn item_id(row_index: usize, field: &str, item_index: usize) -> String {
    format!("{row_index}-{field}-{item_index}")
}

pub fn empty_item_id(row_index: usize, field: &str) -> String {
    format!("{row_index}-{field}-{EMPTY_ITEM_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_error_and_item_ids() {
        assert_eq!(ErrorId::new(TableType::Meta, 0).to_string(), "meta-0");
        assert_eq!(ErrorId::new(TableType::Cits, 12).to_string(), "cits-12");
        assert_eq!(item_id(4, "id", 1), "4-id-1");
        assert_eq!(empty_item_id(4, "title"), "4-title-empty");
    }

    #[test]
    fn orders_numerically() {
        let mut ids = vec![
            ErrorId::new(TableType::Meta, 10),
            ErrorId::new(TableType::Meta, 2),
        ];
        ids.sort();
        assert_eq!(ids[0].ordinal(), 2);
    }
}
