use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::fields::{CITATIONS_FIELDS, FieldSpec, METADATA_FIELDS};
use crate::{ModelError, Result};

/// Dataset variant. Also the namespace prefix of generated error ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableType {
    Meta,
    Cits,
}

impl TableType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Cits => "cits",
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Meta => METADATA_FIELDS,
            Self::Cits => CITATIONS_FIELDS,
        }
    }

    /// Select the variant whose field schema matches the given header row.
    ///
    /// Header order is irrelevant but the label sets must be equal; a partial
    /// or mixed header is rejected rather than guessed.
    pub fn from_headers<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let received: Vec<String> = headers
            .into_iter()
            .map(|header| header.as_ref().trim().to_string())
            .collect();
        let labels: BTreeSet<&str> = received.iter().map(String::as_str).collect();
        for table_type in [Self::Meta, Self::Cits] {
            let expected: BTreeSet<&str> =
                table_type.fields().iter().map(|spec| spec.label).collect();
            if labels == expected {
                return Ok(table_type);
            }
        }
        Err(ModelError::UnknownHeaderSchema { headers: received })
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_metadata_regardless_of_order() {
        let headers = [
            "title", "id", "author", "pub_date", "venue", "volume", "issue", "page", "type",
            "publisher", "editor",
        ];
        assert_eq!(TableType::from_headers(headers), Ok(TableType::Meta));
    }

    #[test]
    fn detects_citations() {
        let headers = [
            "citing_id",
            "citing_publication_date",
            "cited_id",
            "cited_publication_date",
        ];
        assert_eq!(TableType::from_headers(headers), Ok(TableType::Cits));
    }

    #[test]
    fn rejects_partial_schema() {
        let err = TableType::from_headers(["citing_id", "cited_id"]).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownHeaderSchema {
                headers: vec!["citing_id".to_string(), "cited_id".to_string()]
            }
        );
    }
}
