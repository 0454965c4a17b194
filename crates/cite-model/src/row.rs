//! Typed table rows and their flattened form.

use crate::{CompositeItem, TableType};

/// One row of a bibliographic metadata table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRow {
    pub id: Vec<String>,
    pub title: Option<String>,
    pub author: Option<Vec<CompositeItem>>,
    pub pub_date: Option<String>,
    pub venue: Option<CompositeItem>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub page: Option<String>,
    pub r#type: Option<String>,
    pub publisher: Option<Vec<CompositeItem>>,
    pub editor: Option<Vec<CompositeItem>>,
}

/// One row of a citations table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationsRow {
    pub citing_id: Vec<String>,
    pub citing_publication_date: Option<String>,
    pub cited_id: Vec<String>,
    pub cited_publication_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedRow {
    Metadata(MetadataRow),
    Citations(CitationsRow),
}

impl TypedRow {
    pub fn table_type(&self) -> TableType {
        match self {
            Self::Metadata(_) => TableType::Meta,
            Self::Citations(_) => TableType::Cits,
        }
    }

    /// Reduce every field to its ordered list of raw item strings.
    ///
    /// Fields follow the schema order of [`TableType::fields`]; absent values
    /// become empty lists.
    pub fn flatten(&self) -> FlatRow {
        let fields = match self {
            Self::Metadata(row) => vec![
                FlatField::new("id", row.id.clone()),
                FlatField::new("title", scalar(row.title.as_ref())),
                FlatField::new("author", composites(row.author.as_deref())),
                FlatField::new("pub_date", scalar(row.pub_date.as_ref())),
                FlatField::new("venue", composites(row.venue.as_slice())),
                FlatField::new("volume", scalar(row.volume.as_ref())),
                FlatField::new("issue", scalar(row.issue.as_ref())),
                FlatField::new("page", scalar(row.page.as_ref())),
                FlatField::new("type", scalar(row.r#type.as_ref())),
                FlatField::new("publisher", composites(row.publisher.as_deref())),
                FlatField::new("editor", composites(row.editor.as_deref())),
            ],
            Self::Citations(row) => vec![
                FlatField::new("citing_id", row.citing_id.clone()),
                FlatField::new(
                    "citing_publication_date",
                    scalar(row.citing_publication_date.as_ref()),
                ),
                FlatField::new("cited_id", row.cited_id.clone()),
                FlatField::new(
                    "cited_publication_date",
                    scalar(row.cited_publication_date.as_ref()),
                ),
            ],
        };
        FlatRow { fields }
    }
}

impl From<MetadataRow> for TypedRow {
    fn from(row: MetadataRow) -> Self {
        Self::Metadata(row)
    }
}

impl From<CitationsRow> for TypedRow {
    fn from(row: CitationsRow) -> Self {
        Self::Citations(row)
    }
}

fn scalar(value: Option<&String>) -> Vec<String> {
    value.into_iter().cloned().collect()
}

fn composites<'a>(items: impl Into<Option<&'a [CompositeItem]>>) -> Vec<String> {
    items
        .into()
        .unwrap_or_default()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatField {
    pub label: &'static str,
    pub values: Vec<String>,
}

impl FlatField {
    fn new(label: &'static str, values: Vec<String>) -> Self {
        Self { label, values }
    }
}

/// A row with every field reduced to raw strings, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    fields: Vec<FlatField>,
}

impl FlatRow {
    pub fn iter(&self) -> impl Iterator<Item = &FlatField> {
        self.fields.iter()
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.values.as_slice())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl IntoIterator for FlatRow {
    type Item = FlatField;
    type IntoIter = std::vec::IntoIter<FlatField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
