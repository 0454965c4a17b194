//! Row item models: every field of a row broken down into addressable items.
//!
//! A model is built once per row from its flattened form. Each item carries a
//! deterministic id (`{row}-{field}-{index}`) and the list of error ids that
//! affect it. Empty fields get a single sentinel item (`{row}-{field}-empty`)
//! so that errors about the whole field still have somewhere to attach.

use serde::Serialize;
use serde::ser::SerializeMap;

use cite_model::TypedRow;

use crate::ids::{empty_item_id, item_id};
use crate::{ErrorId, MappingError};

/// One atomic value of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub raw: String,
    pub item_id: String,
    issues: Vec<ErrorId>,
}

impl ItemRecord {
    fn new(raw: impl Into<String>, item_id: String) -> Self {
        Self {
            raw: raw.into(),
            item_id,
            issues: Vec::new(),
        }
    }

    /// Error ids in the order they were attached. Never contains duplicates.
    pub fn issues(&self) -> &[ErrorId] {
        &self.issues
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Returns false when the error was already attached.
    fn attach(&mut self, error_id: ErrorId) -> bool {
        if self.issues.contains(&error_id) {
            return false;
        }
        self.issues.push(error_id);
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldItems {
    label: &'static str,
    items: Vec<ItemRecord>,
}

/// Field label to items, in schema order. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields(Vec<FieldItems>);

impl ItemFields {
    pub fn get(&self, label: &str) -> Option<&[ItemRecord]> {
        self.0
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.items.as_slice())
    }

    fn get_mut(&mut self, label: &str) -> Option<&mut Vec<ItemRecord>> {
        self.0
            .iter_mut()
            .find(|field| field.label == label)
            .map(|field| &mut field.items)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[ItemRecord])> {
        self.0
            .iter()
            .map(|field| (field.label, field.items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ItemFields {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for field in &self.0 {
            map.serialize_entry(field.label, &field.items)?;
        }
        map.end()
    }
}

/// Renderable model of one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowItemModel {
    contains_issue: bool,
    row_index: usize,
    fields: ItemFields,
}

impl RowItemModel {
    /// True once any item of the row has an issue. Never reverts.
    pub fn contains_issue(&self) -> bool {
        self.contains_issue
    }

    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn fields(&self) -> &ItemFields {
        &self.fields
    }

    pub fn field(&self, label: &str) -> Option<&[ItemRecord]> {
        self.fields.get(label)
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemRecord> {
        self.fields.iter().flat_map(|(_, items)| items.iter())
    }

    /// Attach `error_id` to one item of `field`.
    ///
    /// Returns whether the id was newly added; attaching twice is a no-op.
    /// Negative indexes are out of range.
    pub fn attach(
        &mut self,
        field: &str,
        item_index: i64,
        error_id: ErrorId,
    ) -> Result<bool, MappingError> {
        let row_index = self.row_index;
        let items = self
            .fields
            .get_mut(field)
            .ok_or_else(|| MappingError::UnknownField {
                error_id,
                row_index,
                field: field.to_string(),
            })?;
        let item_count = items.len();
        let item = usize::try_from(item_index)
            .ok()
            .and_then(|idx| items.get_mut(idx))
            .ok_or_else(|| MappingError::ItemOutOfRange {
                error_id,
                row_index,
                field: field.to_string(),
                item_index,
                item_count,
            })?;
        let added = item.attach(error_id);
        self.contains_issue = true;
        Ok(added)
    }
}

/// Build the item model of `row`, placed at `row_index` in its table.
pub fn model_row(row: &TypedRow, row_index: usize) -> RowItemModel {
    let fields = row
        .flatten()
        .into_iter()
        .map(|flat| {
            let items = if flat.values.is_empty() {
                vec![ItemRecord::new("", empty_item_id(row_index, flat.label))]
            } else {
                flat.values
                    .into_iter()
                    .enumerate()
                    .map(|(idx, raw)| ItemRecord::new(raw, item_id(row_index, flat.label, idx)))
                    .collect()
            };
            FieldItems {
                label: flat.label,
                items,
            }
        })
        .collect();
    RowItemModel {
        contains_issue: false,
        row_index,
        fields: ItemFields(fields),
    }
}

pub fn model_rows(rows: &[TypedRow]) -> Vec<RowItemModel> {
    rows.iter()
        .enumerate()
        .map(|(row_index, row)| model_row(row, row_index))
        .collect()
}
