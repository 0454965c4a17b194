//! Field schemas for the two supported table layouts.
//!
//! Each table type has a closed, ordered set of field labels. The order is the
//! order in which fields are flattened, modeled and rendered.

use std::collections::BTreeMap;

use crate::TableType;

/// Separator between the atomic values of an id-list field.
pub const ID_SEPARATOR: &str = " ";

/// Separator between the entries of an agent-list field.
pub const AGENT_SEPARATOR: &str = "; ";

/// How the raw string of a field is decomposed into items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Space-separated identifiers (`doi:10.1/x pmid:123`).
    IdList,
    /// A single plain value.
    Scalar,
    /// `; `-separated agents, each with optional bracketed identifiers.
    AgentList,
    /// A single venue with optional bracketed identifiers.
    Venue,
}

impl FieldKind {
    /// Separator used to join the items back into the displayed field value.
    pub fn separator(self) -> Option<&'static str> {
        match self {
            Self::IdList => Some(ID_SEPARATOR),
            Self::AgentList => Some(AGENT_SEPARATOR),
            Self::Scalar | Self::Venue => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::IdList => "id list",
            Self::Scalar => "scalar",
            Self::AgentList => "agent list",
            Self::Venue => "venue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { label, kind }
}

pub const METADATA_FIELDS: &[FieldSpec] = &[
    field("id", FieldKind::IdList),
    field("title", FieldKind::Scalar),
    field("author", FieldKind::AgentList),
    field("pub_date", FieldKind::Scalar),
    field("venue", FieldKind::Venue),
    field("volume", FieldKind::Scalar),
    field("issue", FieldKind::Scalar),
    field("page", FieldKind::Scalar),
    field("type", FieldKind::Scalar),
    field("publisher", FieldKind::AgentList),
    field("editor", FieldKind::AgentList),
];

pub const CITATIONS_FIELDS: &[FieldSpec] = &[
    field("citing_id", FieldKind::IdList),
    field("citing_publication_date", FieldKind::Scalar),
    field("cited_id", FieldKind::IdList),
    field("cited_publication_date", FieldKind::Scalar),
];

/// Separators the renderer needs to rebuild joined field values from items.
///
/// Only multi-item fields appear in the map.
pub fn item_separators(table_type: TableType) -> BTreeMap<&'static str, &'static str> {
    table_type
        .fields()
        .iter()
        .filter_map(|spec| spec.kind.separator().map(|sep| (spec.label, sep)))
        .collect()
}
