//! Data model for annotating citation and metadata tables with validation
//! issues: table variants, field schemas, typed rows and report entries.

pub mod composite;
pub mod error;
pub mod fields;
pub mod report;
pub mod row;
pub mod table_type;

pub use composite::{AGENT_SCHEMES, CompositeItem, CompositeKind, VENUE_SCHEMES};
pub use error::{ModelError, Result};
pub use fields::{
    AGENT_SEPARATOR, CITATIONS_FIELDS, FieldKind, FieldSpec, ID_SEPARATOR, METADATA_FIELDS,
    item_separators,
};
pub use report::{ErrorLevel, ErrorObject, ItemSelector, Position, ValidationReport};
pub use row::{CitationsRow, FlatField, FlatRow, MetadataRow, TypedRow};
pub use table_type::TableType;
