//! Turns typed rows and a validation report into renderable, annotated row
//! models: item modeling, color allocation and error mapping.

pub mod colors;
pub mod error;
pub mod ids;
pub mod mapper;
pub mod model;

pub use colors::{ColorAllocator, hsv_to_rgb};
pub use error::MappingError;
pub use ids::{EMPTY_ITEM_SUFFIX, ErrorId, empty_item_id, item_id};
pub use mapper::{AnnotatedTable, CatalogEntry, ErrorCatalog, map_errors};
pub use model::{ItemFields, ItemRecord, RowItemModel, model_row, model_rows};
