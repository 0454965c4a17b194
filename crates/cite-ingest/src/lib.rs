//! Ingestion for citation and metadata tables: CSV reading, report loading,
//! row parsing and composite item extraction.

pub mod csv_table;
pub mod extract;
pub mod parse;
pub mod report;

pub use csv_table::{RawTable, read_raw_table, read_raw_table_from_reader};
pub use extract::{SchemeMatcher, extract, item_name};
pub use parse::{RawRow, parse_citations_row, parse_metadata_row, parse_row, parse_rows};
pub use report::{load_report, parse_report};
