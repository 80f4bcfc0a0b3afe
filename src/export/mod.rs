//! Export module for computed quotes
//!
//! Serializes the quote table in multiple formats, all sharing the same
//! row schema as the on-screen display:
//! - CSV: spreadsheet-compatible, one row per line item plus header
//! - JSON: machine-readable full quote with schema versioning
//! - YAML: human-readable full quote

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_quote_csv;
pub use json::{export_quote_json, import_quote_json, QuoteExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_quote_yaml, import_quote_yaml};
