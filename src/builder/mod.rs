//! Builder API for ergonomic interface table construction.
//!
//! This module provides a validating builder for interface tables, including
//! loading data properties from JSON and attaching behavior in code.

pub mod error;
pub mod table;

pub use error::BuildError;
pub use table::TableBuilder;

use crate::core::InterfaceTable;

/// Build a data-only interface table from a JSON document.
///
/// # Example
///
/// ```
/// use stateful::builder::table_from_json;
/// use stateful::core::InterfaceTable;
///
/// struct Light;
///
/// let table: InterfaceTable<Light> =
///     table_from_json(r#"{ "stop": { "color": "red" } }"#).unwrap();
/// assert!(table.contains("stop"));
/// ```
pub fn table_from_json<H>(document: &str) -> Result<InterfaceTable<H>, BuildError> {
    TableBuilder::from_json(document)?.build()
}
