//! Schema mapping between the directory's standard vocabulary and the
//! EasyLogin backend's native record attributes.
//!
//! - [`SchemaMappingTable`]: immutable lookup table, one [`NativeTypeMapping`]
//!   per native record type
//! - [`TableBuilder`]: assembles a table and enforces its invariants
//! - [`builtin_table`]: the compiled-in definitions for EasyLogin records
//! - Attribute translation (`standard_info_from_native_info`,
//!   `native_attribute_for`, `all_native_attributes_supported`) as methods on
//!   the table
//!
//! A missing mapping is never an error: lookups return `None` or an empty
//! collection and callers decide whether that means "omit" or "unsupported".

pub mod attrs;
mod builtin;
mod error;
mod shape;
mod table;
mod translate;

pub use builtin::{BUILTIN_TABLE_VERSION, builtin_table};
pub use error::SchemaError;
pub use shape::ValueShape;
pub use table::{MappingEntry, NativeTypeMapping, SchemaMappingTable, TableBuilder, TypeBuilder};
