//! Errors raised while assembling a mapping table.

use thiserror::Error;

/// A table definition that violates the mapping invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("native type {0} is declared twice")]
    DuplicateNativeType(String),

    #[error("standard record type {standard_type} is already claimed by native type {native_type}")]
    DuplicateStandardType {
        standard_type: String,
        native_type: String,
    },

    #[error("standard attribute {attribute} is declared twice for native type {native_type}")]
    DuplicateStandardAttribute {
        native_type: String,
        attribute: String,
    },

    #[error(
        "native attribute {attribute} of {native_type} maps to both {first} and {second}"
    )]
    AmbiguousNativeAttribute {
        native_type: String,
        attribute: String,
        first: String,
        second: String,
    },

    #[error("standard attribute {attribute} of {native_type} names no native attribute")]
    EmptyMapping {
        native_type: String,
        attribute: String,
    },
}
