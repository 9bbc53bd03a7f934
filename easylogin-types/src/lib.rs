//! Core type definitions for the EasyLogin directory toolbox.
//!
//! This crate defines the schema-agnostic types shared by every toolbox
//! component:
//! - Attribute and record-type identifiers for both the standard and the
//!   native vocabularies
//! - [`DirectoryValue`], the closed set of value shapes a directory record holds
//! - [`AttributeBag`], a record's attribute/value mapping
//! - The diagnostic formatter ([`Describe`], [`describe_object`])
//!
//! Nothing here knows about a particular backend; mapping tables live in
//! `easylogin-schema`.

mod bag;
mod describe;
mod ids;
mod value;

pub use bag::AttributeBag;
pub use describe::{Describe, describe_debug, describe_object, write_escaped};
pub use ids::{NativeAttributeId, NativeTypeId, StandardAttributeId};
pub use value::DirectoryValue;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building values from external data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unsupported JSON value at {path}: {kind}")]
    UnsupportedJson { path: String, kind: &'static str },

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}
