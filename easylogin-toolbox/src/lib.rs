//! EasyLogin directory toolbox.
//!
//! [`Toolbox`] is what the directory-protocol host talks to. It bundles the
//! immutable schema mapping table with a configured credential validator and
//! exposes the request-level operations:
//!
//! - native record → standard record translation
//! - standard → native attribute resolution
//! - standard ↔ native predicate translation
//! - password validation against stored authentication methods
//! - one-line diagnostics for predicates and directory values
//!
//! A toolbox is `Send + Sync` and holds no mutable state, so one instance
//! serves every request thread. [`Toolbox::shared`] returns the process-wide
//! instance, built once from the compiled-in table.

mod config;
mod error;
mod toolbox;

pub use config::ToolboxConfig;
pub use error::{ToolboxError, ToolboxResult};
pub use toolbox::{AUTH_METHODS_ATTRIBUTE, Toolbox};

pub use easylogin_auth::{AuthMethodBag, AuthScheme, StoredSecret, ValidatorConfig};
pub use easylogin_predicate::{NativePredicate, StandardPredicate, UnsupportedPredicateError};
pub use easylogin_schema::SchemaMappingTable;
pub use easylogin_types::{AttributeBag, Describe, DirectoryValue, NativeAttributeId};
