//! Search predicate translation.
//!
//! The directory layer expresses searches as [`StandardPredicate`] trees
//! (match type + equality rule per leaf, `and`/`or`/`not` above them). The
//! EasyLogin backend has its own vocabulary, [`NativePredicate`]. This crate
//! converts between the two through one fixed leaf table:
//! - every supported `(match type, equality rule)` pair has exactly one
//!   native `(operator, collation)` pair and vice versa
//! - anything else is an [`UnsupportedPredicateError`], never a guess
//! - subpredicate order is preserved in both directions
//!
//! Both models render to one-line diagnostics through
//! [`easylogin_types::Describe`].

mod describe;
mod error;
mod predicate;
mod table;
mod translate;
mod vocab;

pub use describe::describe_predicate;
pub use error::{PredicateResult, UnsupportedPredicateError};
pub use predicate::{NativePredicate, StandardPredicate};
pub use table::{native_leaf_for, standard_leaf_for};
pub use translate::{NATIVE_WILDCARD_ATTRIBUTE, PredicateTranslator};
pub use vocab::{
    CompoundOperator, NativeCollation, NativeJunction, NativeOperator, StandardEqualityRule,
    StandardMatchType,
};
