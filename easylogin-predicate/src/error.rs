//! Translation failures.
//!
//! Every variant means the search must be rejected as a whole; none of them
//! is ever recovered from by approximating the predicate.

use crate::vocab::{
    CompoundOperator, NativeCollation, NativeJunction, NativeOperator, StandardEqualityRule,
    StandardMatchType,
};
use thiserror::Error;

/// Result type for predicate translation.
pub type PredicateResult<T> = Result<T, UnsupportedPredicateError>;

/// A predicate the target model cannot express with the same semantics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedPredicateError {
    #[error("unsupported predicate: {match_type} with equality rule {equality_rule} has no native equivalent")]
    MatchRule {
        match_type: StandardMatchType,
        equality_rule: StandardEqualityRule,
    },

    #[error("unsupported native predicate: {operator} with collation {collation} has no standard equivalent")]
    NativeLeaf {
        operator: NativeOperator,
        collation: NativeCollation,
    },

    #[error("unsupported predicate: attribute {attribute} is not mapped for native type {native_type}")]
    UnmappedAttribute {
        native_type: String,
        attribute: String,
    },

    #[error("unsupported predicate: native type {0} has no mapping")]
    UnknownNativeType(String),

    #[error("malformed predicate: {operator} needs {expected} subpredicate(s), got {actual}")]
    CompoundArity {
        operator: CompoundOperator,
        expected: &'static str,
        actual: usize,
    },

    #[error("malformed native predicate: {junction} has no subpredicates")]
    EmptyJunction { junction: NativeJunction },

    #[error("malformed predicate: {match_type} on {attribute} has no operand")]
    MissingOperand {
        attribute: String,
        match_type: StandardMatchType,
    },
}
