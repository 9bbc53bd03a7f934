//! The leaf translation table.
//!
//! Both functions are exhaustive matches over the full vocabulary, so a new
//! match type, rule, operator or collation does not compile until it has
//! been classified. The two directions are inverses on every supported pair.

use crate::vocab::{
    NativeCollation, NativeOperator, StandardEqualityRule, StandardMatchType,
};

/// Native equivalent of a standard leaf, or `None` when the backend cannot
/// evaluate it with the same semantics.
pub const fn native_leaf_for(
    match_type: StandardMatchType,
    rule: StandardEqualityRule,
) -> Option<(NativeOperator, NativeCollation)> {
    use NativeCollation as C;
    use StandardEqualityRule as R;
    use StandardMatchType as M;

    let operator = match match_type {
        M::Any => NativeOperator::All,
        M::EqualTo => NativeOperator::Equals,
        M::BeginsWith => NativeOperator::StartsWith,
        M::EndsWith => NativeOperator::EndsWith,
        M::Contains => NativeOperator::Contains,
        M::GreaterThan => NativeOperator::GreaterThan,
        M::LessThan => NativeOperator::LessThan,
    };

    let collation = match (match_type, rule) {
        (M::Any, R::None) => C::Exact,
        (M::Any, _) => return None,

        (_, R::None) => return None,
        (_, R::CaseExact) => C::Exact,
        (_, R::CaseIgnore) => C::CaseFold,
        // No native collation folds diacritics or compares timestamps.
        (_, R::DiacriticIgnore | R::Time) => return None,

        (M::EqualTo | M::GreaterThan | M::LessThan, R::Numeric) => C::Numeric,
        (M::BeginsWith | M::EndsWith | M::Contains, R::Numeric) => return None,

        (M::EqualTo, R::Octet) => C::Octets,
        (M::BeginsWith | M::EndsWith | M::Contains | M::GreaterThan | M::LessThan, R::Octet) => {
            return None;
        }
    };

    Some((operator, collation))
}

/// Standard equivalent of a native leaf; the inverse of [`native_leaf_for`].
pub const fn standard_leaf_for(
    operator: NativeOperator,
    collation: NativeCollation,
) -> Option<(StandardMatchType, StandardEqualityRule)> {
    use NativeCollation as C;
    use NativeOperator as O;
    use StandardEqualityRule as R;

    let match_type = match operator {
        O::All => StandardMatchType::Any,
        O::Equals => StandardMatchType::EqualTo,
        O::StartsWith => StandardMatchType::BeginsWith,
        O::EndsWith => StandardMatchType::EndsWith,
        O::Contains => StandardMatchType::Contains,
        O::GreaterThan => StandardMatchType::GreaterThan,
        O::LessThan => StandardMatchType::LessThan,
    };

    let rule = match (operator, collation) {
        (O::All, C::Exact) => R::None,
        (O::All, C::CaseFold | C::Numeric | C::Octets) => return None,

        (_, C::Exact) => R::CaseExact,
        (_, C::CaseFold) => R::CaseIgnore,

        (O::Equals | O::GreaterThan | O::LessThan, C::Numeric) => R::Numeric,
        (O::StartsWith | O::EndsWith | O::Contains, C::Numeric) => return None,

        (O::Equals, C::Octets) => R::Octet,
        (O::StartsWith | O::EndsWith | O::Contains | O::GreaterThan | O::LessThan, C::Octets) => {
            return None;
        }
    };

    Some((match_type, rule))
}
