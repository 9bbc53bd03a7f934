//! Recursive translation between the two predicate models.

use crate::error::{PredicateResult, UnsupportedPredicateError};
use crate::predicate::{NativePredicate, StandardPredicate};
use crate::table::{native_leaf_for, standard_leaf_for};
use crate::vocab::{CompoundOperator, NativeJunction, StandardMatchType};
use easylogin_schema::{NativeTypeMapping, SchemaMappingTable, attrs::ALL_ATTRIBUTES};
use easylogin_types::{Describe, DirectoryValue, NativeAttributeId, NativeTypeId};
use tracing::{Level, debug, enabled, trace};

/// Native attribute name standing for "any attribute" in free-text searches.
pub const NATIVE_WILDCARD_ATTRIBUTE: &str = "*";

/// Translates predicates for one native record type.
///
/// A leaf's attribute is resolved to its highest-precedence native
/// attribute. Operands on single-valued attributes are shape-normalized;
/// free-text operands (on [`ALL_ATTRIBUTES`]) pass through untouched.
#[derive(Debug, Clone, Copy)]
pub struct PredicateTranslator<'a> {
    mapping: &'a NativeTypeMapping,
}

impl<'a> PredicateTranslator<'a> {
    /// Fails when the table has no mapping for `native_type`.
    pub fn new(table: &'a SchemaMappingTable, native_type: &str) -> PredicateResult<Self> {
        let mapping = table
            .native_type(native_type)
            .ok_or_else(|| UnsupportedPredicateError::UnknownNativeType(native_type.to_string()))?;
        Ok(Self { mapping })
    }

    pub fn native_type(&self) -> &NativeTypeId {
        self.mapping.native_type()
    }

    /// Standard → native. Subpredicate order is preserved.
    pub fn to_native(&self, predicate: StandardPredicate) -> PredicateResult<NativePredicate> {
        // The input is consumed, so render it up front only if it can be logged.
        let description = enabled!(Level::DEBUG).then(|| predicate.describe());
        let translated = self.standard_to_native(predicate);
        if let Some(description) = description {
            match &translated {
                Ok(native) => trace!(
                    native_type = %self.native_type(),
                    from = %description,
                    to = %native.describe(),
                    "Translated predicate"
                ),
                Err(e) => debug!(
                    native_type = %self.native_type(),
                    predicate = %description,
                    error = %e,
                    "Rejected predicate"
                ),
            }
        }
        translated
    }

    /// Translates a list of predicates; the first failure rejects them all.
    pub fn to_native_all(
        &self,
        predicates: Vec<StandardPredicate>,
    ) -> PredicateResult<Vec<NativePredicate>> {
        predicates.into_iter().map(|p| self.to_native(p)).collect()
    }

    /// Native → standard. `none_of` with several children becomes
    /// `not(or(...))`.
    pub fn to_standard(&self, predicate: NativePredicate) -> PredicateResult<StandardPredicate> {
        match predicate {
            NativePredicate::Match {
                attribute,
                operator,
                collation,
                operands,
            } => {
                let (match_type, equality_rule) = standard_leaf_for(operator, collation)
                    .ok_or(UnsupportedPredicateError::NativeLeaf { operator, collation })?;
                let attribute = if attribute == NATIVE_WILDCARD_ATTRIBUTE {
                    ALL_ATTRIBUTES.into()
                } else {
                    self.mapping
                        .entry_for_native(attribute.as_str())
                        .map(|entry| entry.standard().clone())
                        .ok_or_else(|| UnsupportedPredicateError::UnmappedAttribute {
                            native_type: self.native_type().to_string(),
                            attribute: attribute.into_string(),
                        })?
                };
                Ok(StandardPredicate::Match {
                    attribute,
                    match_type,
                    equality_rule,
                    operands,
                })
            }
            NativePredicate::Junction {
                junction,
                subpredicates,
            } => {
                if subpredicates.is_empty() {
                    return Err(UnsupportedPredicateError::EmptyJunction { junction });
                }
                let mut children = subpredicates
                    .into_iter()
                    .map(|p| self.to_standard(p))
                    .collect::<PredicateResult<Vec<_>>>()?;
                Ok(match junction {
                    NativeJunction::AllOf => StandardPredicate::and(children),
                    NativeJunction::AnyOf => StandardPredicate::or(children),
                    NativeJunction::NoneOf if children.len() == 1 => {
                        StandardPredicate::not(children.remove(0))
                    }
                    NativeJunction::NoneOf => StandardPredicate::not(StandardPredicate::or(children)),
                })
            }
        }
    }

    fn standard_to_native(&self, predicate: StandardPredicate) -> PredicateResult<NativePredicate> {
        match predicate {
            StandardPredicate::Match {
                attribute,
                match_type,
                equality_rule,
                operands,
            } => {
                let (operator, collation) = native_leaf_for(match_type, equality_rule).ok_or(
                    UnsupportedPredicateError::MatchRule {
                        match_type,
                        equality_rule,
                    },
                )?;
                if operands.is_empty() && match_type != StandardMatchType::Any {
                    return Err(UnsupportedPredicateError::MissingOperand {
                        attribute: attribute.into_string(),
                        match_type,
                    });
                }
                let (attribute, operands) = self.resolve_leaf(attribute.as_str(), operands)?;
                Ok(NativePredicate::Match {
                    attribute,
                    operator,
                    collation,
                    operands,
                })
            }
            StandardPredicate::Compound {
                operator,
                subpredicates,
            } => {
                let count = subpredicates.len();
                let (junction, expected) = match operator {
                    CompoundOperator::And => (NativeJunction::AllOf, "at least one"),
                    CompoundOperator::Or => (NativeJunction::AnyOf, "at least one"),
                    CompoundOperator::Not => (NativeJunction::NoneOf, "exactly one"),
                };
                let arity_ok = match operator {
                    CompoundOperator::Not => count == 1,
                    CompoundOperator::And | CompoundOperator::Or => count > 0,
                };
                if !arity_ok {
                    return Err(UnsupportedPredicateError::CompoundArity {
                        operator,
                        expected,
                        actual: count,
                    });
                }
                let subpredicates = subpredicates
                    .into_iter()
                    .map(|p| self.standard_to_native(p))
                    .collect::<PredicateResult<Vec<_>>>()?;
                Ok(NativePredicate::Junction {
                    junction,
                    subpredicates,
                })
            }
        }
    }

    fn resolve_leaf(
        &self,
        attribute: &str,
        operands: Vec<DirectoryValue>,
    ) -> PredicateResult<(NativeAttributeId, Vec<DirectoryValue>)> {
        if attribute == ALL_ATTRIBUTES {
            return Ok((NATIVE_WILDCARD_ATTRIBUTE.into(), operands));
        }
        let unmapped = || UnsupportedPredicateError::UnmappedAttribute {
            native_type: self.native_type().to_string(),
            attribute: attribute.to_string(),
        };
        let entry = self.mapping.entry_for_standard(attribute).ok_or_else(unmapped)?;
        let native = entry.natives().first().ok_or_else(unmapped)?;
        let shape = entry.shape();
        let operands = if shape.is_multi_valued() {
            operands
        } else {
            operands.into_iter().map(|o| shape.normalize(o)).collect()
        };
        Ok((native.clone(), operands))
    }
}
