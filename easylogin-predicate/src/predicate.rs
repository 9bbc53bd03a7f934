//! Predicate trees for both query models.
//!
//! A node is either a leaf carrying operands or a compound carrying
//! subpredicates; the enum makes "both" unrepresentable.

use crate::vocab::{
    CompoundOperator, NativeCollation, NativeJunction, NativeOperator, StandardEqualityRule,
    StandardMatchType,
};
use easylogin_types::{DirectoryValue, NativeAttributeId, StandardAttributeId};
use serde::{Deserialize, Serialize};

/// A search predicate in the directory's standard vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StandardPredicate {
    /// Compare one attribute against the operands. Several operands match
    /// when any of them does.
    Match {
        attribute: StandardAttributeId,
        match_type: StandardMatchType,
        equality_rule: StandardEqualityRule,
        operands: Vec<DirectoryValue>,
    },
    Compound {
        operator: CompoundOperator,
        subpredicates: Vec<StandardPredicate>,
    },
}

impl StandardPredicate {
    /// Leaf with a single operand.
    pub fn leaf(
        attribute: impl Into<StandardAttributeId>,
        match_type: StandardMatchType,
        equality_rule: StandardEqualityRule,
        operand: impl Into<DirectoryValue>,
    ) -> Self {
        Self::Match {
            attribute: attribute.into(),
            match_type,
            equality_rule,
            operands: vec![operand.into()],
        }
    }

    /// Leaf matching every record that has `attribute`.
    pub fn any(attribute: impl Into<StandardAttributeId>) -> Self {
        Self::Match {
            attribute: attribute.into(),
            match_type: StandardMatchType::Any,
            equality_rule: StandardEqualityRule::None,
            operands: Vec::new(),
        }
    }

    pub fn and(subpredicates: Vec<StandardPredicate>) -> Self {
        Self::Compound {
            operator: CompoundOperator::And,
            subpredicates,
        }
    }

    pub fn or(subpredicates: Vec<StandardPredicate>) -> Self {
        Self::Compound {
            operator: CompoundOperator::Or,
            subpredicates,
        }
    }

    pub fn not(subpredicate: StandardPredicate) -> Self {
        Self::Compound {
            operator: CompoundOperator::Not,
            subpredicates: vec![subpredicate],
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Self::Compound { .. })
    }
}

/// A search predicate in the EasyLogin backend's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NativePredicate {
    Match {
        attribute: NativeAttributeId,
        operator: NativeOperator,
        collation: NativeCollation,
        operands: Vec<DirectoryValue>,
    },
    Junction {
        junction: NativeJunction,
        subpredicates: Vec<NativePredicate>,
    },
}

impl NativePredicate {
    pub fn is_junction(&self) -> bool {
        matches!(self, Self::Junction { .. })
    }
}
