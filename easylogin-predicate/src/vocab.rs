//! The two predicate vocabularies.
//!
//! Names returned by `name()` are the ones used in diagnostics and in the
//! serde representation.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $text)] $variant,)+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

named_enum! {
    /// Comparison family of a standard search leaf.
    pub enum StandardMatchType {
        /// Matches every record; operands are ignored.
        Any => "any",
        EqualTo => "equalTo",
        BeginsWith => "beginsWith",
        EndsWith => "endsWith",
        Contains => "contains",
        GreaterThan => "greaterThan",
        LessThan => "lessThan",
    }
}

named_enum! {
    /// Case/diacritic policy of a standard search leaf.
    pub enum StandardEqualityRule {
        None => "none",
        CaseExact => "caseExact",
        CaseIgnore => "caseIgnore",
        DiacriticIgnore => "diacriticIgnore",
        Numeric => "numeric",
        Time => "time",
        Octet => "octet",
    }
}

named_enum! {
    /// Combinator of a standard compound predicate.
    pub enum CompoundOperator {
        And => "and",
        Or => "or",
        Not => "not",
    }
}

named_enum! {
    /// Comparison operator of an EasyLogin query leaf.
    pub enum NativeOperator {
        All => "all",
        Equals => "equals",
        StartsWith => "starts_with",
        EndsWith => "ends_with",
        Contains => "contains",
        GreaterThan => "greater_than",
        LessThan => "less_than",
    }
}

named_enum! {
    /// How an EasyLogin query leaf compares values.
    pub enum NativeCollation {
        Exact => "exact",
        CaseFold => "case_fold",
        Numeric => "numeric",
        Octets => "octets",
    }
}

named_enum! {
    /// Combinator of an EasyLogin compound query.
    pub enum NativeJunction {
        AllOf => "all_of",
        AnyOf => "any_of",
        NoneOf => "none_of",
    }
}
