//! One-line predicate diagnostics, e.g.
//! `(and (RecordName equalTo caseIgnore "jdoe") (not (UniqueID lessThan numeric "500")))`.

use crate::predicate::{NativePredicate, StandardPredicate};
use easylogin_types::{Describe, DirectoryValue, write_escaped};

/// Renders a predicate or a list of predicates from either model.
pub fn describe_predicate<P: Describe + ?Sized>(predicate: &P) -> String {
    predicate.describe()
}

impl Describe for StandardPredicate {
    fn write_description(&self, out: &mut String) {
        match self {
            Self::Match {
                attribute,
                match_type,
                equality_rule,
                operands,
            } => write_leaf(
                out,
                attribute.as_str(),
                match_type.name(),
                equality_rule.name(),
                operands,
            ),
            Self::Compound {
                operator,
                subpredicates,
            } => write_compound(out, operator.name(), subpredicates),
        }
    }
}

impl Describe for NativePredicate {
    fn write_description(&self, out: &mut String) {
        match self {
            Self::Match {
                attribute,
                operator,
                collation,
                operands,
            } => write_leaf(
                out,
                attribute.as_str(),
                operator.name(),
                collation.name(),
                operands,
            ),
            Self::Junction {
                junction,
                subpredicates,
            } => write_compound(out, junction.name(), subpredicates),
        }
    }
}

fn write_leaf(out: &mut String, attribute: &str, op: &str, rule: &str, operands: &[DirectoryValue]) {
    out.push('(');
    write_escaped(out, attribute);
    out.push(' ');
    out.push_str(op);
    out.push(' ');
    out.push_str(rule);
    match operands {
        [] => {}
        [single] => {
            out.push(' ');
            single.write_description(out);
        }
        many => {
            out.push(' ');
            many.write_description(out);
        }
    }
    out.push(')');
}

fn write_compound<P: Describe>(out: &mut String, op: &str, children: &[P]) {
    out.push('(');
    out.push_str(op);
    for child in children {
        out.push(' ');
        child.write_description(out);
    }
    out.push(')');
}
