use easylogin_types::DirectoryValue;
use serde::{Deserialize, Serialize};

/// How a standard attribute's value is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueShape {
    /// A single text value.
    Scalar,
    /// Zero or more values.
    List,
    /// A single opaque byte value.
    Binary,
    /// A single timestamp.
    Date,
}

impl ValueShape {
    /// Adjusts the container of `value` to this shape.
    ///
    /// Only the list wrapper is touched: `List` wraps a lone value, the
    /// single-valued shapes unwrap a one-element list. The values themselves
    /// are never converted, so binary data keeps its exact bytes.
    pub fn normalize(self, value: DirectoryValue) -> DirectoryValue {
        match (self, value) {
            (Self::List, DirectoryValue::List(items)) => DirectoryValue::List(items),
            (Self::List, other) => DirectoryValue::List(vec![other]),
            (_, DirectoryValue::List(mut items)) if items.len() == 1 => items.remove(0),
            (_, other) => other,
        }
    }

    pub fn is_multi_valued(self) -> bool {
        matches!(self, Self::List)
    }
}
