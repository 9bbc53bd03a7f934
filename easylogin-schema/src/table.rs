//! The schema mapping table and its builder.

use crate::{SchemaError, ValueShape};
use easylogin_types::{NativeAttributeId, NativeTypeId, StandardAttributeId};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// One standard attribute and the native attributes that provide it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    standard: StandardAttributeId,
    natives: Vec<NativeAttributeId>,
    shape: ValueShape,
}

impl MappingEntry {
    pub fn standard(&self) -> &StandardAttributeId {
        &self.standard
    }

    /// Native attributes in precedence order (highest first). Never empty.
    pub fn natives(&self) -> &[NativeAttributeId] {
        &self.natives
    }

    pub fn shape(&self) -> ValueShape {
        self.shape
    }
}

/// All mappings for one native record type.
///
/// Within a type the native → standard direction is a function; the
/// standard → native direction may list several attributes in precedence
/// order.
#[derive(Debug, Clone)]
pub struct NativeTypeMapping {
    native_type: NativeTypeId,
    standard_type: String,
    entries: Vec<MappingEntry>,
    by_standard: HashMap<StandardAttributeId, usize>,
    by_native: HashMap<NativeAttributeId, usize>,
}

impl NativeTypeMapping {
    pub fn native_type(&self) -> &NativeTypeId {
        &self.native_type
    }

    /// The standard record type this native type represents.
    pub fn standard_type(&self) -> &str {
        &self.standard_type
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn entry_for_standard(&self, standard: &str) -> Option<&MappingEntry> {
        self.by_standard.get(standard).map(|&i| &self.entries[i])
    }

    pub fn entry_for_native(&self, native: &str) -> Option<&MappingEntry> {
        self.by_native.get(native).map(|&i| &self.entries[i])
    }

    pub fn native_attributes(&self) -> impl Iterator<Item = &NativeAttributeId> {
        self.entries.iter().flat_map(|e| e.natives.iter())
    }
}

/// Immutable table of every native type the module knows.
///
/// Built once, then shared read-only (typically behind an `Arc`); there are
/// no mutating methods.
#[derive(Debug, Clone)]
pub struct SchemaMappingTable {
    version: u32,
    types: BTreeMap<NativeTypeId, NativeTypeMapping>,
}

impl SchemaMappingTable {
    /// Starts a table definition.
    pub fn builder(version: u32) -> TableBuilder {
        TableBuilder {
            version,
            types: Vec::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn native_type(&self, native_type: &str) -> Option<&NativeTypeMapping> {
        self.types.get(native_type)
    }

    pub fn native_types(&self) -> impl Iterator<Item = &NativeTypeMapping> {
        self.types.values()
    }

    /// The standard attribute a native attribute maps to, if any.
    pub fn lookup_native_to_standard(
        &self,
        native_type: &str,
        native_attr: &str,
    ) -> Option<&StandardAttributeId> {
        self.native_type(native_type)?
            .entry_for_native(native_attr)
            .map(MappingEntry::standard)
    }

    /// Native attributes providing a standard attribute, highest precedence
    /// first. Empty when unmapped.
    pub fn lookup_standard_to_native(
        &self,
        native_type: &str,
        standard_attr: &str,
    ) -> &[NativeAttributeId] {
        self.native_type(native_type)
            .and_then(|t| t.entry_for_standard(standard_attr))
            .map(MappingEntry::natives)
            .unwrap_or(&[])
    }

    /// Every native attribute of a type that has a standard counterpart.
    pub fn all_native_attributes(&self, native_type: &str) -> BTreeSet<NativeAttributeId> {
        self.native_type(native_type)
            .map(|t| t.native_attributes().cloned().collect())
            .unwrap_or_default()
    }

    /// The standard record type for a native type (e.g. `user` → `Users`).
    pub fn standard_record_type(&self, native_type: &str) -> Option<&str> {
        self.native_type(native_type).map(NativeTypeMapping::standard_type)
    }

    /// The native type backing a standard record type.
    pub fn native_type_for_record_type(&self, standard_type: &str) -> Option<&NativeTypeId> {
        self.types
            .values()
            .find(|t| t.standard_type == standard_type)
            .map(NativeTypeMapping::native_type)
    }
}

/// Builder for [`SchemaMappingTable`]; invariants are checked in [`build`](Self::build).
#[derive(Debug)]
pub struct TableBuilder {
    version: u32,
    types: Vec<TypeBuilder>,
}

impl TableBuilder {
    /// Declares a native type and its attribute mappings.
    pub fn native_type(
        mut self,
        native_type: impl Into<NativeTypeId>,
        standard_type: impl Into<String>,
        define: impl FnOnce(TypeBuilder) -> TypeBuilder,
    ) -> Self {
        let builder = TypeBuilder {
            native_type: native_type.into(),
            standard_type: standard_type.into(),
            entries: Vec::new(),
        };
        self.types.push(define(builder));
        self
    }

    /// Validates every definition and freezes the table.
    pub fn build(self) -> Result<SchemaMappingTable, SchemaError> {
        let mut types = BTreeMap::new();
        let mut standard_types: HashMap<String, NativeTypeId> = HashMap::new();

        for builder in self.types {
            let mapping = builder.finish()?;
            if let Some(owner) = standard_types.get(&mapping.standard_type) {
                return Err(SchemaError::DuplicateStandardType {
                    standard_type: mapping.standard_type,
                    native_type: owner.to_string(),
                });
            }
            if types.contains_key(&mapping.native_type) {
                return Err(SchemaError::DuplicateNativeType(
                    mapping.native_type.into_string(),
                ));
            }
            standard_types.insert(mapping.standard_type.clone(), mapping.native_type.clone());
            types.insert(mapping.native_type.clone(), mapping);
        }

        Ok(SchemaMappingTable {
            version: self.version,
            types,
        })
    }
}

/// Collects the attribute mappings of one native type.
#[derive(Debug)]
pub struct TypeBuilder {
    native_type: NativeTypeId,
    standard_type: String,
    entries: Vec<MappingEntry>,
}

impl TypeBuilder {
    /// Maps `standard` to `natives`, listed highest precedence first.
    pub fn map<I, N>(mut self, standard: impl Into<StandardAttributeId>, natives: I, shape: ValueShape) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<NativeAttributeId>,
    {
        self.entries.push(MappingEntry {
            standard: standard.into(),
            natives: natives.into_iter().map(Into::into).collect(),
            shape,
        });
        self
    }

    /// Single native attribute holding a single value.
    pub fn scalar(self, standard: &str, native: &str) -> Self {
        self.map(standard, [native], ValueShape::Scalar)
    }

    /// Native attributes whose values are merged into one list.
    pub fn list(self, standard: &str, natives: &[&str]) -> Self {
        self.map(standard, natives.iter().copied(), ValueShape::List)
    }

    fn finish(self) -> Result<NativeTypeMapping, SchemaError> {
        let mut by_standard = HashMap::new();
        let mut by_native: HashMap<NativeAttributeId, usize> = HashMap::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.natives.is_empty() {
                return Err(SchemaError::EmptyMapping {
                    native_type: self.native_type.to_string(),
                    attribute: entry.standard.to_string(),
                });
            }
            if by_standard.insert(entry.standard.clone(), index).is_some() {
                return Err(SchemaError::DuplicateStandardAttribute {
                    native_type: self.native_type.to_string(),
                    attribute: entry.standard.to_string(),
                });
            }
            for native in &entry.natives {
                if let Some(&previous) = by_native.get(native) {
                    return Err(SchemaError::AmbiguousNativeAttribute {
                        native_type: self.native_type.to_string(),
                        attribute: native.to_string(),
                        first: self.entries[previous].standard.to_string(),
                        second: entry.standard.to_string(),
                    });
                }
                by_native.insert(native.clone(), index);
            }
        }

        Ok(NativeTypeMapping {
            native_type: self.native_type,
            standard_type: self.standard_type,
            entries: self.entries,
            by_standard,
            by_native,
        })
    }
}
