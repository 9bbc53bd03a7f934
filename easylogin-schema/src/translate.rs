//! Attribute translation between native records and standard records.

use crate::SchemaMappingTable;
use easylogin_types::{AttributeBag, DirectoryValue, NativeAttributeId};
use std::collections::BTreeSet;
use tracing::{debug, trace};

impl SchemaMappingTable {
    /// Converts a native record into its standard form.
    ///
    /// Each mapped attribute is shape-normalized and stored under its
    /// standard name. When several native attributes feed one list attribute
    /// their values are concatenated in precedence order; single-valued
    /// attributes take the highest-precedence native value present. Unmapped
    /// native attributes are dropped.
    pub fn standard_info_from_native_info(
        &self,
        native: AttributeBag,
        native_type: &str,
    ) -> AttributeBag {
        let Some(mapping) = self.native_type(native_type) else {
            debug!(native_type, attributes = native.len(), "Unknown native type, no standard attributes");
            return AttributeBag::new();
        };

        let mut native = native.into_inner();
        let mut standard = AttributeBag::new();

        for entry in mapping.entries() {
            let mut present = entry
                .natives()
                .iter()
                .filter_map(|attr| native.remove(attr.as_str()));

            let value = if entry.shape().is_multi_valued() {
                let mut merged = Vec::new();
                let mut found = false;
                for value in present {
                    found = true;
                    match value {
                        DirectoryValue::List(items) => merged.extend(items),
                        other => merged.push(other),
                    }
                }
                if !found {
                    continue;
                }
                DirectoryValue::List(merged)
            } else {
                match present.next() {
                    Some(value) => entry.shape().normalize(value),
                    None => continue,
                }
            };

            standard.insert(entry.standard().as_str(), value);
        }

        if !native.is_empty() {
            trace!(native_type, dropped = native.len(), "Dropped unmapped native attributes");
        }
        standard
    }

    /// The highest-precedence native attribute for a standard attribute.
    pub fn native_attribute_for(
        &self,
        native_type: &str,
        standard_attr: &str,
    ) -> Option<&NativeAttributeId> {
        self.lookup_standard_to_native(native_type, standard_attr)
            .first()
    }

    /// Every native attribute of `native_type` exposed through the table.
    pub fn all_native_attributes_supported(&self, native_type: &str) -> BTreeSet<NativeAttributeId> {
        self.all_native_attributes(native_type)
    }
}
