//! Prefix-expansion support built from the schema's prefix declarations
//!
//! Mapping identifiers arrive as CURIEs or full IRIs depending on the
//! source vocabulary; the mapping indices key on a single normalized
//! form so both spellings of the same identifier collide.

use bmt_core::SchemaDefinition;
use indexmap::IndexMap;

/// Prefix-to-expansion table for a loaded schema
#[derive(Debug, Clone, Default)]
pub struct Namespaces {
    prefixes: IndexMap<String, String>,
}

impl Namespaces {
    /// Build the table from a schema's prefix declarations
    #[must_use]
    pub fn from_schema(schema: &SchemaDefinition) -> Self {
        let prefixes = schema
            .prefixes
            .iter()
            .map(|(prefix, def)| (prefix.clone(), def.expansion().to_string()))
            .collect();
        Self { prefixes }
    }

    /// The expansion declared for a prefix, if any
    #[must_use]
    pub fn expansion(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Normalize an identifier to its URI form.
    ///
    /// Full IRIs pass through untouched. A `prefix:local` CURIE whose
    /// prefix is declared in the schema expands to `expansion + local`;
    /// unrecognized prefixes pass through as written so lookups still
    /// match the literal string.
    #[must_use]
    pub fn uri_for(&self, identifier: &str) -> String {
        if identifier.contains("://") {
            return identifier.to_string();
        }
        if let Some((prefix, local)) = identifier.split_once(':') {
            if let Some(expansion) = self.prefixes.get(prefix) {
                return format!("{expansion}{local}");
            }
        }
        identifier.to_string()
    }
}
