//! Core type definitions for Biolink-style schemas
//!
//! The shapes here mirror the subset of the LinkML metamodel that the
//! toolkit's hierarchy and mapping queries depend on. A schema is loaded
//! once and treated as an immutable snapshot for the lifetime of a
//! toolkit instance.

use crate::annotations::Annotations;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Schema definition - the root of a loaded model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SchemaDefinition {
    /// Unique identifier for the schema
    #[serde(default)]
    pub id: String,

    /// Name of the schema
    #[serde(default)]
    pub name: String,

    /// Human-readable title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description of the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Version of the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// License information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Default prefix for element URIs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_prefix: Option<String>,

    /// Default range for slots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_range: Option<String>,

    /// Prefix declarations
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub prefixes: IndexMap<String, PrefixDefinition>,

    /// Import statements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    /// Class definitions
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub classes: IndexMap<String, ClassDefinition>,

    /// Slot definitions
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub slots: IndexMap<String, SlotDefinition>,

    /// Type definitions
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub types: IndexMap<String, TypeDefinition>,

    /// Enum definitions
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub enums: IndexMap<String, EnumDefinition>,

    /// Subset definitions
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub subsets: IndexMap<String, SubsetDefinition>,

    /// Generation date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_date: Option<String>,

    /// Source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    /// Metamodel version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metamodel_version: Option<String>,

    /// Annotations for the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

/// Prefix declaration: either a bare expansion or a structured form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PrefixDefinition {
    /// Simple prefix to URI mapping
    Simple(String),
    /// Complex prefix definition
    Complex {
        /// The prefix expansion
        prefix_prefix: String,
        /// Optional reference URI
        #[serde(skip_serializing_if = "Option::is_none")]
        prefix_reference: Option<String>,
    },
}

impl PrefixDefinition {
    /// The URI expansion carried by this prefix declaration
    #[must_use]
    pub fn expansion(&self) -> &str {
        match self {
            PrefixDefinition::Simple(s) => s,
            PrefixDefinition::Complex { prefix_prefix, .. } => prefix_prefix,
        }
    }
}

/// External cross-references at each specificity level, shared by every
/// element kind. Flattened into the element definitions on (de)serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CrossReferences {
    /// General mappings (the union/default specificity bucket)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mappings: Vec<String>,

    /// Exact mappings to external ontology terms
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exact_mappings: Vec<String>,

    /// Close mappings to external ontology terms
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub close_mappings: Vec<String>,

    /// Related mappings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_mappings: Vec<String>,

    /// Narrow mappings (more specific external terms)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub narrow_mappings: Vec<String>,

    /// Broad mappings (more general external terms)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub broad_mappings: Vec<String>,
}

impl CrossReferences {
    /// True when no bucket carries any identifier
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
            && self.exact_mappings.is_empty()
            && self.close_mappings.is_empty()
            && self.related_mappings.is_empty()
            && self.narrow_mappings.is_empty()
            && self.broad_mappings.is_empty()
    }
}

/// Class definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassDefinition {
    /// Name of the class
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Is this class abstract?
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_: Option<bool>,

    /// Is this class a mixin?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixin: Option<bool>,

    /// Parent class (single inheritance)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_a: Option<String>,

    /// Mixin classes (auxiliary multiple inheritance)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<String>,

    /// Slots used by this class
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<String>,

    /// Slot usage overrides
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub slot_usage: IndexMap<String, SlotDefinition>,

    /// Class URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_uri: Option<String>,

    /// Tree root flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_root: Option<bool>,

    /// Alternative names that resolve to this class
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Deprecation notice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,

    /// Notes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,

    /// Comments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,

    /// Subsets this class belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub in_subset: Vec<String>,

    /// Identifier-namespace prefixes legitimately used by instances
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub id_prefixes: Vec<String>,

    /// External cross-references
    #[serde(flatten)]
    pub cross_references: CrossReferences,

    /// Annotations for the class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

/// Slot definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SlotDefinition {
    /// Name of the slot
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Is this slot abstract?
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_: Option<bool>,

    /// Is this slot a mixin?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixin: Option<bool>,

    /// Parent slot (single inheritance)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_a: Option<String>,

    /// Mixin slots (auxiliary multiple inheritance)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<String>,

    /// Derived-slot marker. A non-empty `alias` flags a secondary slot
    /// manufactured by domain/range specialization; such slots are excluded
    /// from every slot enumeration. Distinct from `aliases`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Alternative names that resolve to this slot
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Class for which this slot is a valid relation source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Classes that declare this slot
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain_of: Vec<String>,

    /// Range (class or type) of the slot's values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// Inverse slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse: Option<String>,

    /// Is this slot symmetric?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symmetric: Option<bool>,

    /// Is this slot multivalued?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multivalued: Option<bool>,

    /// Is this slot required?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Is this slot an identifier?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<bool>,

    /// Slot URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_uri: Option<String>,

    /// Deprecation notice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,

    /// Subsets this slot belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub in_subset: Vec<String>,

    /// Identifier-namespace prefixes legitimately used by values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub id_prefixes: Vec<String>,

    /// External cross-references
    #[serde(flatten)]
    pub cross_references: CrossReferences,

    /// Annotations for the slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

impl SlotDefinition {
    /// True when this slot is a domain/range-specialization artifact
    /// rather than a first-class relation
    #[must_use]
    pub fn is_secondary(&self) -> bool {
        self.alias.as_deref().is_some_and(|a| !a.is_empty())
    }
}

/// Type definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TypeDefinition {
    /// Name of the type
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parent type
    #[serde(rename = "typeof", skip_serializing_if = "Option::is_none")]
    pub typeof_: Option<String>,

    /// Type URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Base representation (e.g. `str`, `int`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Schema this type was imported from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_schema: Option<String>,

    /// Alternative names that resolve to this type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Deprecation notice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,

    /// Subsets this type belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub in_subset: Vec<String>,

    /// Identifier-namespace prefixes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub id_prefixes: Vec<String>,

    /// External cross-references
    #[serde(flatten)]
    pub cross_references: CrossReferences,

    /// Annotations for the type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

/// A permissible value within an enumeration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PermissibleValue {
    /// Value text, when it differs from the key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// External meaning (CURIE)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,

    /// Parent permissible value within the same enum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_a: Option<String>,
}

/// Enum definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnumDefinition {
    /// Name of the enum
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Permissible values; a bare key maps to `None`
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub permissible_values: IndexMap<String, Option<PermissibleValue>>,

    /// Alternative names that resolve to this enum
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Deprecation notice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,

    /// Subsets this enum belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub in_subset: Vec<String>,

    /// External cross-references
    #[serde(flatten)]
    pub cross_references: CrossReferences,

    /// Annotations for the enum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

impl EnumDefinition {
    /// Look up the `is_a` parent of a permissible value, if declared
    #[must_use]
    pub fn permissible_value_parent(&self, value: &str) -> Option<&str> {
        self.permissible_values
            .get(value)?
            .as_ref()?
            .is_a
            .as_deref()
    }
}

/// Subset definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubsetDefinition {
    /// Name of the subset
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Alternative names that resolve to this subset
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// External cross-references
    #[serde(flatten)]
    pub cross_references: CrossReferences,

    /// Annotations for the subset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}
