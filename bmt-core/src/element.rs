//! Tagged element variant over the five schema element kinds
//!
//! Kind-specific behavior (secondary-slot filtering, URI selection,
//! formatting) dispatches on the tag instead of runtime type probing.

use crate::annotations::Annotations;
use crate::types::{
    ClassDefinition, CrossReferences, EnumDefinition, SlotDefinition, SubsetDefinition,
    TypeDefinition,
};

const EMPTY: &[String] = &[];

/// Discriminant for the element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Class definition
    Class,
    /// Slot definition
    Slot,
    /// Type definition
    Type,
    /// Enum definition
    Enum,
    /// Subset definition
    Subset,
}

/// Any named node in the schema graph
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A class
    Class(ClassDefinition),
    /// A slot
    Slot(SlotDefinition),
    /// A type
    Type(TypeDefinition),
    /// An enum
    Enum(EnumDefinition),
    /// A subset
    Subset(SubsetDefinition),
}

impl Element {
    /// Canonical name of the element
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Element::Class(c) => &c.name,
            Element::Slot(s) => &s.name,
            Element::Type(t) => &t.name,
            Element::Enum(e) => &e.name,
            Element::Subset(s) => &s.name,
        }
    }

    /// Kind tag of the element
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Class(_) => ElementKind::Class,
            Element::Slot(_) => ElementKind::Slot,
            Element::Type(_) => ElementKind::Type,
            Element::Enum(_) => ElementKind::Enum,
            Element::Subset(_) => ElementKind::Subset,
        }
    }

    /// Description, when present
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Element::Class(c) => c.description.as_deref(),
            Element::Slot(s) => s.description.as_deref(),
            Element::Type(t) => t.description.as_deref(),
            Element::Enum(e) => e.description.as_deref(),
            Element::Subset(s) => s.description.as_deref(),
        }
    }

    /// Primary inheritance parent. Only classes and slots participate
    /// in the `is_a` hierarchy.
    #[must_use]
    pub fn is_a(&self) -> Option<&str> {
        match self {
            Element::Class(c) => c.is_a.as_deref(),
            Element::Slot(s) => s.is_a.as_deref(),
            _ => None,
        }
    }

    /// Auxiliary mixin parents, in declaration order
    #[must_use]
    pub fn mixins(&self) -> &[String] {
        match self {
            Element::Class(c) => &c.mixins,
            Element::Slot(s) => &s.mixins,
            _ => EMPTY,
        }
    }

    /// Schema-declared mixin flag
    #[must_use]
    pub fn is_mixin(&self) -> bool {
        match self {
            Element::Class(c) => c.mixin.unwrap_or(false),
            Element::Slot(s) => s.mixin.unwrap_or(false),
            _ => false,
        }
    }

    /// Alternate names that resolve to this element
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        match self {
            Element::Class(c) => &c.aliases,
            Element::Slot(s) => &s.aliases,
            Element::Type(t) => &t.aliases,
            Element::Enum(e) => &e.aliases,
            Element::Subset(s) => &s.aliases,
        }
    }

    /// External cross-references at every specificity level
    #[must_use]
    pub fn cross_references(&self) -> &CrossReferences {
        match self {
            Element::Class(c) => &c.cross_references,
            Element::Slot(s) => &s.cross_references,
            Element::Type(t) => &t.cross_references,
            Element::Enum(e) => &e.cross_references,
            Element::Subset(s) => &s.cross_references,
        }
    }

    /// Subsets this element belongs to
    #[must_use]
    pub fn in_subset(&self) -> &[String] {
        match self {
            Element::Class(c) => &c.in_subset,
            Element::Slot(s) => &s.in_subset,
            Element::Type(t) => &t.in_subset,
            Element::Enum(e) => &e.in_subset,
            Element::Subset(_) => EMPTY,
        }
    }

    /// Identifier-namespace prefixes declared for this element
    #[must_use]
    pub fn id_prefixes(&self) -> &[String] {
        match self {
            Element::Class(c) => &c.id_prefixes,
            Element::Slot(s) => &s.id_prefixes,
            Element::Type(t) => &t.id_prefixes,
            _ => EMPTY,
        }
    }

    /// Formal URI declared for this element, when present
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        match self {
            Element::Class(c) => c.class_uri.as_deref(),
            Element::Slot(s) => s.slot_uri.as_deref(),
            Element::Type(t) => t.uri.as_deref(),
            _ => None,
        }
    }

    /// Annotations, when present
    #[must_use]
    pub fn annotations(&self) -> Option<&Annotations> {
        match self {
            Element::Class(c) => c.annotations.as_ref(),
            Element::Slot(s) => s.annotations.as_ref(),
            Element::Type(t) => t.annotations.as_ref(),
            Element::Enum(e) => e.annotations.as_ref(),
            Element::Subset(s) => s.annotations.as_ref(),
        }
    }

    /// Deprecation notice, when present
    #[must_use]
    pub fn deprecated(&self) -> Option<&str> {
        match self {
            Element::Class(c) => c.deprecated.as_deref(),
            Element::Slot(s) => s.deprecated.as_deref(),
            Element::Type(t) => t.deprecated.as_deref(),
            Element::Enum(e) => e.deprecated.as_deref(),
            Element::Subset(_) => None,
        }
    }

    /// True for slots flagged as domain/range-specialization artifacts
    #[must_use]
    pub fn is_secondary_slot(&self) -> bool {
        match self {
            Element::Slot(s) => s.is_secondary(),
            _ => false,
        }
    }

    /// The slot definition, for slot elements
    #[must_use]
    pub fn as_slot(&self) -> Option<&SlotDefinition> {
        match self {
            Element::Slot(s) => Some(s),
            _ => None,
        }
    }

    /// The class definition, for class elements
    #[must_use]
    pub fn as_class(&self) -> Option<&ClassDefinition> {
        match self {
            Element::Class(c) => Some(c),
            _ => None,
        }
    }

    /// The enum definition, for enum elements
    #[must_use]
    pub fn as_enum(&self) -> Option<&EnumDefinition> {
        match self {
            Element::Enum(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_dispatch() {
        let class = Element::Class(ClassDefinition {
            name: "named thing".to_string(),
            mixins: vec!["thing with taxon".to_string()],
            ..Default::default()
        });
        assert_eq!(class.kind(), ElementKind::Class);
        assert_eq!(class.name(), "named thing");
        assert_eq!(class.mixins(), ["thing with taxon".to_string()]);
        assert!(!class.is_secondary_slot());

        let subset = Element::Subset(SubsetDefinition {
            name: "translator_minimal".to_string(),
            ..Default::default()
        });
        assert_eq!(subset.kind(), ElementKind::Subset);
        assert!(subset.is_a().is_none());
        assert!(subset.mixins().is_empty());
    }

    #[test]
    fn test_secondary_slot_dispatch() {
        let slot = Element::Slot(SlotDefinition {
            name: "gene to gene association subject".to_string(),
            alias: Some("subject".to_string()),
            ..Default::default()
        });
        assert!(slot.is_secondary_slot());
    }
}
