//! Indexed view over a loaded schema
//!
//! A schema document is a set of name-keyed definition maps; queries need
//! a single namespace of elements plus derived indices over it. The view
//! is built once per toolkit instance and never mutated afterwards.

use bmt_core::{Element, ElementKind, SchemaDefinition};
use indexmap::IndexMap;
use std::collections::HashMap;

pub mod classify;
pub mod hierarchy;
pub mod mappings;
pub mod resolve;

pub use hierarchy::HierarchyIndex;
pub use mappings::{MappingIndex, MappingKind};
pub use resolve::NameResolver;

/// Single-namespace index of every element in a schema.
///
/// When two definition maps carry the same key, class wins over slot,
/// slot over type, type over enum, enum over subset. The Biolink model
/// itself has no such collisions; the precedence only matters for
/// hand-built schemas.
#[derive(Debug, Clone, Default)]
pub struct ElementIndex {
    elements: IndexMap<String, Element>,
    /// Alias text to canonical element name; a later declaration of the
    /// same alias shadows an earlier one
    aliases: HashMap<String, String>,
    /// Lowercased canonical name to canonical name; the first element
    /// claiming a lowercase form keeps it
    lowercase: HashMap<String, String>,
}

impl ElementIndex {
    /// Build the index from a schema's definition maps
    #[must_use]
    pub fn from_schema(schema: &SchemaDefinition) -> Self {
        let mut index = Self::default();
        for class in schema.classes.values() {
            index.insert(Element::Class(class.clone()));
        }
        for slot in schema.slots.values() {
            index.insert(Element::Slot(slot.clone()));
        }
        for ty in schema.types.values() {
            index.insert(Element::Type(ty.clone()));
        }
        for en in schema.enums.values() {
            index.insert(Element::Enum(en.clone()));
        }
        for subset in schema.subsets.values() {
            index.insert(Element::Subset(subset.clone()));
        }
        index
    }

    fn insert(&mut self, element: Element) {
        let name = element.name().to_string();
        if self.elements.contains_key(&name) {
            return;
        }
        for alias in element.aliases() {
            self.aliases.insert(alias.clone(), name.clone());
        }
        self.lowercase
            .entry(name.to_lowercase())
            .or_insert_with(|| name.clone());
        self.elements.insert(name, element);
    }

    /// Look up an element by its canonical name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Element> {
        self.elements.get(name)
    }

    /// Look up an element ignoring case
    #[must_use]
    pub fn get_case_insensitive(&self, name: &str) -> Option<&Element> {
        let canonical = self.lowercase.get(&name.to_lowercase())?;
        self.elements.get(canonical)
    }

    /// Canonical name an alias points at, if the alias is declared
    #[must_use]
    pub fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// All elements in definition order (classes first, then slots,
    /// types, enums, subsets)
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Canonical names of every element of the given kind, in
    /// definition order
    #[must_use]
    pub fn names_of_kind(&self, kind: ElementKind) -> Vec<String> {
        self.elements
            .values()
            .filter(|e| e.kind() == kind)
            .map(|e| e.name().to_string())
            .collect()
    }

    /// Number of indexed elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the schema defined no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
