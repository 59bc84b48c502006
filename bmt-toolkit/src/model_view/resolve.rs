//! Name resolution over the element index
//!
//! A query name may arrive as a CURIE (`biolink:NamedThing`), snake_case,
//! CamelCase, sentence case, an alias, or any of those in the wrong case.
//! Resolution walks a fixed fallback pipeline and stops at the first hit,
//! so cheaper exact lookups always win over fuzzier ones.

use bmt_core::utils::{parse_name, ParsedName};
use bmt_core::ToolkitConfig;

use super::ElementIndex;

/// Resolves user-supplied names to canonical element names
#[derive(Debug, Clone)]
pub struct NameResolver {
    prefix: String,
    max_alias_depth: usize,
}

impl NameResolver {
    /// Create a resolver from toolkit configuration
    #[must_use]
    pub fn new(config: &ToolkitConfig) -> Self {
        Self {
            prefix: config.default_prefix.clone(),
            max_alias_depth: config.max_alias_depth,
        }
    }

    /// Resolve a name to the canonical name of an indexed element.
    ///
    /// Pipeline: exact canonical lookup, prefix-stripped lookup, alias
    /// chain, underscore-to-space retry of the first three steps, then a
    /// case-insensitive scan as the last resort.
    #[must_use]
    pub fn resolve(&self, index: &ElementIndex, name: &str) -> Option<String> {
        let parsed = parse_name(name, &self.prefix);
        if let Some(found) = self.resolve_exact(index, name, &parsed) {
            return Some(found);
        }

        if name.contains('_') {
            let spaced = name.replace('_', " ");
            let spaced_parsed = parse_name(&spaced, &self.prefix);
            if let Some(found) = self.resolve_exact(index, &spaced, &spaced_parsed) {
                return Some(found);
            }
        }

        index
            .get_case_insensitive(&parsed.canonical)
            .or_else(|| index.get_case_insensitive(name))
            .map(|e| e.name().to_string())
    }

    /// The exact-match stages of the pipeline, without the
    /// case-insensitive fallback
    fn resolve_exact(
        &self,
        index: &ElementIndex,
        original: &str,
        parsed: &ParsedName,
    ) -> Option<String> {
        if index.get(&parsed.canonical).is_some() {
            return Some(parsed.canonical.clone());
        }

        if let Some(stripped) = &parsed.stripped {
            if index.get(stripped).is_some() {
                return Some(stripped.clone());
            }
        }

        self.follow_alias(index, original)
            .or_else(|| self.follow_alias(index, &parsed.canonical))
    }

    /// Follow an alias chain until it reaches a real element, bounded so
    /// malformed alias data cannot loop
    fn follow_alias(&self, index: &ElementIndex, name: &str) -> Option<String> {
        let mut current = index.alias_target(name)?.to_string();
        for _ in 0..self.max_alias_depth {
            if index.get(&current).is_some() {
                return Some(current);
            }
            current = index.alias_target(&current)?.to_string();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmt_core::{ClassDefinition, SchemaDefinition, SlotDefinition};
    use pretty_assertions::assert_eq;

    fn resolver() -> (NameResolver, ElementIndex) {
        let mut schema = SchemaDefinition::default();
        schema.classes.insert(
            "named thing".to_string(),
            ClassDefinition {
                name: "named thing".to_string(),
                ..Default::default()
            },
        );
        schema.classes.insert(
            "phenotypic feature".to_string(),
            ClassDefinition {
                name: "phenotypic feature".to_string(),
                aliases: vec!["sign".to_string(), "symptom".to_string()],
                ..Default::default()
            },
        );
        schema.slots.insert(
            "related to".to_string(),
            SlotDefinition {
                name: "related to".to_string(),
                ..Default::default()
            },
        );
        let index = ElementIndex::from_schema(&schema);
        (NameResolver::new(&ToolkitConfig::default()), index)
    }

    #[test]
    fn test_resolves_every_spelling() {
        let (resolver, index) = resolver();
        for name in [
            "named thing",
            "named_thing",
            "NamedThing",
            "biolink:NamedThing",
            "Named Thing",
        ] {
            assert_eq!(
                resolver.resolve(&index, name).as_deref(),
                Some("named thing"),
                "failed for {name}"
            );
        }
    }

    #[test]
    fn test_resolves_slot_spellings() {
        let (resolver, index) = resolver();
        for name in ["related to", "related_to", "biolink:related_to"] {
            assert_eq!(
                resolver.resolve(&index, name).as_deref(),
                Some("related to"),
                "failed for {name}"
            );
        }
    }

    #[test]
    fn test_resolves_aliases() {
        let (resolver, index) = resolver();
        assert_eq!(
            resolver.resolve(&index, "symptom").as_deref(),
            Some("phenotypic feature")
        );
    }

    #[test]
    fn test_unknown_name() {
        let (resolver, index) = resolver();
        assert!(resolver.resolve(&index, "no such element").is_none());
    }
}
