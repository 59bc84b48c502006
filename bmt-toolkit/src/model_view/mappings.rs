//! Reverse indices from external identifiers to element names
//!
//! Each cross-reference specificity level gets its own bucket, keyed by
//! the prefix-expanded URI form of the identifier so CURIE and full-IRI
//! spellings of the same term land on the same key. An element's own
//! declared URI indexes into the general bucket.

use bmt_core::Element;
use std::collections::{BTreeMap, BTreeSet};

use crate::namespace::Namespaces;

use super::ElementIndex;

/// Cross-reference specificity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingKind {
    /// The default bucket, fed by plain `mappings` and element URIs
    General,
    /// Exact mappings
    Exact,
    /// Close mappings
    Close,
    /// Related mappings
    Related,
    /// Narrow mappings
    Narrow,
    /// Broad mappings
    Broad,
}

impl MappingKind {
    /// Probe order used when asking for the most specific non-empty
    /// bucket for an identifier
    pub const PROBE_ORDER: [MappingKind; 6] = [
        MappingKind::General,
        MappingKind::Exact,
        MappingKind::Close,
        MappingKind::Related,
        MappingKind::Narrow,
        MappingKind::Broad,
    ];
}

type Bucket = BTreeMap<String, BTreeSet<String>>;

/// Reverse multimaps from normalized identifiers to element names
#[derive(Debug, Clone, Default)]
pub struct MappingIndex {
    general: Bucket,
    exact: Bucket,
    close: Bucket,
    related: Bucket,
    narrow: Bucket,
    broad: Bucket,
    /// Identifier-namespace prefix to the elements declaring it
    prefix_index: BTreeMap<String, BTreeSet<String>>,
}

impl MappingIndex {
    /// Build the indices from every element's cross-references
    #[must_use]
    pub fn build(index: &ElementIndex, namespaces: &Namespaces) -> Self {
        let mut mappings = Self::default();
        for element in index.iter() {
            let name = element.name();
            let xrefs = element.cross_references();

            Self::insert_all(&mut mappings.general, namespaces, &xrefs.mappings, name);
            Self::insert_all(&mut mappings.exact, namespaces, &xrefs.exact_mappings, name);
            Self::insert_all(&mut mappings.close, namespaces, &xrefs.close_mappings, name);
            Self::insert_all(
                &mut mappings.related,
                namespaces,
                &xrefs.related_mappings,
                name,
            );
            Self::insert_all(
                &mut mappings.narrow,
                namespaces,
                &xrefs.narrow_mappings,
                name,
            );
            Self::insert_all(&mut mappings.broad, namespaces, &xrefs.broad_mappings, name);

            if let Some(uri) = element.uri() {
                Self::insert_one(&mut mappings.general, namespaces, uri, name);
            }

            for prefix in element.id_prefixes() {
                mappings
                    .prefix_index
                    .entry(prefix.clone())
                    .or_default()
                    .insert(name.to_string());
            }
        }
        mappings
    }

    fn insert_all(bucket: &mut Bucket, namespaces: &Namespaces, identifiers: &[String], name: &str) {
        for identifier in identifiers {
            Self::insert_one(bucket, namespaces, identifier, name);
        }
    }

    fn insert_one(bucket: &mut Bucket, namespaces: &Namespaces, identifier: &str, name: &str) {
        bucket
            .entry(namespaces.uri_for(identifier))
            .or_default()
            .insert(name.to_string());
    }

    fn bucket(&self, kind: MappingKind) -> &Bucket {
        match kind {
            MappingKind::General => &self.general,
            MappingKind::Exact => &self.exact,
            MappingKind::Close => &self.close,
            MappingKind::Related => &self.related,
            MappingKind::Narrow => &self.narrow,
            MappingKind::Broad => &self.broad,
        }
    }

    /// Elements carrying the identifier at the given specificity level.
    /// The identifier is normalized before lookup.
    #[must_use]
    pub fn elements_for(
        &self,
        kind: MappingKind,
        namespaces: &Namespaces,
        identifier: &str,
    ) -> BTreeSet<String> {
        self.bucket(kind)
            .get(&namespaces.uri_for(identifier))
            .cloned()
            .unwrap_or_default()
    }

    /// Union of every bucket for an identifier
    #[must_use]
    pub fn all_elements(&self, namespaces: &Namespaces, identifier: &str) -> BTreeSet<String> {
        let key = namespaces.uri_for(identifier);
        let mut out = BTreeSet::new();
        for kind in MappingKind::PROBE_ORDER {
            if let Some(names) = self.bucket(kind).get(&key) {
                out.extend(names.iter().cloned());
            }
        }
        out
    }

    /// The first non-empty bucket for an identifier in probe order
    #[must_use]
    pub fn most_specific(&self, namespaces: &Namespaces, identifier: &str) -> BTreeSet<String> {
        let key = namespaces.uri_for(identifier);
        for kind in MappingKind::PROBE_ORDER {
            if let Some(names) = self.bucket(kind).get(&key) {
                if !names.is_empty() {
                    return names.clone();
                }
            }
        }
        BTreeSet::new()
    }

    /// Elements declaring an identifier-namespace prefix
    #[must_use]
    pub fn elements_with_prefix(&self, prefix: &str) -> BTreeSet<String> {
        self.prefix_index.get(prefix).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmt_core::{ClassDefinition, PrefixDefinition, SchemaDefinition, SlotDefinition};
    use pretty_assertions::assert_eq;

    fn build() -> (MappingIndex, Namespaces) {
        let mut schema = SchemaDefinition::default();
        schema.prefixes.insert(
            "RO".to_string(),
            PrefixDefinition::Simple("http://purl.obolibrary.org/obo/RO_".to_string()),
        );
        schema.classes.insert(
            "gene".to_string(),
            ClassDefinition {
                name: "gene".to_string(),
                class_uri: Some("biolink:Gene".to_string()),
                id_prefixes: vec!["NCBIGene".to_string(), "ENSEMBL".to_string()],
                cross_references: bmt_core::CrossReferences {
                    exact_mappings: vec!["SO:0000704".to_string()],
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        schema.slots.insert(
            "causes".to_string(),
            SlotDefinition {
                name: "causes".to_string(),
                cross_references: bmt_core::CrossReferences {
                    exact_mappings: vec!["RO:0002410".to_string()],
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        schema.slots.insert(
            "contributes to".to_string(),
            SlotDefinition {
                name: "contributes to".to_string(),
                cross_references: bmt_core::CrossReferences {
                    narrow_mappings: vec!["RO:0002410".to_string()],
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        let index = ElementIndex::from_schema(&schema);
        let namespaces = Namespaces::from_schema(&schema);
        let mappings = MappingIndex::build(&index, &namespaces);
        (mappings, namespaces)
    }

    #[test]
    fn test_curie_and_iri_spellings_collide() {
        let (mappings, ns) = build();
        let via_curie = mappings.all_elements(&ns, "RO:0002410");
        let via_iri = mappings.all_elements(&ns, "http://purl.obolibrary.org/obo/RO_0002410");
        assert_eq!(via_curie, via_iri);
        assert_eq!(via_curie.len(), 2);
    }

    #[test]
    fn test_most_specific_prefers_exact_over_narrow() {
        let (mappings, ns) = build();
        let most = mappings.most_specific(&ns, "RO:0002410");
        assert_eq!(most.into_iter().collect::<Vec<_>>(), ["causes"]);
    }

    #[test]
    fn test_element_uri_lands_in_general_bucket() {
        let (mappings, ns) = build();
        let general = mappings.elements_for(MappingKind::General, &ns, "biolink:Gene");
        assert!(general.contains("gene"));
    }

    #[test]
    fn test_prefix_index() {
        let (mappings, _) = build();
        assert!(mappings.elements_with_prefix("NCBIGene").contains("gene"));
        assert!(mappings.elements_with_prefix("CHEBI").is_empty());
    }
}
