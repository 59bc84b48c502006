//! The toolkit facade
//!
//! A [`Toolkit`] wraps one loaded schema snapshot together with the
//! derived indices and exposes the full query surface: name resolution,
//! hierarchy traversal, domain/range queries, classification predicates,
//! and mapping lookups. Instances are cheap to query and safe to share
//! across threads; hierarchy traversals are memoized per instance.

use bmt_core::annotations::{well_known, AnnotationValue};
use bmt_core::utils::format_element;
use bmt_core::{
    configuration::default_remote_schema, BmtError, Element, ElementKind, Result,
    SchemaDefinition, ToolkitConfig,
};
use dashmap::DashMap;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::debug;

use crate::model_view::classify::{
    ASSOCIATION, ASSOCIATION_SLOT, NAMED_THING, NODE_PROPERTY, RELATED_TO,
};
use crate::model_view::{ElementIndex, HierarchyIndex, MappingIndex, MappingKind, NameResolver};
use crate::namespace::Namespaces;
use crate::parser::{Parser, SchemaLoader};

/// Key for the traversal caches: canonical name plus the mixin flag
type TraversalKey = (String, bool);

/// Query facade over a loaded Biolink model
pub struct Toolkit {
    schema: SchemaDefinition,
    config: ToolkitConfig,
    elements: ElementIndex,
    resolver: NameResolver,
    hierarchy: HierarchyIndex,
    mappings: MappingIndex,
    namespaces: Namespaces,
    ancestor_cache: DashMap<TraversalKey, Vec<String>>,
    descendant_cache: DashMap<TraversalKey, Vec<String>>,
    resolution_cache: DashMap<String, Option<String>>,
}

impl Toolkit {
    /// Build a toolkit over a schema with default configuration
    ///
    /// # Errors
    ///
    /// Returns `BmtError::MalformedSchema` when the schema's hierarchy
    /// is invalid (dangling or cross-kind references, `is_a` cycles)
    pub fn new(schema: SchemaDefinition) -> Result<Self> {
        Self::with_config(schema, ToolkitConfig::default())
    }

    /// Build a toolkit over a schema with explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `BmtError::MalformedSchema` when the schema's hierarchy
    /// is invalid
    pub fn with_config(schema: SchemaDefinition, config: ToolkitConfig) -> Result<Self> {
        let elements = ElementIndex::from_schema(&schema);
        let hierarchy = HierarchyIndex::build(&elements)?;
        let namespaces = Namespaces::from_schema(&schema);
        let mappings = MappingIndex::build(&elements, &namespaces);
        let resolver = NameResolver::new(&config);
        debug!(
            elements = elements.len(),
            schema = %schema.name,
            "toolkit ready"
        );
        Ok(Self {
            schema,
            config,
            elements,
            resolver,
            hierarchy,
            mappings,
            namespaces,
            ancestor_cache: DashMap::new(),
            descendant_cache: DashMap::new(),
            resolution_cache: DashMap::new(),
        })
    }

    /// Build a toolkit from YAML schema content
    ///
    /// # Errors
    ///
    /// Returns `BmtError::ParseError` when the content does not parse,
    /// or `BmtError::MalformedSchema` when the hierarchy is invalid
    pub fn from_yaml(content: &str) -> Result<Self> {
        let schema = Parser::new().parse_str(content, "yaml")?;
        Self::new(schema)
    }

    /// Load a schema from a file and build a toolkit over it
    ///
    /// # Errors
    ///
    /// Returns a `BmtError` when the file cannot be read or parsed, or
    /// the hierarchy is invalid
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let schema = SchemaLoader::new().load_file(path).await?;
        Self::new(schema)
    }

    /// Load a schema from a URL and build a toolkit over it
    ///
    /// # Errors
    ///
    /// Returns a `BmtError` when the fetch or parse fails, or the
    /// hierarchy is invalid
    pub async fn load_from_url(url: &str) -> Result<Self> {
        let schema = SchemaLoader::new().load_url(url).await?;
        Self::new(schema)
    }

    /// Load the pinned default model release from its published URL
    ///
    /// # Errors
    ///
    /// Returns a `BmtError` when the fetch or parse fails
    pub async fn load_default() -> Result<Self> {
        Self::load_from_url(&default_remote_schema()).await
    }

    /// The loaded schema snapshot
    #[must_use]
    pub fn schema(&self) -> &SchemaDefinition {
        &self.schema
    }

    /// Version string of the loaded model, when declared
    #[must_use]
    pub fn get_model_version(&self) -> Option<&str> {
        self.schema.version.as_deref()
    }

    // ---- name resolution ----

    /// Resolve a name through the fallback pipeline, memoized
    fn resolve(&self, name: &str) -> Option<String> {
        if let Some(cached) = self.resolution_cache.get(name) {
            return cached.clone();
        }
        let resolved = self.resolver.resolve(&self.elements, name);
        if resolved.is_none() {
            debug!(name, "name did not resolve to any element");
        }
        self.resolution_cache
            .insert(name.to_string(), resolved.clone());
        resolved
    }

    /// Look up an element by any of its recognized spellings
    #[must_use]
    pub fn get_element(&self, name: &str) -> Option<&Element> {
        let canonical = self.resolve(name)?;
        self.elements.get(&canonical)
    }

    // ---- enumerations ----

    /// Canonical names of every element, secondary slots excluded
    #[must_use]
    pub fn get_all_elements(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| !e.is_secondary_slot())
            .map(|e| e.name().to_string())
            .collect()
    }

    /// Canonical names of every class
    #[must_use]
    pub fn get_all_classes(&self) -> Vec<String> {
        self.elements.names_of_kind(ElementKind::Class)
    }

    /// Canonical names of every first-class slot
    #[must_use]
    pub fn get_all_slots(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter_map(Element::as_slot)
            .filter(|s| !s.is_secondary())
            .map(|s| s.name.clone())
            .collect()
    }

    /// Canonical names of every type
    #[must_use]
    pub fn get_all_types(&self) -> Vec<String> {
        self.elements.names_of_kind(ElementKind::Type)
    }

    /// Canonical names of every enum
    #[must_use]
    pub fn get_all_enums(&self) -> Vec<String> {
        self.elements.names_of_kind(ElementKind::Enum)
    }

    /// Descendants of the entity root, the classes usable as node
    /// categories
    #[must_use]
    pub fn get_all_entities(&self) -> Vec<String> {
        self.anchored_descendants(NAMED_THING)
    }

    /// Descendants of the association root
    #[must_use]
    pub fn get_all_associations(&self) -> Vec<String> {
        self.anchored_descendants(ASSOCIATION)
    }

    /// Descendants of the node-property root, secondary slots excluded
    #[must_use]
    pub fn get_all_node_properties(&self) -> Vec<String> {
        self.filter_secondary(self.anchored_descendants(NODE_PROPERTY))
    }

    /// Descendants of the association-slot root, secondary slots
    /// excluded
    #[must_use]
    pub fn get_all_edge_properties(&self) -> Vec<String> {
        self.filter_secondary(self.anchored_descendants(ASSOCIATION_SLOT))
    }

    /// Descendant walk rooted at a well-known anchor name. Schemas that
    /// do not declare the anchor yield nothing rather than a name the
    /// index does not hold.
    fn anchored_descendants(&self, anchor: &str) -> Vec<String> {
        if self.elements.get(anchor).is_none() {
            return Vec::new();
        }
        self.hierarchy.descendants(anchor, true)
    }

    /// First-class slots declared multivalued
    #[must_use]
    pub fn get_all_multivalued_slots(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter_map(Element::as_slot)
            .filter(|s| !s.is_secondary() && s.multivalued == Some(true))
            .map(|s| s.name.clone())
            .collect()
    }

    // ---- hierarchy traversal ----

    /// Ancestors of an element, nearest to farthest.
    ///
    /// `reflexive` keeps the element itself at the head; `mixin` expands
    /// each member of the primary chain with its mixins' own chains;
    /// `formatted` renders results as CURIEs. Elements outside the
    /// class and slot hierarchies yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns `BmtError::InvalidQuery` when the name resolves to no
    /// element
    pub fn get_ancestors(
        &self,
        name: &str,
        reflexive: bool,
        formatted: bool,
        mixin: bool,
    ) -> Result<Vec<String>> {
        let canonical = self
            .resolve(name)
            .ok_or_else(|| BmtError::invalid_query(name))?;
        let Some(element) = self.elements.get(&canonical) else {
            return Err(BmtError::invalid_query(name));
        };
        if !matches!(element.kind(), ElementKind::Class | ElementKind::Slot) {
            return Ok(Vec::new());
        }

        let key = (canonical.clone(), mixin);
        let mut out = self
            .ancestor_cache
            .entry(key)
            .or_insert_with(|| self.hierarchy.ancestors(&self.elements, &canonical, mixin))
            .clone();

        if !reflexive && out.first() == Some(&canonical) {
            out.remove(0);
        }
        if element.kind() == ElementKind::Slot {
            out = self.filter_secondary(out);
        }
        Ok(self.format_all(out, formatted))
    }

    /// Descendants of an element in depth-first preorder.
    ///
    /// `mixin` follows mixin child edges in addition to `is_a` children.
    ///
    /// # Errors
    ///
    /// Returns `BmtError::InvalidQuery` when the name resolves to no
    /// element
    pub fn get_descendants(
        &self,
        name: &str,
        reflexive: bool,
        formatted: bool,
        mixin: bool,
    ) -> Result<Vec<String>> {
        let canonical = self
            .resolve(name)
            .ok_or_else(|| BmtError::invalid_query(name))?;
        let Some(element) = self.elements.get(&canonical) else {
            return Err(BmtError::invalid_query(name));
        };
        if !matches!(element.kind(), ElementKind::Class | ElementKind::Slot) {
            return Ok(Vec::new());
        }

        let key = (canonical.clone(), mixin);
        let mut out = self
            .descendant_cache
            .entry(key)
            .or_insert_with(|| self.hierarchy.descendants(&canonical, mixin))
            .clone();

        if !reflexive && out.first() == Some(&canonical) {
            out.remove(0);
        }
        if element.kind() == ElementKind::Slot {
            out = self.filter_secondary(out);
        }
        Ok(self.format_all(out, formatted))
    }

    /// Direct children of an element: `is_a` children first, then mixin
    /// children when requested. Unresolvable names yield an empty list.
    #[must_use]
    pub fn get_children(&self, name: &str, formatted: bool, mixin: bool) -> Vec<String> {
        let Some(canonical) = self.resolve(name) else {
            return Vec::new();
        };
        let mut out = self.hierarchy.children(&canonical, mixin);
        if self
            .elements
            .get(&canonical)
            .is_some_and(|e| e.kind() == ElementKind::Slot)
        {
            out = self.filter_secondary(out);
        }
        self.format_all(out, formatted)
    }

    /// The `is_a` parent of an element, if any. Mixin parents never
    /// count.
    #[must_use]
    pub fn get_parent(&self, name: &str, formatted: bool) -> Option<String> {
        let canonical = self.resolve(name)?;
        let parent = self.elements.get(&canonical)?.is_a()?.to_string();
        if formatted {
            Some(self.format_name(&parent))
        } else {
            Some(parent)
        }
    }

    /// Number of `is_a` hops from an element to its hierarchy root
    ///
    /// # Errors
    ///
    /// Returns `BmtError::InvalidQuery` when the name resolves to no
    /// element
    pub fn get_element_depth(&self, name: &str) -> Result<usize> {
        let canonical = self
            .resolve(name)
            .ok_or_else(|| BmtError::invalid_query(name))?;
        Ok(HierarchyIndex::depth(&self.elements, &canonical))
    }

    /// Sort element names from most to least specific (deepest in the
    /// `is_a` hierarchy first; ties keep input order). Names that do
    /// not resolve are dropped.
    #[must_use]
    pub fn rank_element_by_specificity(&self, names: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut ranked: Vec<(String, usize)> = names
            .iter()
            .filter_map(|n| self.resolve(n))
            .filter(|c| seen.insert(c.clone()))
            .map(|c| {
                let depth = HierarchyIndex::depth(&self.elements, &c);
                (c, depth)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().map(|(name, _)| name).collect()
    }

    /// The deepest element among the given names, if any resolves
    #[must_use]
    pub fn get_most_specific_element(&self, names: &[String]) -> Option<String> {
        self.rank_element_by_specificity(names).into_iter().next()
    }

    /// The most specific valid category among the given names; falls
    /// back to the entity root when the list is non-empty but carries
    /// no valid category
    #[must_use]
    pub fn get_most_specific_category(&self, names: &[String], formatted: bool) -> Option<String> {
        self.most_specific_in_tree(names, formatted, |n| self.is_category(n), NAMED_THING)
    }

    /// The most specific valid association class among the given names;
    /// falls back to the association root when the list is non-empty
    /// but carries no valid association
    #[must_use]
    pub fn get_most_specific_association(
        &self,
        names: &[String],
        formatted: bool,
    ) -> Option<String> {
        self.most_specific_in_tree(names, formatted, |n| self.is_association(n), ASSOCIATION)
    }

    fn most_specific_in_tree(
        &self,
        names: &[String],
        formatted: bool,
        valid: impl Fn(&str) -> bool,
        root: &str,
    ) -> Option<String> {
        if names.is_empty() {
            return None;
        }
        let candidates: Vec<String> = names.iter().filter(|n| valid(n.as_str())).cloned().collect();
        let picked = match self.get_most_specific_element(&candidates) {
            Some(picked) => picked,
            // the fallback root only applies when the schema declares it
            None => {
                self.elements.get(root)?;
                root.to_string()
            }
        };
        if formatted {
            Some(self.format_name(&picked))
        } else {
            Some(picked)
        }
    }

    // ---- domain and range ----

    /// The declared domain of a slot, optionally widened to the
    /// domain's own ancestors. Unresolvable names yield an empty list.
    #[must_use]
    pub fn get_slot_domain(
        &self,
        slot_name: &str,
        include_ancestors: bool,
        formatted: bool,
        mixin: bool,
    ) -> Vec<String> {
        self.slot_endpoint(slot_name, include_ancestors, formatted, mixin, |s| {
            s.domain.as_deref()
        })
    }

    /// The declared range of a slot, optionally widened to the range's
    /// own ancestors. Unresolvable names yield an empty list.
    #[must_use]
    pub fn get_slot_range(
        &self,
        slot_name: &str,
        include_ancestors: bool,
        formatted: bool,
        mixin: bool,
    ) -> Vec<String> {
        self.slot_endpoint(slot_name, include_ancestors, formatted, mixin, |s| {
            s.range.as_deref()
        })
    }

    fn slot_endpoint(
        &self,
        slot_name: &str,
        include_ancestors: bool,
        formatted: bool,
        mixin: bool,
        select: impl Fn(&bmt_core::SlotDefinition) -> Option<&str>,
    ) -> Vec<String> {
        let Some(canonical) = self.resolve(slot_name) else {
            return Vec::new();
        };
        let Some(slot) = self.elements.get(&canonical).and_then(Element::as_slot) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        if let Some(endpoint) = select(slot) {
            out.push(endpoint.to_string());
            if include_ancestors {
                for anc in self
                    .hierarchy
                    .ancestors(&self.elements, endpoint, mixin)
                    .into_iter()
                    .skip(1)
                {
                    if !out.contains(&anc) {
                        out.push(anc);
                    }
                }
            }
        }
        self.format_all(out, formatted)
    }

    /// First-class slots whose declared domain is the class, or any
    /// ancestor of the class when `check_ancestors` is set
    #[must_use]
    pub fn get_all_slots_with_class_domain(
        &self,
        class_name: &str,
        check_ancestors: bool,
        formatted: bool,
    ) -> Vec<String> {
        self.slots_with_class_endpoint(class_name, check_ancestors, formatted, |s| {
            s.domain.as_deref()
        })
    }

    /// First-class slots whose declared range is the class, or any
    /// ancestor of the class when `check_ancestors` is set
    #[must_use]
    pub fn get_all_slots_with_class_range(
        &self,
        class_name: &str,
        check_ancestors: bool,
        formatted: bool,
    ) -> Vec<String> {
        self.slots_with_class_endpoint(class_name, check_ancestors, formatted, |s| {
            s.range.as_deref()
        })
    }

    /// Predicates among the slots with the class as domain
    #[must_use]
    pub fn get_all_predicates_with_class_domain(
        &self,
        class_name: &str,
        check_ancestors: bool,
        formatted: bool,
    ) -> Vec<String> {
        let slots = self.get_all_slots_with_class_domain(class_name, check_ancestors, false);
        let out = slots.into_iter().filter(|s| self.is_predicate(s)).collect();
        self.format_all(out, formatted)
    }

    /// Predicates among the slots with the class as range
    #[must_use]
    pub fn get_all_predicates_with_class_range(
        &self,
        class_name: &str,
        check_ancestors: bool,
        formatted: bool,
    ) -> Vec<String> {
        let slots = self.get_all_slots_with_class_range(class_name, check_ancestors, false);
        let out = slots.into_iter().filter(|s| self.is_predicate(s)).collect();
        self.format_all(out, formatted)
    }

    /// Non-predicate slots with the class as domain
    #[must_use]
    pub fn get_all_properties_with_class_domain(
        &self,
        class_name: &str,
        check_ancestors: bool,
        formatted: bool,
    ) -> Vec<String> {
        let slots = self.get_all_slots_with_class_domain(class_name, check_ancestors, false);
        let out = slots
            .into_iter()
            .filter(|s| !self.is_predicate(s))
            .collect();
        self.format_all(out, formatted)
    }

    /// Non-predicate slots with the class as range
    #[must_use]
    pub fn get_all_properties_with_class_range(
        &self,
        class_name: &str,
        check_ancestors: bool,
        formatted: bool,
    ) -> Vec<String> {
        let slots = self.get_all_slots_with_class_range(class_name, check_ancestors, false);
        let out = slots
            .into_iter()
            .filter(|s| !self.is_predicate(s))
            .collect();
        self.format_all(out, formatted)
    }

    fn slots_with_class_endpoint(
        &self,
        class_name: &str,
        check_ancestors: bool,
        formatted: bool,
        select: impl Fn(&bmt_core::SlotDefinition) -> Option<&str>,
    ) -> Vec<String> {
        let Some(canonical) = self.resolve(class_name) else {
            return Vec::new();
        };
        let targets: Vec<String> = if check_ancestors {
            self.hierarchy.ancestors(&self.elements, &canonical, true)
        } else {
            vec![canonical]
        };
        let mut out = Vec::new();
        for element in self.elements.iter() {
            if let Some(slot) = element.as_slot() {
                if slot.is_secondary() {
                    continue;
                }
                if select(slot).is_some_and(|endpoint| targets.iter().any(|t| t == endpoint)) {
                    out.push(slot.name.clone());
                }
            }
        }
        self.format_all(out, formatted)
    }

    /// The value type for a slot: its declared range, the schema's
    /// default range, or `uriorcurie` as the last resort
    #[must_use]
    pub fn get_value_type_for_slot(&self, slot_name: &str) -> Option<String> {
        let canonical = self.resolve(slot_name)?;
        let slot = self.elements.get(&canonical).and_then(Element::as_slot)?;
        Some(
            slot.range
                .clone()
                .or_else(|| self.schema.default_range.clone())
                .unwrap_or_else(|| "uriorcurie".to_string()),
        )
    }

    // ---- classification predicates ----

    /// True when the name resolves to a class under the entity root
    #[must_use]
    pub fn is_category(&self, name: &str) -> bool {
        self.is_in_tree(name, ElementKind::Class, NAMED_THING)
    }

    /// True when the name resolves to a slot under the predicate root
    #[must_use]
    pub fn is_predicate(&self, name: &str) -> bool {
        self.is_in_tree(name, ElementKind::Slot, RELATED_TO)
    }

    /// True when the name resolves to a class under the association
    /// root
    #[must_use]
    pub fn is_association(&self, name: &str) -> bool {
        self.is_in_tree(name, ElementKind::Class, ASSOCIATION)
    }

    /// True when the name resolves to a slot under the node-property
    /// root
    #[must_use]
    pub fn is_node_property(&self, name: &str) -> bool {
        self.is_in_tree(name, ElementKind::Slot, NODE_PROPERTY)
    }

    /// True when the name resolves to a slot under the association-slot
    /// root
    #[must_use]
    pub fn is_association_slot(&self, name: &str) -> bool {
        self.is_in_tree(name, ElementKind::Slot, ASSOCIATION_SLOT)
    }

    fn is_in_tree(&self, name: &str, kind: ElementKind, root: &str) -> bool {
        let Some(canonical) = self.resolve(name) else {
            return false;
        };
        if self.elements.get(&canonical).map(Element::kind) != Some(kind) {
            return false;
        }
        self.get_ancestors(&canonical, true, false, true)
            .map(|ancs| ancs.iter().any(|a| a == root))
            .unwrap_or(false)
    }

    /// True when the name resolves to an element declared as a mixin
    #[must_use]
    pub fn is_mixin(&self, name: &str) -> bool {
        self.get_element(name).is_some_and(Element::is_mixin)
    }

    /// True when the name resolves to a symmetric slot
    #[must_use]
    pub fn is_symmetric(&self, name: &str) -> bool {
        self.get_element(name)
            .and_then(Element::as_slot)
            .is_some_and(|s| s.symmetric == Some(true))
    }

    /// True when the name resolves to an enum
    #[must_use]
    pub fn is_enum(&self, name: &str) -> bool {
        self.get_element(name)
            .is_some_and(|e| e.kind() == ElementKind::Enum)
    }

    /// True when the value is declared in the enum's permissible values
    #[must_use]
    pub fn is_permissible_value_of_enum(&self, enum_name: &str, value: &str) -> bool {
        self.get_element(enum_name)
            .and_then(Element::as_enum)
            .is_some_and(|e| e.permissible_values.contains_key(value))
    }

    /// True when the element is declared in the given subset
    #[must_use]
    pub fn in_subset(&self, name: &str, subset: &str) -> bool {
        self.get_element(name)
            .is_some_and(|e| e.in_subset().iter().any(|s| s == subset))
    }

    /// True when the slot declares an inverse
    #[must_use]
    pub fn has_inverse(&self, name: &str) -> bool {
        self.get_element(name)
            .and_then(Element::as_slot)
            .is_some_and(|s| s.inverse.is_some())
    }

    /// The inverse of a slot: its declared inverse, or the slot that
    /// declares it as an inverse
    #[must_use]
    pub fn get_inverse(&self, slot_name: &str) -> Option<String> {
        let canonical = self.resolve(slot_name)?;
        let slot = self.elements.get(&canonical).and_then(Element::as_slot)?;
        if let Some(inverse) = &slot.inverse {
            return Some(inverse.clone());
        }
        self.elements
            .iter()
            .filter_map(Element::as_slot)
            .find(|other| other.inverse.as_deref() == Some(canonical.as_str()))
            .map(|other| other.name.clone())
    }

    /// The inverse of a predicate; a symmetric predicate with no
    /// declared inverse is its own
    #[must_use]
    pub fn get_inverse_predicate(&self, predicate: &str, formatted: bool) -> Option<String> {
        let canonical = self.resolve(predicate)?;
        if !self.is_predicate(&canonical) {
            return None;
        }
        let inverse = self.get_inverse(&canonical).or_else(|| {
            self.is_symmetric(&canonical).then(|| canonical.clone())
        })?;
        if formatted {
            Some(self.format_name(&inverse))
        } else {
            Some(inverse)
        }
    }

    /// True when the predicate carries the canonical-direction
    /// annotation
    #[must_use]
    pub fn is_translator_canonical_predicate(&self, name: &str) -> bool {
        let Some(canonical) = self.resolve(name) else {
            return false;
        };
        if !self.is_predicate(&canonical) {
            return false;
        }
        self.elements
            .get(&canonical)
            .and_then(Element::annotations)
            .is_some_and(|annotations| {
                annotations
                    .get(well_known::CANONICAL_PREDICATE)
                    .or_else(|| annotations.get("canonical_predicate"))
                    .is_some_and(annotation_is_true)
            })
    }

    /// True when the first slot sits under the second in the slot
    /// hierarchy (reflexive, mixins included)
    #[must_use]
    pub fn is_subproperty_of(&self, name: &str, ancestor: &str) -> bool {
        let Some(target) = self.resolve(ancestor) else {
            return false;
        };
        self.get_ancestors(name, true, false, true)
            .map(|ancs| ancs.iter().any(|a| a == &target))
            .unwrap_or(false)
    }

    /// True when the triple is admissible: subject and object are valid
    /// categories, the predicate is a valid predicate, and any declared
    /// domain and range of the predicate admit the subject and object
    /// (mixin-contributed ancestry counts)
    #[must_use]
    pub fn validate_edge(&self, subject: &str, predicate: &str, object: &str) -> bool {
        if !(self.is_category(subject) && self.is_predicate(predicate) && self.is_category(object))
        {
            return false;
        }
        let Some(slot) = self.get_element(predicate).and_then(Element::as_slot) else {
            return false;
        };
        if let Some(domain) = &slot.domain {
            if !self.class_within(subject, domain) {
                return false;
            }
        }
        if let Some(range) = &slot.range {
            if !self.class_within(object, range) {
                return false;
            }
        }
        true
    }

    /// True when the class sits at or below the target in the class
    /// hierarchy, mixins included
    fn class_within(&self, name: &str, target: &str) -> bool {
        let Some(target) = self.resolve(target) else {
            return false;
        };
        self.get_ancestors(name, true, false, true)
            .map(|ancs| ancs.iter().any(|a| a == &target))
            .unwrap_or(false)
    }

    // ---- mapping lookups ----

    /// Every element carrying the identifier in any mapping bucket,
    /// sorted by name
    #[must_use]
    pub fn get_all_elements_by_mapping(&self, identifier: &str) -> Vec<String> {
        self.mappings
            .all_elements(&self.namespaces, identifier)
            .into_iter()
            .collect()
    }

    /// The single best element for an identifier.
    ///
    /// With `most_specific`, only the most specific non-empty mapping
    /// bucket is consulted; otherwise every bucket contributes. One
    /// candidate wins outright; several candidates are reduced to the
    /// most general ancestor they all share within the candidate set,
    /// or `None` when they share none.
    #[must_use]
    pub fn get_element_by_mapping(
        &self,
        identifier: &str,
        most_specific: bool,
        formatted: bool,
        mixin: bool,
    ) -> Option<String> {
        let candidates = if most_specific {
            self.mappings.most_specific(&self.namespaces, identifier)
        } else {
            self.mappings.all_elements(&self.namespaces, identifier)
        };
        let picked = self.pick_mapped_element(&candidates, mixin)?;
        if formatted {
            Some(self.format_name(&picked))
        } else {
            Some(picked)
        }
    }

    /// Every element carrying the identifier in one mapping bucket, in
    /// name order. The single-element getters below collapse this set
    /// through the common-ancestor policy.
    #[must_use]
    pub fn get_all_elements_by_mapping_kind(
        &self,
        kind: MappingKind,
        identifier: &str,
    ) -> Vec<String> {
        self.mappings
            .elements_for(kind, &self.namespaces, identifier)
            .into_iter()
            .collect()
    }

    /// Elements carrying the identifier as an exact mapping
    #[must_use]
    pub fn get_element_by_exact_mapping(&self, identifier: &str, formatted: bool) -> Option<String> {
        self.element_by_bucket(MappingKind::Exact, identifier, formatted)
    }

    /// Elements carrying the identifier as a close mapping
    #[must_use]
    pub fn get_element_by_close_mapping(&self, identifier: &str, formatted: bool) -> Option<String> {
        self.element_by_bucket(MappingKind::Close, identifier, formatted)
    }

    /// Elements carrying the identifier as a related mapping
    #[must_use]
    pub fn get_element_by_related_mapping(
        &self,
        identifier: &str,
        formatted: bool,
    ) -> Option<String> {
        self.element_by_bucket(MappingKind::Related, identifier, formatted)
    }

    /// Elements carrying the identifier as a narrow mapping
    #[must_use]
    pub fn get_element_by_narrow_mapping(
        &self,
        identifier: &str,
        formatted: bool,
    ) -> Option<String> {
        self.element_by_bucket(MappingKind::Narrow, identifier, formatted)
    }

    /// Elements carrying the identifier as a broad mapping
    #[must_use]
    pub fn get_element_by_broad_mapping(&self, identifier: &str, formatted: bool) -> Option<String> {
        self.element_by_bucket(MappingKind::Broad, identifier, formatted)
    }

    fn element_by_bucket(
        &self,
        kind: MappingKind,
        identifier: &str,
        formatted: bool,
    ) -> Option<String> {
        let candidates = self
            .mappings
            .elements_for(kind, &self.namespaces, identifier);
        let picked = self.pick_mapped_element(&candidates, true)?;
        if formatted {
            Some(self.format_name(&picked))
        } else {
            Some(picked)
        }
    }

    /// Reduce a candidate set to one element: a single candidate wins,
    /// several collapse to the most general ancestor common to all of
    /// them within the set, walked farthest-first
    fn pick_mapped_element(&self, candidates: &BTreeSet<String>, mixin: bool) -> Option<String> {
        match candidates.len() {
            0 => None,
            1 => candidates.iter().next().cloned(),
            _ => {
                // For each candidate, its ancestors restricted to the
                // candidate set, farthest first
                let restricted: Vec<Vec<String>> = candidates
                    .iter()
                    .map(|c| {
                        self.hierarchy
                            .ancestors(&self.elements, c, mixin)
                            .into_iter()
                            .rev()
                            .filter(|a| candidates.contains(a))
                            .collect()
                    })
                    .collect();
                let mut common: Option<BTreeSet<&String>> = None;
                for list in restricted.iter().filter(|l| !l.is_empty()) {
                    let set: BTreeSet<&String> = list.iter().collect();
                    common = Some(match common {
                        None => set,
                        Some(prev) => prev.intersection(&set).copied().collect(),
                    });
                }
                let common = common?;
                let picked = restricted
                    .first()?
                    .iter()
                    .find(|a| common.contains(a))
                    .cloned();
                if picked.is_none() {
                    debug!(
                        candidates = ?candidates,
                        "ambiguous mapping: candidates share no common ancestor"
                    );
                }
                picked
            }
        }
    }

    /// Elements declaring the identifier's prefix among their
    /// identifier namespaces
    #[must_use]
    pub fn get_element_by_prefix(&self, identifier: &str) -> Vec<String> {
        let prefix = identifier.split(':').next().unwrap_or(identifier);
        self.mappings
            .elements_with_prefix(prefix)
            .into_iter()
            .collect()
    }

    // ---- permissible values ----

    /// The `is_a` parent of a permissible value within an enum
    #[must_use]
    pub fn get_permissible_value_parent(&self, enum_name: &str, value: &str) -> Option<String> {
        self.get_element(enum_name)
            .and_then(Element::as_enum)?
            .permissible_value_parent(value)
            .map(ToString::to_string)
    }

    /// Direct `is_a` children of a permissible value within an enum
    #[must_use]
    pub fn get_permissible_value_children(&self, enum_name: &str, value: &str) -> Vec<String> {
        let Some(def) = self.get_element(enum_name).and_then(Element::as_enum) else {
            return Vec::new();
        };
        def.permissible_values
            .iter()
            .filter(|(_, pv)| {
                pv.as_ref()
                    .and_then(|pv| pv.is_a.as_deref())
                    .is_some_and(|parent| parent == value)
            })
            .map(|(text, _)| text.clone())
            .collect()
    }

    /// Reflexive `is_a` chain of a permissible value, nearest first
    ///
    /// # Errors
    ///
    /// Returns `BmtError::InvalidQuery` when the enum does not resolve
    /// or does not declare the value
    pub fn get_permissible_value_ancestors(
        &self,
        enum_name: &str,
        value: &str,
    ) -> Result<Vec<String>> {
        let def = self
            .get_element(enum_name)
            .and_then(Element::as_enum)
            .ok_or_else(|| BmtError::invalid_query(enum_name))?;
        if !def.permissible_values.contains_key(value) {
            return Err(BmtError::invalid_query(value));
        }
        let mut out = Vec::new();
        let mut current = Some(value.to_string());
        while let Some(v) = current {
            if out.contains(&v) {
                break;
            }
            current = def.permissible_value_parent(&v).map(ToString::to_string);
            out.push(v);
        }
        Ok(out)
    }

    /// Reflexive `is_a` descendants of a permissible value in
    /// depth-first preorder
    ///
    /// # Errors
    ///
    /// Returns `BmtError::InvalidQuery` when the enum does not resolve
    /// or does not declare the value
    pub fn get_permissible_value_descendants(
        &self,
        enum_name: &str,
        value: &str,
    ) -> Result<Vec<String>> {
        let def = self
            .get_element(enum_name)
            .and_then(Element::as_enum)
            .ok_or_else(|| BmtError::invalid_query(enum_name))?;
        if !def.permissible_values.contains_key(value) {
            return Err(BmtError::invalid_query(value));
        }
        let mut out = Vec::new();
        let mut stack = vec![value.to_string()];
        while let Some(v) = stack.pop() {
            if out.contains(&v) {
                continue;
            }
            let children = self.get_permissible_value_children(enum_name, &v);
            out.push(v);
            // preorder: nearest child expanded next
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }
        Ok(out)
    }

    // ---- formatting ----

    /// Render a canonical element name in its CURIE display form; names
    /// outside the index pass through unchanged
    #[must_use]
    pub fn format_name(&self, name: &str) -> String {
        self.elements.get(name).map_or_else(
            || name.to_string(),
            |element| format_element(element, &self.config.default_prefix),
        )
    }

    fn format_all(&self, names: Vec<String>, formatted: bool) -> Vec<String> {
        if !formatted {
            return names;
        }
        names.iter().map(|n| self.format_name(n)).collect()
    }

    fn filter_secondary(&self, names: Vec<String>) -> Vec<String> {
        names
            .into_iter()
            .filter(|n| {
                self.elements
                    .get(n)
                    .is_none_or(|e| !e.is_secondary_slot())
            })
            .collect()
    }
}

fn annotation_is_true(value: &AnnotationValue) -> bool {
    match value {
        AnnotationValue::Bool(b) => *b,
        AnnotationValue::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}
