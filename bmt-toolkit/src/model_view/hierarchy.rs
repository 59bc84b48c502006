//! Inheritance hierarchy index
//!
//! Upward traversal (ancestors) follows `is_a` pointers stored on the
//! elements themselves; downward traversal (children, descendants) needs
//! the inverted edges built here. Mixin edges are kept separate from
//! `is_a` edges so every traversal can include or exclude them.

use bmt_core::{BmtError, Element, Result};
use indexmap::IndexMap;
use std::collections::HashSet;

use super::ElementIndex;

/// Inverted child edges over the `is_a` and mixin graphs
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    isa_children: IndexMap<String, Vec<String>>,
    mixin_children: IndexMap<String, Vec<String>>,
}

impl HierarchyIndex {
    /// Build the child indices, validating the hierarchy as a whole.
    ///
    /// # Errors
    ///
    /// Returns `BmtError::MalformedSchema` when an `is_a` or mixin
    /// reference points at a missing element or an element of another
    /// kind, or when the `is_a` graph contains a cycle.
    pub fn build(index: &ElementIndex) -> Result<Self> {
        let mut hierarchy = Self::default();

        for element in index.iter() {
            let name = element.name();
            if let Some(parent) = element.is_a() {
                Self::check_reference(index, element, parent, "is_a")?;
                hierarchy
                    .isa_children
                    .entry(parent.to_string())
                    .or_default()
                    .push(name.to_string());
            }
            for mixin in element.mixins() {
                Self::check_reference(index, element, mixin, "mixins")?;
                hierarchy
                    .mixin_children
                    .entry(mixin.clone())
                    .or_default()
                    .push(name.to_string());
            }
        }

        hierarchy.check_cycles(index)?;
        Ok(hierarchy)
    }

    fn check_reference(
        index: &ElementIndex,
        element: &Element,
        target: &str,
        field: &str,
    ) -> Result<()> {
        match index.get(target) {
            None => Err(BmtError::malformed_element(
                format!("{field} references unknown element '{target}'"),
                element.name(),
            )),
            Some(found) if found.kind() != element.kind() => Err(BmtError::malformed_element(
                format!("{field} references '{target}' of a different kind"),
                element.name(),
            )),
            Some(_) => Ok(()),
        }
    }

    fn check_cycles(&self, index: &ElementIndex) -> Result<()> {
        let mut cleared: HashSet<&str> = HashSet::new();
        for element in index.iter() {
            let mut seen: Vec<&str> = Vec::new();
            let mut current = Some(element.name());
            while let Some(name) = current {
                if cleared.contains(name) {
                    break;
                }
                if seen.contains(&name) {
                    return Err(BmtError::malformed_element(
                        "cycle in is_a chain",
                        name,
                    ));
                }
                seen.push(name);
                current = index.get(name).and_then(Element::is_a);
            }
            cleared.extend(seen);
        }
        Ok(())
    }

    /// Reflexive `is_a` chain from an element up to its root, nearest
    /// parent first
    #[must_use]
    pub fn isa_chain(index: &ElementIndex, name: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut current = index.get(name);
        while let Some(element) = current {
            chain.push(element.name().to_string());
            current = element.is_a().and_then(|parent| index.get(parent));
        }
        chain
    }

    /// Reflexive ancestors of an element, nearest to farthest.
    ///
    /// With `mixin` set, every member of the primary `is_a` chain also
    /// contributes the reflexive `is_a` chains of its declared mixins,
    /// appended after the primary chain in declaration order and
    /// deduplicated first-seen. Mixin expansion goes one level deep:
    /// mixins of mixins do not contribute.
    #[must_use]
    pub fn ancestors(&self, index: &ElementIndex, name: &str, mixin: bool) -> Vec<String> {
        let mut out = Self::isa_chain(index, name);
        if !mixin {
            return out;
        }
        let primary_len = out.len();
        for i in 0..primary_len {
            let Some(element) = index.get(&out[i]) else {
                continue;
            };
            let mixins: Vec<String> = element.mixins().to_vec();
            for mx in mixins {
                for anc in Self::isa_chain(index, &mx) {
                    if !out.contains(&anc) {
                        out.push(anc);
                    }
                }
            }
        }
        out
    }

    /// Direct children of an element: `is_a` children first, then mixin
    /// children when requested, each in schema declaration order
    #[must_use]
    pub fn children(&self, name: &str, mixin: bool) -> Vec<String> {
        let mut out: Vec<String> = self.isa_children.get(name).cloned().unwrap_or_default();
        if mixin {
            if let Some(via_mixin) = self.mixin_children.get(name) {
                for child in via_mixin {
                    if !out.contains(child) {
                        out.push(child.clone());
                    }
                }
            }
        }
        out
    }

    /// Reflexive descendants of an element in depth-first preorder,
    /// deduplicated first-seen
    #[must_use]
    pub fn descendants(&self, name: &str, mixin: bool) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_descendants(name, mixin, &mut out);
        out
    }

    fn collect_descendants(&self, name: &str, mixin: bool, out: &mut Vec<String>) {
        if out.iter().any(|n| n == name) {
            return;
        }
        out.push(name.to_string());
        for child in self.children(name, mixin) {
            self.collect_descendants(&child, mixin, out);
        }
    }

    /// Number of `is_a` hops from an element to its hierarchy root
    #[must_use]
    pub fn depth(index: &ElementIndex, name: &str) -> usize {
        Self::isa_chain(index, name).len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmt_core::{ClassDefinition, SchemaDefinition};
    use pretty_assertions::assert_eq;

    fn class(name: &str, is_a: Option<&str>, mixins: &[&str], mixin: bool) -> ClassDefinition {
        ClassDefinition {
            name: name.to_string(),
            is_a: is_a.map(ToString::to_string),
            mixins: mixins.iter().map(ToString::to_string).collect(),
            mixin: mixin.then_some(true),
            ..Default::default()
        }
    }

    fn build_index(classes: Vec<ClassDefinition>) -> ElementIndex {
        let mut schema = SchemaDefinition::default();
        for c in classes {
            schema.classes.insert(c.name.clone(), c);
        }
        ElementIndex::from_schema(&schema)
    }

    fn gene_model() -> ElementIndex {
        build_index(vec![
            class("entity", None, &[], false),
            class("named thing", Some("entity"), &[], false),
            class("biological entity", Some("named thing"), &[], false),
            class("macromolecular machine mixin", None, &[], true),
            class(
                "gene or gene product",
                Some("macromolecular machine mixin"),
                &[],
                true,
            ),
            class(
                "gene",
                Some("biological entity"),
                &["gene or gene product"],
                false,
            ),
        ])
    }

    #[test]
    fn test_ancestors_with_mixins() {
        let index = gene_model();
        let hierarchy = HierarchyIndex::build(&index).expect("valid");
        assert_eq!(
            hierarchy.ancestors(&index, "gene", true),
            [
                "gene",
                "biological entity",
                "named thing",
                "entity",
                "gene or gene product",
                "macromolecular machine mixin",
            ]
        );
        assert_eq!(
            hierarchy.ancestors(&index, "gene", false),
            ["gene", "biological entity", "named thing", "entity"]
        );
    }

    #[test]
    fn test_descendants_follow_mixin_children() {
        let index = gene_model();
        let hierarchy = HierarchyIndex::build(&index).expect("valid");
        let desc = hierarchy.descendants("macromolecular machine mixin", true);
        assert_eq!(desc, ["macromolecular machine mixin", "gene or gene product", "gene"]);

        let no_mixin = hierarchy.descendants("macromolecular machine mixin", false);
        assert_eq!(
            no_mixin,
            ["macromolecular machine mixin", "gene or gene product"]
        );
    }

    #[test]
    fn test_depth() {
        let index = gene_model();
        assert_eq!(HierarchyIndex::depth(&index, "entity"), 0);
        assert_eq!(HierarchyIndex::depth(&index, "gene"), 3);
    }

    #[test]
    fn test_rejects_cycle() {
        let index = build_index(vec![
            class("a", Some("b"), &[], false),
            class("b", Some("a"), &[], false),
        ]);
        let err = HierarchyIndex::build(&index).unwrap_err();
        assert!(matches!(err, BmtError::MalformedSchema { .. }));
    }

    #[test]
    fn test_rejects_dangling_parent() {
        let index = build_index(vec![class("a", Some("ghost"), &[], false)]);
        let err = HierarchyIndex::build(&index).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }
}
