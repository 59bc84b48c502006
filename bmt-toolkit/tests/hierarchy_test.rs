//! Hierarchy traversal over the test model

mod common;

use bmt_toolkit::BmtError;
use pretty_assertions::assert_eq;

#[test]
fn test_ancestors_expand_mixins_one_level() {
    let toolkit = common::toolkit();
    let ancestors = toolkit
        .get_ancestors("gene", true, false, true)
        .expect("gene resolves");
    assert_eq!(
        ancestors,
        [
            "gene",
            "biological entity",
            "named thing",
            "entity",
            "gene or gene product",
            "macromolecular machine mixin",
        ]
    );
}

#[test]
fn test_ancestors_without_mixins() {
    let toolkit = common::toolkit();
    let ancestors = toolkit
        .get_ancestors("gene", true, false, false)
        .expect("gene resolves");
    assert_eq!(
        ancestors,
        ["gene", "biological entity", "named thing", "entity"]
    );
}

#[test]
fn test_non_reflexive_ancestors_drop_the_head() {
    let toolkit = common::toolkit();
    let ancestors = toolkit
        .get_ancestors("gene", false, false, false)
        .expect("gene resolves");
    assert_eq!(ancestors, ["biological entity", "named thing", "entity"]);
}

#[test]
fn test_formatted_ancestors_render_curies() {
    let toolkit = common::toolkit();
    let ancestors = toolkit
        .get_ancestors("gene", true, true, false)
        .expect("gene resolves");
    assert_eq!(
        ancestors,
        [
            "biolink:Gene",
            "biolink:BiologicalEntity",
            "biolink:NamedThing",
            "biolink:Entity",
        ]
    );
}

#[test]
fn test_ancestors_of_unknown_name_is_an_error() {
    let toolkit = common::toolkit();
    let err = toolkit
        .get_ancestors("not in the model", true, false, true)
        .unwrap_err();
    assert!(matches!(err, BmtError::InvalidQuery(_)));
}

#[test]
fn test_ancestors_of_a_type_are_empty() {
    let toolkit = common::toolkit();
    let ancestors = toolkit
        .get_ancestors("category type", true, false, true)
        .expect("type resolves");
    assert!(ancestors.is_empty());
}

#[test]
fn test_descendants_follow_mixin_children() {
    let toolkit = common::toolkit();
    let descendants = toolkit
        .get_descendants("macromolecular machine mixin", true, false, true)
        .expect("mixin resolves");
    assert_eq!(
        descendants,
        ["macromolecular machine mixin", "gene or gene product", "gene"]
    );

    let without_mixins = toolkit
        .get_descendants("macromolecular machine mixin", true, false, false)
        .expect("mixin resolves");
    assert_eq!(
        without_mixins,
        ["macromolecular machine mixin", "gene or gene product"]
    );
}

#[test]
fn test_descendants_of_a_leaf_is_just_itself() {
    let toolkit = common::toolkit();
    let descendants = toolkit
        .get_descendants("disease", true, false, true)
        .expect("disease resolves");
    assert_eq!(descendants, ["disease"]);

    let non_reflexive = toolkit
        .get_descendants("disease", false, false, true)
        .expect("disease resolves");
    assert!(non_reflexive.is_empty());
}

#[test]
fn test_descendants_of_unknown_name_is_an_error() {
    let toolkit = common::toolkit();
    assert!(toolkit
        .get_descendants("not in the model", true, false, true)
        .is_err());
}

#[test]
fn test_slot_descendants_exclude_secondary() {
    let toolkit = common::toolkit();
    let descendants = toolkit
        .get_descendants("subject", true, false, true)
        .expect("subject resolves");
    assert_eq!(descendants, ["subject"]);
}

#[test]
fn test_children_order_isa_before_mixin() {
    let toolkit = common::toolkit();
    assert_eq!(
        toolkit.get_children("biological entity", false, true),
        ["gene", "phenotypic feature", "disease"]
    );
    assert_eq!(
        toolkit.get_children("gene or gene product", false, true),
        ["gene"]
    );
    assert!(toolkit.get_children("gene or gene product", false, false).is_empty());
    assert!(toolkit.get_children("unknown", false, true).is_empty());
}

#[test]
fn test_parent_is_isa_only() {
    let toolkit = common::toolkit();
    assert_eq!(
        toolkit.get_parent("gene", false).as_deref(),
        Some("biological entity")
    );
    assert_eq!(
        toolkit.get_parent("gene", true).as_deref(),
        Some("biolink:BiologicalEntity")
    );
    assert!(toolkit.get_parent("entity", false).is_none());
}

#[test]
fn test_element_depth() {
    let toolkit = common::toolkit();
    assert_eq!(toolkit.get_element_depth("entity").expect("resolves"), 0);
    assert_eq!(toolkit.get_element_depth("gene").expect("resolves"), 3);
    assert!(toolkit.get_element_depth("unknown").is_err());
}

#[test]
fn test_rank_element_by_specificity() {
    let toolkit = common::toolkit();
    let ranked = toolkit.rank_element_by_specificity(&[
        "named thing".to_string(),
        "gene".to_string(),
        "biological entity".to_string(),
        "not a thing".to_string(),
    ]);
    assert_eq!(ranked, ["gene", "biological entity", "named thing"]);
}

#[test]
fn test_rank_deduplicates_repeated_names() {
    let toolkit = common::toolkit();
    // the repeat is non-adjacent and arrives under a different spelling
    let ranked = toolkit.rank_element_by_specificity(&[
        "gene".to_string(),
        "named thing".to_string(),
        "biolink:Gene".to_string(),
    ]);
    assert_eq!(ranked, ["gene", "named thing"]);
}

#[test]
fn test_most_specific_category() {
    let toolkit = common::toolkit();
    let picked = toolkit.get_most_specific_category(
        &["biolink:NamedThing".to_string(), "biolink:Gene".to_string()],
        true,
    );
    assert_eq!(picked.as_deref(), Some("biolink:Gene"));

    // nothing valid in a non-empty list falls back to the root
    let fallback = toolkit.get_most_specific_category(&["not a category".to_string()], false);
    assert_eq!(fallback.as_deref(), Some("named thing"));

    assert!(toolkit.get_most_specific_category(&[], false).is_none());
}

#[test]
fn test_most_specific_association() {
    let toolkit = common::toolkit();
    let picked = toolkit.get_most_specific_association(
        &[
            "association".to_string(),
            "gene to gene association".to_string(),
        ],
        false,
    );
    assert_eq!(picked.as_deref(), Some("gene to gene association"));
}

#[test]
fn test_traversals_are_stable_across_repeated_queries() {
    let toolkit = common::toolkit();
    let first = toolkit.get_ancestors("gene", true, false, true).expect("resolves");
    let second = toolkit.get_ancestors("gene", true, false, true).expect("resolves");
    assert_eq!(first, second);
}
