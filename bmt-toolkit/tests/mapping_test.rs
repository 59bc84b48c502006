//! Mapping lookups over the test model

mod common;

use bmt_toolkit::MappingKind;
use pretty_assertions::assert_eq;

#[test]
fn test_all_elements_by_mapping() {
    let toolkit = common::toolkit();
    assert_eq!(
        toolkit.get_all_elements_by_mapping("RO:0002410"),
        ["causes", "contributes to"]
    );
}

#[test]
fn test_curie_and_iri_spellings_agree() {
    let toolkit = common::toolkit();
    assert_eq!(
        toolkit.get_all_elements_by_mapping("RO:0002410"),
        toolkit.get_all_elements_by_mapping("http://purl.obolibrary.org/obo/RO_0002410")
    );
}

#[test]
fn test_most_specific_mapping_prefers_exact_over_narrow() {
    let toolkit = common::toolkit();
    let picked = toolkit.get_element_by_mapping("RO:0002410", true, false, true);
    assert_eq!(picked.as_deref(), Some("causes"));
}

#[test]
fn test_ambiguous_mapping_collapses_to_common_ancestor() {
    let toolkit = common::toolkit();
    // both causes and contributes to carry this related mapping; the
    // common ancestor within the candidate set wins
    let picked = toolkit.get_element_by_mapping("SEMMEDDB:AFFECTS", false, false, true);
    assert_eq!(picked.as_deref(), Some("contributes to"));
}

#[test]
fn test_unrelated_candidates_yield_none() {
    let toolkit = common::toolkit();
    // name and subject share this broad mapping but sit in unrelated
    // slot hierarchies, so there is no common ancestor to return
    assert_eq!(
        toolkit.get_all_elements_by_mapping("UMLS:C0027365"),
        ["name", "subject"]
    );
    assert!(toolkit
        .get_element_by_mapping("UMLS:C0027365", false, false, true)
        .is_none());
}

#[test]
fn test_formatted_mapping_result() {
    let toolkit = common::toolkit();
    let picked = toolkit.get_element_by_mapping("RO:0002410", true, true, true);
    assert_eq!(picked.as_deref(), Some("biolink:causes"));
}

#[test]
fn test_exact_mapping_bucket() {
    let toolkit = common::toolkit();
    assert_eq!(
        toolkit
            .get_element_by_exact_mapping("MONDO:0000001", false)
            .as_deref(),
        Some("disease")
    );
    assert_eq!(
        toolkit
            .get_element_by_exact_mapping("SO:0000704", true)
            .as_deref(),
        Some("biolink:Gene")
    );
    assert!(toolkit
        .get_element_by_exact_mapping("SEMMEDDB:AFFECTS", false)
        .is_none());
}

#[test]
fn test_all_elements_in_one_mapping_bucket() {
    let toolkit = common::toolkit();
    // both predicates carry the identifier as a related mapping; the
    // set-valued query keeps them all instead of collapsing
    assert_eq!(
        toolkit.get_all_elements_by_mapping_kind(MappingKind::Related, "SEMMEDDB:AFFECTS"),
        ["causes", "contributes to"]
    );
    assert_eq!(
        toolkit.get_all_elements_by_mapping_kind(MappingKind::Exact, "SO:0000704"),
        ["gene"]
    );
    assert!(toolkit
        .get_all_elements_by_mapping_kind(MappingKind::Broad, "XX:404")
        .is_empty());
}

#[test]
fn test_narrow_mapping_bucket() {
    let toolkit = common::toolkit();
    assert_eq!(
        toolkit
            .get_element_by_narrow_mapping("RO:0002410", false)
            .as_deref(),
        Some("contributes to")
    );
}

#[test]
fn test_element_uri_lands_in_general_bucket() {
    let toolkit = common::toolkit();
    let picked = toolkit.get_element_by_mapping("biolink:Gene", false, false, true);
    assert_eq!(picked.as_deref(), Some("gene"));
}

#[test]
fn test_unknown_identifier_maps_to_nothing() {
    let toolkit = common::toolkit();
    assert!(toolkit.get_all_elements_by_mapping("XX:404").is_empty());
    assert!(toolkit.get_element_by_mapping("XX:404", true, false, true).is_none());
}

#[test]
fn test_element_by_prefix() {
    let toolkit = common::toolkit();
    assert_eq!(toolkit.get_element_by_prefix("NCBIGene:84570"), ["gene"]);
    assert_eq!(toolkit.get_element_by_prefix("ENSEMBL:ENSG00000157764"), ["gene"]);
    assert!(toolkit.get_element_by_prefix("CHEBI:1234").is_empty());
}
