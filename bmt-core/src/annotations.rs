//! Annotation support for schema elements
//!
//! Annotations are arbitrary key-value pairs attached to schema elements.
//! The Biolink model uses them for curation markers such as
//! `biolink:canonical_predicate`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value types for annotations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnnotationValue {
    /// String value
    String(String),
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(serde_json::Number),
    /// Array of values
    Array(Vec<AnnotationValue>),
    /// Object/map of values
    Object(IndexMap<String, AnnotationValue>),
    /// Null value
    Null,
}

/// A collection of annotations, keyed by tag
pub type Annotations = IndexMap<String, AnnotationValue>;

/// Well-known annotation tags in the Biolink model
pub mod well_known {
    /// Marks a predicate as the canonical direction of an inverse pair
    pub const CANONICAL_PREDICATE: &str = "biolink:canonical_predicate";

    /// Marks an association slot as denormalized
    pub const DENORMALIZED: &str = "biolink:denormalized";
}

impl From<String> for AnnotationValue {
    fn from(s: String) -> Self {
        AnnotationValue::String(s)
    }
}

impl From<&str> for AnnotationValue {
    fn from(s: &str) -> Self {
        AnnotationValue::String(s.to_string())
    }
}

impl From<bool> for AnnotationValue {
    fn from(b: bool) -> Self {
        AnnotationValue::Bool(b)
    }
}
