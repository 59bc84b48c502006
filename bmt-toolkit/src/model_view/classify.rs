//! Classification anchors
//!
//! The classification predicates reduce to ancestry tests against a
//! handful of well-known hierarchy roots in the model.

/// Root of the entity (category) hierarchy
pub const NAMED_THING: &str = "named thing";

/// Root of the predicate hierarchy
pub const RELATED_TO: &str = "related to";

/// Root of the association class hierarchy
pub const ASSOCIATION: &str = "association";

/// Root of the node-property slot hierarchy
pub const NODE_PROPERTY: &str = "node property";

/// Root of the association-slot (edge property) hierarchy
pub const ASSOCIATION_SLOT: &str = "association slot";
