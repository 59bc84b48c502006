//! # BMT Toolkit
//!
//! Query engine over the Biolink model: load a schema snapshot from a
//! string, file, or URL, then ask it about element names, hierarchy,
//! domains and ranges, classification, and external mappings.
//!
//! ```no_run
//! use bmt_toolkit::Toolkit;
//!
//! # fn main() -> bmt_core::Result<()> {
//! let toolkit = Toolkit::from_yaml(include_str!("../tests/data/test-model.yaml"))?;
//! let ancestors = toolkit.get_ancestors("biolink:Gene", true, false, true)?;
//! assert_eq!(ancestors.first().map(String::as_str), Some("gene"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Schema parsing and loading
pub mod parser;

/// Prefix expansion for mapping identifiers
pub mod namespace;

/// Indexed view over a loaded schema
pub mod model_view;

/// The toolkit facade
pub mod toolkit;

pub use bmt_core::{BmtError, Element, ElementKind, Result, SchemaDefinition, ToolkitConfig};
pub use model_view::{ElementIndex, HierarchyIndex, MappingIndex, MappingKind, NameResolver};
pub use namespace::Namespaces;
pub use parser::{Parser, SchemaLoader};
pub use toolkit::Toolkit;
