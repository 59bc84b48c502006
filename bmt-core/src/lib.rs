//! # BMT Core
//!
//! Core types and string utilities for the Biolink model toolkit.
//!
//! This crate carries the schema data model (classes, slots, types, enums,
//! subsets), the tagged [`Element`](element::Element) variant over those
//! kinds, the error taxonomy, and the case-conversion utilities that name
//! resolution and CURIE formatting are built from. The query engine itself
//! lives in the companion `bmt-toolkit` crate.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types for toolkit operations
pub mod error;

/// Schema type definitions
pub mod types;

/// Tagged element variant over the schema element kinds
pub mod element;

/// Annotation support for schema elements
pub mod annotations;

/// Toolkit configuration
pub mod configuration;

/// Case-conversion and formatting utilities
pub mod utils;

// Re-export commonly used types
pub use annotations::{AnnotationValue, Annotations};
pub use configuration::ToolkitConfig;
pub use element::{Element, ElementKind};
pub use error::{BmtError, Result};
pub use types::{
    ClassDefinition, CrossReferences, EnumDefinition, PermissibleValue, PrefixDefinition,
    SchemaDefinition, SlotDefinition, SubsetDefinition, TypeDefinition,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::annotations::{AnnotationValue, Annotations};
    pub use crate::configuration::ToolkitConfig;
    pub use crate::element::{Element, ElementKind};
    pub use crate::error::{BmtError, Result};
    pub use crate::types::*;
    pub use crate::utils::{format_element, parse_name};
}
