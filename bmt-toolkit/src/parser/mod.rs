//! Schema parsing for Biolink model documents
//!
//! Handles YAML and JSON renditions of the model, delegating to
//! format-specific parsers behind a common trait.

use bmt_core::{BmtError, Result, SchemaDefinition};
use std::path::Path;

pub mod json_parser;
pub mod schema_loader;
pub mod yaml_parser;

pub use json_parser::JsonParser;
pub use schema_loader::SchemaLoader;
pub use yaml_parser::YamlParser;

/// Trait for schema parsers
pub trait SchemaParser: Send + Sync {
    /// Parse schema from string content
    ///
    /// # Errors
    ///
    /// Returns a `BmtError` if parsing fails
    fn parse_str(&self, content: &str) -> Result<SchemaDefinition>;

    /// Parse schema from file
    ///
    /// # Errors
    ///
    /// Returns a `BmtError` if the file cannot be read or parsing fails
    fn parse_file(&self, path: &Path) -> Result<SchemaDefinition>;
}

/// Main parser that delegates to format-specific parsers
pub struct Parser {
    yaml: YamlParser,
    json: JsonParser,
}

impl Parser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self {
            yaml: YamlParser::new(),
            json: JsonParser::new(),
        }
    }

    /// Parse schema from file, detecting format from extension
    ///
    /// # Errors
    ///
    /// Returns a `BmtError` if the file has no extension, the format is
    /// not supported, or parsing fails
    pub fn parse_file(&self, path: &Path) -> Result<SchemaDefinition> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| BmtError::parse("No file extension found"))?;

        match extension {
            "yaml" | "yml" => self.yaml.parse_file(path),
            "json" => self.json.parse_file(path),
            _ => Err(BmtError::parse(format!(
                "Unsupported file format: {extension}"
            ))),
        }
    }

    /// Parse schema from string with specified format
    ///
    /// # Errors
    ///
    /// Returns a `BmtError` if the format is not supported or parsing fails
    pub fn parse_str(&self, content: &str, format: &str) -> Result<SchemaDefinition> {
        match format {
            "yaml" | "yml" => self.yaml.parse_str(content),
            "json" => self.json.parse_str(content),
            _ => Err(BmtError::parse(format!("Unsupported format: {format}"))),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy map keys into the `name` field of each definition.
///
/// The model document keys its elements by name and usually omits the
/// redundant `name` field inside the definition body; downstream queries
/// rely on the field being populated.
pub(crate) fn assign_names(schema: &mut SchemaDefinition) {
    for (key, class) in &mut schema.classes {
        if class.name.is_empty() {
            class.name.clone_from(key);
        }
    }
    for (key, slot) in &mut schema.slots {
        if slot.name.is_empty() {
            slot.name.clone_from(key);
        }
    }
    for (key, ty) in &mut schema.types {
        if ty.name.is_empty() {
            ty.name.clone_from(key);
        }
    }
    for (key, en) in &mut schema.enums {
        if en.name.is_empty() {
            en.name.clone_from(key);
        }
    }
    for (key, subset) in &mut schema.subsets {
        if subset.name.is_empty() {
            subset.name.clone_from(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_dispatches_on_format() {
        let parser = Parser::new();
        let yaml = "id: https://w3id.org/biolink/biolink-model\nname: biolink_model\n";
        let schema = parser.parse_str(yaml, "yaml").expect("should parse");
        assert_eq!(schema.name, "biolink_model");

        let err = parser.parse_str(yaml, "toml").unwrap_err();
        assert!(err.to_string().contains("Unsupported format"));
    }
}
