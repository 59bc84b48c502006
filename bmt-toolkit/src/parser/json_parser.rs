//! JSON parser for Biolink model schemas

use bmt_core::{BmtError, Result, SchemaDefinition};
use std::fs;
use std::path::Path;

use super::SchemaParser;

/// `JSON` parser implementation
#[derive(Default)]
pub struct JsonParser;

impl JsonParser {
    /// Create a new `JSON` parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemaParser for JsonParser {
    fn parse_str(&self, content: &str) -> Result<SchemaDefinition> {
        let mut schema: SchemaDefinition = serde_json::from_str(content).map_err(|e| {
            BmtError::parse_at(
                format!("JSON parsing error: {e}"),
                format!("line {}, column {}", e.line(), e.column()),
            )
        })?;
        super::assign_names(&mut schema);
        Ok(schema)
    }

    fn parse_file(&self, path: &Path) -> Result<SchemaDefinition> {
        let content = fs::read_to_string(path).map_err(BmtError::IoError)?;

        self.parse_str(&content).map_err(|e| match e {
            BmtError::ParseError { message, location } => BmtError::ParseError {
                message: format!("{message} in file {}", path.display()),
                location,
            },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_schema() -> Result<()> {
        let json = r#"{"id": "https://w3id.org/biolink/biolink-model", "name": "biolink_model"}"#;

        let parser = JsonParser::new();
        let schema = parser.parse_str(json)?;

        assert_eq!(schema.name, "biolink_model");
        Ok(())
    }

    #[test]
    fn test_parse_invalid_json() {
        let parser = JsonParser::new();
        assert!(parser.parse_str("{not json").is_err());
    }
}
