//! YAML parser for Biolink model schemas

use bmt_core::{BmtError, Result, SchemaDefinition};
use std::fs;
use std::path::Path;

use super::SchemaParser;

/// `YAML` parser implementation
#[derive(Default)]
pub struct YamlParser;

impl YamlParser {
    /// Create a new `YAML` parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemaParser for YamlParser {
    fn parse_str(&self, content: &str) -> Result<SchemaDefinition> {
        let mut schema: SchemaDefinition = serde_yaml::from_str(content).map_err(|e| {
            BmtError::parse_at(
                format!("YAML parsing error: {e}"),
                e.location().map_or_else(
                    || "unknown location".to_string(),
                    |l| format!("line {}, column {}", l.line(), l.column()),
                ),
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
        let yaml = r"
id: https://w3id.org/biolink/biolink-model
name: biolink_model
";

        let parser = YamlParser::new();
        let schema = parser.parse_str(yaml)?;

        assert_eq!(schema.id, "https://w3id.org/biolink/biolink-model");
        assert_eq!(schema.name, "biolink_model");
        Ok(())
    }

    #[test]
    fn test_parse_backfills_element_names() -> Result<()> {
        let yaml = r"
id: https://w3id.org/biolink/biolink-model
name: biolink_model
classes:
  named thing:
    description: A databased entity or concept
slots:
  related to:
    symmetric: true
";

        let parser = YamlParser::new();
        let schema = parser.parse_str(yaml)?;

        assert_eq!(schema.classes["named thing"].name, "named thing");
        assert_eq!(schema.slots["related to"].name, "related to");
        Ok(())
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let yaml = "invalid: yaml: content:";

        let parser = YamlParser::new();
        let result = parser.parse_str(yaml);

        assert!(result.is_err());
        if let Err(BmtError::ParseError { message, .. }) = result {
            assert!(message.contains("YAML parsing error"));
        } else {
            panic!("Expected ParseError");
        }
    }
}
