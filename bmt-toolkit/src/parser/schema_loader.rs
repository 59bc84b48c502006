//! Schema loader for files and remote URLs

use bmt_core::{BmtError, Result, SchemaDefinition};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use super::{Parser, SchemaParser};

/// Loader for Biolink model schemas from various sources
pub struct SchemaLoader {
    parser: Parser,
    http_client: reqwest::Client,
}

impl SchemaLoader {
    /// Create a new schema loader
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Load a schema from a file path
    ///
    /// # Errors
    ///
    /// Returns a `BmtError` if the file cannot be read, has no
    /// recognized extension, or does not parse
    pub async fn load_file(&self, path: impl AsRef<Path>) -> Result<SchemaDefinition> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading schema from file");

        let content = fs::read_to_string(path).await.map_err(BmtError::IoError)?;

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| BmtError::parse("No file extension found"))?;

        let schema = self.parser.parse_str(&content, extension)?;
        info!(schema = %schema.name, "loaded schema from file");
        Ok(schema)
    }

    /// Load a schema from a `URL`
    ///
    /// # Errors
    ///
    /// Returns a `BmtError` if the fetch fails, the server answers with
    /// a non-success status, or the body does not parse
    pub async fn load_url(&self, url: &str) -> Result<SchemaDefinition> {
        debug!(url, "fetching schema");

        let parsed = url::Url::parse(url).map_err(|e| BmtError::fetch(format!("Invalid URL: {e}")))?;

        let response = self
            .http_client
            .get(parsed)
            .send()
            .await
            .map_err(|e| BmtError::fetch(format!("Failed to fetch URL: {e}")))?;

        if !response.status().is_success() {
            return Err(BmtError::fetch(format!(
                "HTTP error {}: {}",
                response.status(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let content = response
            .text()
            .await
            .map_err(|e| BmtError::fetch(format!("Failed to read response: {e}")))?;

        // The model publishes YAML; fall back to JSON for .json URLs
        let format = if url.ends_with(".json") { "json" } else { "yaml" };
        let schema = self.parser.parse_str(&content, format)?;
        info!(schema = %schema.name, url, "loaded schema from URL");
        Ok(schema)
    }
}

impl Default for SchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_file_missing() {
        let loader = SchemaLoader::new();
        let result = loader.load_file("/nonexistent/biolink-model.yaml").await;
        assert!(matches!(result, Err(BmtError::IoError(_))));
    }

    #[tokio::test]
    async fn test_load_url_rejects_malformed() {
        let loader = SchemaLoader::new();
        let result = loader.load_url("not a url").await;
        assert!(matches!(result, Err(BmtError::FetchError(_))));
    }
}
