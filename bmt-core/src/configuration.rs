//! Configuration for toolkit instances

use serde::{Deserialize, Serialize};

/// Release of the Biolink model fetched when no schema source is given
pub const DEFAULT_MODEL_RELEASE: &str = "4.3.7";

/// Raw-content base URL for the default model release
#[must_use]
pub fn default_remote_schema() -> String {
    format!(
        "https://raw.githubusercontent.com/biolink/biolink-model/v{DEFAULT_MODEL_RELEASE}/biolink-model.yaml"
    )
}

/// Toolkit configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolkitConfig {
    /// Prefix recognized (and stripped) during name resolution, and used
    /// when rendering CURIE display forms
    pub default_prefix: String,

    /// Maximum alias-chain hops followed during name resolution before
    /// giving up on malformed alias data
    pub max_alias_depth: usize,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            default_prefix: "biolink".to_string(),
            max_alias_depth: 10,
        }
    }
}
