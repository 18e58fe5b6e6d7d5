//! Content model configuration from TOML (`[content_models]` section)

use serde::{Deserialize, Serialize};

/// Raw content model allow-list from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContentModelsConfig {
    /// Non-wikitext content models that take part in the migration
    pub allowed: Vec<String>,
}
