//! Query string configuration from TOML (`[query_string]` section)

use serde::{Deserialize, Serialize};

/// Raw query string configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQueryStringConfig {
    /// Honour `useparsoid=` in request URLs. Disable to keep Parsoid
    /// renders out of the parser cache for users who did not opt in.
    pub enabled: bool,
}

impl Default for FileQueryStringConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
