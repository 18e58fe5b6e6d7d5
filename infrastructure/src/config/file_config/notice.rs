//! User notice configuration from TOML (`[notice]` section)

use serde::{Deserialize, Serialize};

/// Raw user notice configuration from TOML
///
/// Both values are exported to the client on Parsoid-rendered pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNoticeConfig {
    /// Bump to show the notice again to users who dismissed it
    pub version: u32,
    /// Days the notice stays visible after first display (0 = no limit)
    pub days: u32,
}

impl Default for FileNoticeConfig {
    fn default() -> Self {
        Self { version: 1, days: 0 }
    }
}
