//! Parsoid enablement configuration from TOML (`[parsoid]` section)

use parser_migration_domain::rollout::FULL_ROLLOUT;
use serde::{Deserialize, Serialize};

/// Raw Parsoid enablement configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileParsoidConfig {
    /// Use Parsoid by default on non-talk pages
    pub article_pages: bool,
    /// Use Parsoid by default on talk pages
    pub discussion_tools: bool,
    /// Allow Parsoid in mobile views of article pages
    pub mobile_frontend: bool,
    /// Allow Parsoid in mobile views of talk pages
    pub mobile_frontend_talk_pages: bool,
    /// Percentage of pages the defaults apply to (0-100)
    pub percentage: u32,
}

impl Default for FileParsoidConfig {
    fn default() -> Self {
        Self {
            article_pages: false,
            discussion_tools: false,
            mobile_frontend: false,
            mobile_frontend_talk_pages: false,
            percentage: FULL_ROLLOUT,
        }
    }
}
