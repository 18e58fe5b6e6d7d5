//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! [`FileConfig::to_site_configuration`] converts them into the domain's
//! [`SiteConfiguration`].

mod content_models;
mod notice;
mod parsoid;
mod query_string;

pub use content_models::FileContentModelsConfig;
pub use notice::FileNoticeConfig;
pub use parsoid::FileParsoidConfig;
pub use query_string::FileQueryStringConfig;

use parser_migration_domain::SiteConfiguration;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Parsoid enablement and rollout
    pub parsoid: FileParsoidConfig,
    /// `useparsoid` query parameter handling
    pub query_string: FileQueryStringConfig,
    /// Content model allow-list
    pub content_models: FileContentModelsConfig,
    /// Client-side user notice
    pub notice: FileNoticeConfig,
}

impl FileConfig {
    /// Convert into the domain configuration. Validation is separate; see
    /// [`SiteConfiguration::validate`].
    pub fn to_site_configuration(&self) -> SiteConfiguration {
        SiteConfiguration {
            enable_parsoid_article_pages: self.parsoid.article_pages,
            enable_parsoid_discussion_tools: self.parsoid.discussion_tools,
            enable_parsoid_mobile_frontend: self.parsoid.mobile_frontend,
            enable_parsoid_mobile_frontend_talk_pages: self.parsoid.mobile_frontend_talk_pages,
            enable_parsoid_percentage: self.parsoid.percentage,
            enable_query_string: self.query_string.enabled,
            allowed_content_models: self.content_models.allowed.clone(),
            user_notice_version: self.notice.version,
            user_notice_days: self.notice.days,
        }
    }

    /// Render the effective configuration as TOML (for diagnostics).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[parsoid]
article_pages = true
discussion_tools = true
mobile_frontend = true
mobile_frontend_talk_pages = false
percentage = 50

[query_string]
enabled = false

[content_models]
allowed = ["proofread-page", "proofread-index"]

[notice]
version = 3
days = 14
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let site = config.to_site_configuration();
        assert!(site.enable_parsoid_article_pages);
        assert!(site.enable_parsoid_discussion_tools);
        assert!(site.enable_parsoid_mobile_frontend);
        assert!(!site.enable_parsoid_mobile_frontend_talk_pages);
        assert_eq!(site.enable_parsoid_percentage, 50);
        assert!(!site.enable_query_string);
        assert_eq!(
            site.allowed_content_models,
            vec!["proofread-page".to_string(), "proofread-index".to_string()]
        );
        assert_eq!(site.user_notice_version, 3);
        assert_eq!(site.user_notice_days, 14);
    }

    #[test]
    fn test_default_config_matches_domain_default() {
        let config = FileConfig::default();
        assert_eq!(config.to_site_configuration(), SiteConfiguration::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let mut config = FileConfig::default();
        config.parsoid.percentage = 10;
        config.content_models.allowed.push("proofread-page".to_string());

        let rendered = config.to_toml().unwrap();
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
