//! Process-wide site configuration for the migration policy.
//!
//! [`SiteConfiguration`] holds the options the decision oracle reads. It is
//! built once when the host starts (see the infrastructure config loader)
//! and shared read-only across requests.

use super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use crate::page::identity::{CONTENT_MODEL_WIKITEXT, PageIdentity};
use crate::rollout::FULL_ROLLOUT;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Site-wide migration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfiguration {
    /// Parsoid by default on non-talk pages
    pub enable_parsoid_article_pages: bool,
    /// Parsoid by default on talk pages
    pub enable_parsoid_discussion_tools: bool,
    /// Allow Parsoid in mobile views of article pages
    pub enable_parsoid_mobile_frontend: bool,
    /// Allow Parsoid in mobile views of talk pages
    pub enable_parsoid_mobile_frontend_talk_pages: bool,
    /// Share of pages (0-100) the default applies to
    pub enable_parsoid_percentage: u32,
    /// Honour the `useparsoid` query parameter
    pub enable_query_string: bool,
    /// Non-wikitext content models that may be migrated
    pub allowed_content_models: Vec<String>,
    /// Version of the user notice exported to clients
    pub user_notice_version: u32,
    /// Days the user notice stays visible
    pub user_notice_days: u32,
}

impl Default for SiteConfiguration {
    fn default() -> Self {
        Self {
            enable_parsoid_article_pages: false,
            enable_parsoid_discussion_tools: false,
            enable_parsoid_mobile_frontend: false,
            enable_parsoid_mobile_frontend_talk_pages: false,
            enable_parsoid_percentage: FULL_ROLLOUT,
            enable_query_string: true,
            allowed_content_models: Vec::new(),
            user_notice_version: 1,
            user_notice_days: 0,
        }
    }
}

impl SiteConfiguration {
    /// Namespace-kind default: the talk flag for talk pages, the article
    /// flag for everything else.
    pub fn default_enabled_for(&self, page: &PageIdentity) -> bool {
        if page.is_talk_page() {
            self.enable_parsoid_discussion_tools
        } else {
            self.enable_parsoid_article_pages
        }
    }

    /// Whether mobile views of this page kind may use Parsoid.
    ///
    /// Talk pages need both mobile flags.
    pub fn mobile_enabled_for(&self, page: &PageIdentity) -> bool {
        if !self.enable_parsoid_mobile_frontend {
            return false;
        }
        !page.is_talk_page() || self.enable_parsoid_mobile_frontend_talk_pages
    }

    /// Whether pages of `model` take part in the migration at all.
    pub fn is_content_model_allowed(&self, model: &str) -> bool {
        model == CONTENT_MODEL_WIKITEXT || self.allowed_content_models.iter().any(|m| m == model)
    }

    /// Validate the configuration, returning all detected issues.
    ///
    /// An empty list means the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.enable_parsoid_percentage > FULL_ROLLOUT {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::PercentageOutOfRange {
                    value: self.enable_parsoid_percentage,
                },
                message: format!(
                    "parsoid.percentage must be between 0 and 100, got {}",
                    self.enable_parsoid_percentage
                ),
            });
        } else if self.enable_parsoid_percentage < FULL_ROLLOUT
            && !self.enable_parsoid_article_pages
            && !self.enable_parsoid_discussion_tools
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::RolloutWithoutBaseline,
                message: format!(
                    "parsoid.percentage is {} but Parsoid is not enabled by default \
                     for any page kind, so the rollout has no effect",
                    self.enable_parsoid_percentage
                ),
            });
        }

        let mut seen = HashSet::new();
        for model in &self.allowed_content_models {
            if model.is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyContentModel,
                    message: "content_models.allowed contains an empty entry".to_string(),
                });
                continue;
            }
            if model.chars().any(char::is_whitespace) {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::MalformedContentModel {
                        value: model.clone(),
                    },
                    message: format!(
                        "content_models.allowed: '{}' is not a valid content model name",
                        model
                    ),
                });
                continue;
            }
            if model == CONTENT_MODEL_WIKITEXT {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::RedundantWikitext,
                    message: "content_models.allowed lists 'wikitext', which is always allowed"
                        .to_string(),
                });
            }
            if !seen.insert(model.as_str()) {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::DuplicateContentModel {
                        value: model.clone(),
                    },
                    message: format!("content_models.allowed lists '{}' more than once", model),
                });
            }
        }

        issues
    }
}
