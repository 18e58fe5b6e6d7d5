//! Site configuration validation.
//!
//! [`SiteConfiguration::validate`](super::SiteConfiguration::validate)
//! reports problems as structured issues with severity levels. Errors are
//! fatal when the host wires services at startup; warnings are logged and
//! the configuration is used as-is.

use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot be used.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// Rollout percentage above 100.
    PercentageOutOfRange { value: u32 },
    /// Empty entry in the content-model allow-list.
    EmptyContentModel,
    /// Allow-list entry containing whitespace.
    MalformedContentModel { value: String },
    /// `wikitext` listed in the allow-list; it is always allowed.
    RedundantWikitext,
    /// The same content model listed twice.
    DuplicateContentModel { value: String },
    /// Percentage below 100 while Parsoid is enabled for no page kind.
    RolloutWithoutBaseline,
}

/// A detected issue in the site configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Check whether any issues are errors (i.e. fatal).
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}
