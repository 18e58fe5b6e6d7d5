//! Site configuration value objects and validation.

mod site_config;
pub mod validation;

pub use site_config::SiteConfiguration;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity, has_errors};
