//! Domain layer for parser-migration
//!
//! This crate contains the value objects and pure policy helpers used to
//! choose between the legacy parser and Parsoid. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Render engines
//!
//! - **Legacy**: the original wikitext-to-HTML parser (index `0`, API name `old`)
//! - **Parsoid**: the replacement renderer (index `1`, API name `new`)
//!
//! ## Rollout
//!
//! Site configuration enables Parsoid per page kind (article / talk), and a
//! rollout percentage narrows that to a stable, hash-derived subset of
//! pages. Users can override the site default with a read-view preference.

pub mod config;
pub mod core;
pub mod page;
pub mod render;
pub mod request;
pub mod rollout;
pub mod user;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity, SiteConfiguration};
pub use core::error::DomainError;
pub use page::{
    content::Content,
    identity::{CONTENT_MODEL_WIKITEXT, NS_MAIN, NS_TALK, PageIdentity, is_talk_namespace},
};
pub use render::{engine::RenderEngine, options::RenderOptions, output::RenderedOutput};
pub use request::{fuzzy_bool, parse_bool};
pub use user::{
    identity::UserIdentity,
    preference::{PreferenceKey, ReadViewPreference},
};
