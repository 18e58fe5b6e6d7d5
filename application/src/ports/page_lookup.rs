//! Page lookup port
//!
//! Resolves titles, redirects and latest-revision content for the comparison
//! API. Page storage itself is owned by the host.

use async_trait::async_trait;
use parser_migration_domain::{Content, PageIdentity};
use thiserror::Error;

/// Errors raised while looking up a page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("The page you specified doesn't exist: {0}")]
    MissingTitle(String),

    #[error("Content for page {0} is missing")]
    MissingContent(String),

    #[error("Lookup failed: {0}")]
    Backend(String),
}

impl LookupError {
    /// Whether callers should answer with a "not found" response.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LookupError::MissingTitle(_) | LookupError::MissingContent(_)
        )
    }
}

/// Port for page, redirect and content lookups.
#[async_trait]
pub trait PageLookup: Send + Sync {
    /// Resolve a namespace and title to a page identity.
    async fn find_page(&self, namespace: i32, title: &str) -> Result<PageIdentity, LookupError>;

    /// Target of a redirect page, if it can be resolved.
    async fn redirect_target(&self, page: &PageIdentity) -> Result<Option<PageIdentity>, LookupError>;

    /// Main-slot content of the page's latest revision.
    async fn latest_content(&self, page: &PageIdentity) -> Result<Content, LookupError>;
}
