//! Fetch Comparison use case.
//!
//! Backs the internal comparison API: look up a page by title, follow a
//! redirect unless asked not to, load the latest revision's content and
//! render it with the requested engines (`old`, `new`).
//!
//! Redirects are followed by default because a redirect page's own output
//! is just a link and not interesting to compare; `redirect=no` selects the
//! redirect page itself.

use super::compare_renders::{CompareError, CompareRendersUseCase};
use crate::ports::page_lookup::{LookupError, PageLookup};
use parser_migration_domain::{
    DomainError, PageIdentity, RenderEngine, RenderOptions, RenderedOutput, UserIdentity,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while fetching a comparison.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchComparisonError {
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] DomainError),

    #[error("Comparison failed: {0}")]
    Compare(#[from] CompareError),
}

/// Input for the [`FetchComparisonUseCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchComparisonInput {
    /// Namespace of the requested title.
    pub namespace: i32,
    /// Title text (spaces or underscores).
    pub title: String,
    /// Engine config names, in the order the response should list them.
    pub configs: Vec<String>,
    /// `Some("no")` renders a redirect page itself instead of its target.
    pub redirect: Option<String>,
}

impl FetchComparisonInput {
    /// Request both engines for a title.
    pub fn new(namespace: i32, title: impl Into<String>) -> Self {
        Self {
            namespace,
            title: title.into(),
            configs: RenderEngine::ALL
                .iter()
                .map(|e| e.config_name().to_string())
                .collect(),
            redirect: None,
        }
    }

    pub fn with_configs(mut self, configs: Vec<String>) -> Self {
        self.configs = configs;
        self
    }

    pub fn with_redirect(mut self, redirect: impl Into<String>) -> Self {
        self.redirect = Some(redirect.into());
        self
    }

    fn follows_redirects(&self) -> bool {
        self.redirect.as_deref() != Some("no")
    }
}

/// Result of a comparison fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    /// The page actually rendered (the redirect target when followed).
    pub page: PageIdentity,
    /// Outputs in request order, one per distinct engine.
    pub outputs: Vec<RenderedOutput>,
}

/// Use case for the comparison API.
#[derive(Clone)]
pub struct FetchComparisonUseCase {
    pages: Arc<dyn PageLookup>,
    compare: CompareRendersUseCase,
}

impl FetchComparisonUseCase {
    pub fn new(pages: Arc<dyn PageLookup>, compare: CompareRendersUseCase) -> Self {
        Self { pages, compare }
    }

    pub async fn execute(
        &self,
        input: FetchComparisonInput,
        base_options: &RenderOptions,
        user: &UserIdentity,
    ) -> Result<ComparisonResult, FetchComparisonError> {
        let engines = input
            .configs
            .iter()
            .map(|name| RenderEngine::from_config_name(name))
            .collect::<Result<Vec<_>, _>>()?;

        // A malformed title is a request error, not a missing page
        PageIdentity::new(input.namespace, &input.title)?;

        let mut page = self.pages.find_page(input.namespace, &input.title).await?;
        if page.is_redirect()
            && input.follows_redirects()
            && let Some(target) = self.pages.redirect_target(&page).await?
        {
            debug!("Following redirect {} -> {}", page, target);
            page = target;
        }

        let content = self.pages.latest_content(&page).await?;

        info!("Fetching comparison for {}", page);
        let mut rendered = self
            .compare
            .compare_engines(&content, &page, base_options, user, &engines)
            .await?;

        let outputs = engines
            .iter()
            .filter_map(|engine| rendered.take(*engine))
            .collect();

        Ok(ComparisonResult { page, outputs })
    }
}
