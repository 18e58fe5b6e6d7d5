//! Content renderer port
//!
//! Defines the interface for invoking a render engine. Which engine runs is
//! carried by [`RenderOptions::engine`]; the renderer is a black box that
//! owns parsing, caching, I/O and timeouts.

use async_trait::async_trait;
use parser_migration_domain::{Content, PageIdentity, RenderOptions, RenderedOutput, UserIdentity};
use thiserror::Error;

/// Errors raised by a renderer.
///
/// These pass through the policy layer unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Content unavailable: {0}")]
    ContentUnavailable(String),

    #[error("Render failed: {0}")]
    RenderFailed(String),
}

impl RenderError {
    /// Whether callers should answer with a "not found" response.
    pub fn is_content_unavailable(&self) -> bool {
        matches!(self, RenderError::ContentUnavailable(_))
    }
}

/// Port for rendering content with one engine.
///
/// Implementations (adapters) wrap the host's renderers.
#[async_trait]
pub trait ContentRenderer: Send + Sync {
    /// Render `content` as `page` using the engine selected in `options`.
    ///
    /// `user` is passed for personalisation (user language, skin, ...) only.
    async fn render(
        &self,
        content: &Content,
        page: &PageIdentity,
        options: &RenderOptions,
        user: &UserIdentity,
    ) -> Result<RenderedOutput, RenderError>;
}
