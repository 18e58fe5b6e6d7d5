//! Side-by-side preview use case.
//!
//! Used by the migration edit tool: the edited text is pre-save transformed
//! once, then rendered with both engines so the editor sees exactly the same
//! input through each renderer.

use super::compare_renders::{CompareError, CompareRendersUseCase};
use crate::ports::content_transformer::ContentTransformer;
use parser_migration_domain::{
    Content, PageIdentity, RenderEngine, RenderOptions, RenderedOutput, UserIdentity,
};
use std::sync::Arc;

/// Both renders of a preview.
#[derive(Debug, Clone, PartialEq)]
pub struct SideBySideOutputs {
    pub legacy: RenderedOutput,
    pub parsoid: RenderedOutput,
}

impl SideBySideOutputs {
    /// Output the edit page treats as "the" preview (metadata, categories,
    /// modules). The Parsoid render is authoritative.
    pub fn primary(&self) -> &RenderedOutput {
        &self.parsoid
    }
}

/// Use case for side-by-side edit previews.
#[derive(Clone)]
pub struct PreviewSideBySideUseCase {
    transformer: Arc<dyn ContentTransformer>,
    compare: CompareRendersUseCase,
}

impl PreviewSideBySideUseCase {
    pub fn new(transformer: Arc<dyn ContentTransformer>, compare: CompareRendersUseCase) -> Self {
        Self {
            transformer,
            compare,
        }
    }

    pub async fn execute(
        &self,
        content: &Content,
        page: &PageIdentity,
        options: &RenderOptions,
        user: &UserIdentity,
    ) -> Result<SideBySideOutputs, CompareError> {
        let transformed = self
            .transformer
            .pre_save_transform(content, page, user, options);

        let mut outputs = self
            .compare
            .compare_engines(&transformed, page, options, user, &RenderEngine::ALL)
            .await?;

        match (
            outputs.take(RenderEngine::Legacy),
            outputs.take(RenderEngine::Parsoid),
        ) {
            (Some(legacy), Some(parsoid)) => Ok(SideBySideOutputs { legacy, parsoid }),
            // compare_engines renders every requested engine or fails
            _ => Err(CompareError::NoEnginesRequested),
        }
    }
}
