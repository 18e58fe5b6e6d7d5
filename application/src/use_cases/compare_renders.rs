//! Compare Renders use case.
//!
//! Renders the same content through the legacy parser and Parsoid so the two
//! outputs can be shown side by side. Each engine gets its own options value
//! derived from the caller's base options with only the engine flag changed;
//! the base options are never modified.
//!
//! Engines are requested by index (`0` = legacy, `1` = Parsoid). Only the
//! requested engines are rendered, so a caller can fetch a single side
//! cheaply.

use crate::ports::renderer::{ContentRenderer, RenderError};
use parser_migration_domain::{
    Content, DomainError, PageIdentity, RenderEngine, RenderOptions, RenderedOutput,
    UserIdentity,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while comparing renders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("Invalid comparison request: {0}")]
    InvalidRequest(#[from] DomainError),

    #[error("No render engines requested")]
    NoEnginesRequested,

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Rendered outputs keyed by engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonOutputs {
    outputs: BTreeMap<RenderEngine, RenderedOutput>,
}

impl ComparisonOutputs {
    pub fn get(&self, engine: RenderEngine) -> Option<&RenderedOutput> {
        self.outputs.get(&engine)
    }

    /// Output for a comparison index (`0` = legacy, `1` = Parsoid).
    pub fn by_index(&self, index: usize) -> Option<&RenderedOutput> {
        RenderEngine::from_index(index)
            .ok()
            .and_then(|engine| self.get(engine))
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Outputs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (RenderEngine, &RenderedOutput)> {
        self.outputs.iter().map(|(engine, output)| (*engine, output))
    }

    pub fn take(&mut self, engine: RenderEngine) -> Option<RenderedOutput> {
        self.outputs.remove(&engine)
    }

    pub fn into_map(self) -> BTreeMap<RenderEngine, RenderedOutput> {
        self.outputs
    }
}

/// Use case for rendering content with one or both engines.
#[derive(Clone)]
pub struct CompareRendersUseCase {
    renderer: Arc<dyn ContentRenderer>,
}

impl CompareRendersUseCase {
    pub fn new(renderer: Arc<dyn ContentRenderer>) -> Self {
        Self { renderer }
    }

    /// Render `content` as `page` with every engine in `engine_indexes`.
    ///
    /// All indexes are validated before anything is rendered; an index other
    /// than `0` or `1` is a caller error. A repeated index is rendered once.
    /// Renderer failures are returned unchanged.
    pub async fn compare(
        &self,
        content: &Content,
        page: &PageIdentity,
        base_options: &RenderOptions,
        user: &UserIdentity,
        engine_indexes: &[usize],
    ) -> Result<ComparisonOutputs, CompareError> {
        let engines = engine_indexes
            .iter()
            .map(|&index| RenderEngine::from_index(index))
            .collect::<Result<Vec<_>, _>>()?;
        self.compare_engines(content, page, base_options, user, &engines)
            .await
    }

    /// Same as [`compare`](Self::compare) with engines given directly.
    pub async fn compare_engines(
        &self,
        content: &Content,
        page: &PageIdentity,
        base_options: &RenderOptions,
        user: &UserIdentity,
        engines: &[RenderEngine],
    ) -> Result<ComparisonOutputs, CompareError> {
        if engines.is_empty() {
            return Err(CompareError::NoEnginesRequested);
        }

        info!(
            "Comparing renders of {} with engines [{}]",
            page,
            engines
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut outputs = BTreeMap::new();
        for &engine in engines {
            if outputs.contains_key(&engine) {
                continue;
            }
            let options = base_options.for_engine(engine);
            debug!("Rendering {} with {}", page, engine);
            let output = self
                .renderer
                .render(content, page, &options, user)
                .await?;
            outputs.insert(engine, output);
        }

        Ok(ComparisonOutputs { outputs })
    }
}
