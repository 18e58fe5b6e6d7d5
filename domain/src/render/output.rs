//! Rendered output value object.

use super::engine::RenderEngine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// HTML produced by one renderer, plus renderer-supplied metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedOutput {
    /// Engine that produced this output
    pub engine: RenderEngine,
    /// Rendered HTML
    pub html: String,
    /// Free-form metadata reported by the renderer (cache keys, timings, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

impl RenderedOutput {
    pub fn new(engine: RenderEngine, html: impl Into<String>) -> Self {
        Self {
            engine,
            html: html.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Whether this output came from Parsoid.
    pub fn is_parsoid_content(&self) -> bool {
        self.engine.is_parsoid()
    }
}
