//! Render options value object.
//!
//! [`RenderOptions`] is an immutable bag of cache-affecting rendering knobs
//! plus the engine selector. Switching engines never touches the value a
//! caller holds: [`RenderOptions::for_engine`] builds a new value that copies
//! every knob and sets only the engine.

use super::engine::RenderEngine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Rendering parameters passed to a renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    engine: RenderEngine,
    settings: BTreeMap<String, Value>,
}

impl RenderOptions {
    /// Create options for the legacy engine with no extra settings.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Builder Methods ====================

    pub fn with_engine(mut self, engine: RenderEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    // ==================== Engine Selection ====================

    /// Derive options that render with `engine`.
    ///
    /// All settings are copied; the engine is set regardless of what this
    /// value specified.
    pub fn for_engine(&self, engine: RenderEngine) -> Self {
        Self {
            engine,
            settings: self.settings.clone(),
        }
    }

    /// Derive options that render with Parsoid.
    pub fn with_parsoid(&self) -> Self {
        self.for_engine(RenderEngine::Parsoid)
    }

    // ==================== Accessors ====================

    pub fn engine(&self) -> RenderEngine {
        self.engine
    }

    pub fn uses_parsoid(&self) -> bool {
        self.engine.is_parsoid()
    }

    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn settings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v))
    }
}
