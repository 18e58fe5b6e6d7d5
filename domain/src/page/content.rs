//! Page content value object.

use super::identity::CONTENT_MODEL_WIKITEXT;
use serde::{Deserialize, Serialize};

/// Source content handed to a renderer.
///
/// The policy layer never inspects the text; it only carries it so that
/// both engines see exactly the same input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub model: String,
    pub text: String,
}

impl Content {
    pub fn new(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            text: text.into(),
        }
    }

    pub fn wikitext(text: impl Into<String>) -> Self {
        Self::new(CONTENT_MODEL_WIKITEXT, text)
    }
}
