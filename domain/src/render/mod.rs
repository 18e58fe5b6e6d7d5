//! Rendering value objects.
//!
//! - [`engine::RenderEngine`]: legacy parser vs. Parsoid
//! - [`options::RenderOptions`]: immutable render parameters
//! - [`output::RenderedOutput`]: HTML produced by one engine

pub mod engine;
pub mod options;
pub mod output;
