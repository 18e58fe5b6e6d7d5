//! Presentation layer for parser-migration
//!
//! This crate adapts the application services to the host's surfaces:
//! hook handlers, the internal comparison API and the side-by-side edit
//! preview.

pub mod api;
pub mod hooks;
pub mod preview;
pub mod request;

// Re-export commonly used types
pub use api::{ApiComparisonRequest, ApiComparisonResponse, ApiError, ComparisonApi};
pub use hooks::{
    ArticleParserOptionsHook, ClientOutput, EDIT_ACTION, PostCacheTransformHook,
    PreferenceDefinition, PreferenceKind, SidebarContext, SidebarLink, SidebarToggleHook,
    on_get_preferences, preference_definitions,
};
pub use preview::{EditAction, EditPreview, SideBySidePreview, escape_html};
pub use request::{LinkBuilder, RequestQuery};
