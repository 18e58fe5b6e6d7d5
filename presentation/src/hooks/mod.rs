//! Adapters for the host's hook points
//!
//! Each hook wraps the oracle (or site configuration) and turns its answer
//! into the shape the host expects: parser options, toolbox links, client
//! config vars, preference definitions.

pub mod article_options;
pub mod post_cache;
pub mod preferences;
pub mod sidebar;

pub use article_options::ArticleParserOptionsHook;
pub use post_cache::{ClientOutput, NOTICE_MODULE, PostCacheTransformHook};
pub use preferences::{
    PREFERENCE_SECTION, PreferenceDefinition, PreferenceKind, on_get_preferences,
    preference_definitions,
};
pub use sidebar::{EDIT_ACTION, SidebarContext, SidebarLink, SidebarToggleHook};
