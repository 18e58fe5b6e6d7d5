//! Application layer for parser-migration
//!
//! This crate contains the decision oracle, the render comparison use cases
//! and the port definitions they depend on. It depends only on the domain
//! layer; every collaborator is injected through a port.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    content_transformer::{ContentTransformer, IdentityTransform},
    enablement_hook::{EnablementHooks, ParsoidEnablementHook},
    mobile_view::MobileViewDetector,
    page_lookup::{LookupError, PageLookup},
    preference_store::{NoPreferences, UserPreferenceStore},
    query_params::{NoQueryParams, QueryParams, USE_PARSOID_PARAM},
    renderer::{ContentRenderer, RenderError},
};
pub use use_cases::compare_renders::{CompareError, CompareRendersUseCase, ComparisonOutputs};
pub use use_cases::decide_engine::ParsoidOracle;
pub use use_cases::fetch_comparison::{
    ComparisonResult, FetchComparisonError, FetchComparisonInput, FetchComparisonUseCase,
};
pub use use_cases::preview_side_by_side::{PreviewSideBySideUseCase, SideBySideOutputs};
