//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters and the host
//! must implement.

pub mod content_transformer;
pub mod enablement_hook;
pub mod mobile_view;
pub mod page_lookup;
pub mod preference_store;
pub mod query_params;
pub mod renderer;
