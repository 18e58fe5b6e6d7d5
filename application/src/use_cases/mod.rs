//! Use cases
//!
//! - [`decide_engine::ParsoidOracle`]: per-request engine decision
//! - [`compare_renders::CompareRendersUseCase`]: render with one or both engines
//! - [`fetch_comparison::FetchComparisonUseCase`]: comparison API backend
//! - [`preview_side_by_side::PreviewSideBySideUseCase`]: edit tool preview

pub mod compare_renders;
pub mod decide_engine;
pub mod fetch_comparison;
pub mod preview_side_by_side;
