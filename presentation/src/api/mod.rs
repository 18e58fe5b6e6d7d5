//! Internal comparison API (`action=parsermigration`)

pub mod comparison;

pub use comparison::{ApiComparisonRequest, ApiComparisonResponse, ApiError, ComparisonApi};
