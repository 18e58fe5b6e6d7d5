//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These represent programming errors on the caller's side. Callers are
/// expected to validate their input first, so none of these are ever
/// corrected silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid render engine index: {0} (expected 0 or 1)")]
    InvalidEngineIndex(usize),

    #[error("Invalid config name, should have already been validated: {0}")]
    InvalidConfigName(String),

    #[error("Invalid rollout percentage: {0} (expected 0..=100)")]
    InvalidPercentage(u32),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),
}

impl DomainError {
    /// Check if this error was caused by a bad engine selector
    /// (either an index or an API config name).
    pub fn is_engine_selector_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidEngineIndex(_) | DomainError::InvalidConfigName(_)
        )
    }
}
