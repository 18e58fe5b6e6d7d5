//! Parsoid enablement hook port
//!
//! Lets other components adjust the opt-in state before the query string is
//! consulted, e.g. to force both arms of an A/B experiment to agree.
//! Hooks run in registration order; each receives the value produced by the
//! previous one and returns the (possibly unchanged) value. A hook cannot
//! abort the decision.

use super::query_params::QueryParams;
use parser_migration_domain::{PageIdentity, UserIdentity};
use std::sync::Arc;

/// A single enablement adjuster.
pub trait ParsoidEnablementHook: Send + Sync {
    fn adjust_enablement(
        &self,
        user: &UserIdentity,
        request: &dyn QueryParams,
        page: &PageIdentity,
        enabled: bool,
    ) -> bool;
}

impl<F> ParsoidEnablementHook for F
where
    F: Fn(&UserIdentity, &dyn QueryParams, &PageIdentity, bool) -> bool + Send + Sync,
{
    fn adjust_enablement(
        &self,
        user: &UserIdentity,
        request: &dyn QueryParams,
        page: &PageIdentity,
        enabled: bool,
    ) -> bool {
        self(user, request, page, enabled)
    }
}

/// Ordered list of registered enablement hooks.
#[derive(Clone, Default)]
pub struct EnablementHooks {
    hooks: Vec<Arc<dyn ParsoidEnablementHook>>,
}

impl EnablementHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook; it runs after every hook registered before it.
    pub fn register(&mut self, hook: Arc<dyn ParsoidEnablementHook>) {
        self.hooks.push(hook);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_hook(mut self, hook: Arc<dyn ParsoidEnablementHook>) -> Self {
        self.register(hook);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook in order, threading the value through.
    pub fn run(
        &self,
        user: &UserIdentity,
        request: &dyn QueryParams,
        page: &PageIdentity,
        enabled: bool,
    ) -> bool {
        self.hooks.iter().fold(enabled, |current, hook| {
            hook.adjust_enablement(user, request, page, current)
        })
    }
}

impl std::fmt::Debug for EnablementHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnablementHooks")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
