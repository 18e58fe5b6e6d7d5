//! Parsoid decision oracle.
//!
//! [`ParsoidOracle`] decides, per request, whether a read view is rendered
//! with Parsoid or with the legacy parser. Each step may override the one
//! before it:
//!
//! 1. Content-model gate (wikitext or allow-listed models only)
//! 2. Site default by page kind (article / talk)
//! 3. Mobile-view exclusion
//! 4. Percentage rollout bucket
//! 5. User read-view preference
//! 6. Registered enablement hooks
//! 7. `useparsoid` query parameter (when enabled)
//!
//! Steps 2–4 are available on their own as
//! [`ParsoidOracle::is_parsoid_default_for`].
//!
//! The oracle only reads immutable configuration and its collaborators, so
//! it is cheap to clone and safe to share across concurrent requests. Hosts
//! whose mobile detection is request-scoped build (or clone) an oracle per
//! request with [`ParsoidOracle::with_mobile_context`].

use crate::ports::enablement_hook::EnablementHooks;
use crate::ports::mobile_view::MobileViewDetector;
use crate::ports::preference_store::UserPreferenceStore;
use crate::ports::query_params::{QueryParams, USE_PARSOID_PARAM};
use parser_migration_domain::rollout;
use parser_migration_domain::{
    PageIdentity, RenderEngine, SiteConfiguration, UserIdentity, fuzzy_bool,
};
use std::sync::Arc;
use tracing::debug;

/// Decides which render engine serves a read view.
#[derive(Clone)]
pub struct ParsoidOracle {
    config: Arc<SiteConfiguration>,
    preferences: Arc<dyn UserPreferenceStore>,
    hooks: EnablementHooks,
    mobile_context: Option<Arc<dyn MobileViewDetector>>,
}

impl ParsoidOracle {
    pub fn new(config: Arc<SiteConfiguration>, preferences: Arc<dyn UserPreferenceStore>) -> Self {
        Self {
            config,
            preferences,
            hooks: EnablementHooks::new(),
            mobile_context: None,
        }
    }

    /// Use the given enablement hooks (replacing any set before).
    pub fn with_hooks(mut self, hooks: EnablementHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Attach a mobile-view detector. Without one, every request is desktop.
    pub fn with_mobile_context(mut self, detector: Arc<dyn MobileViewDetector>) -> Self {
        self.mobile_context = Some(detector);
        self
    }

    pub fn config(&self) -> &SiteConfiguration {
        &self.config
    }

    pub fn preferences(&self) -> &dyn UserPreferenceStore {
        self.preferences.as_ref()
    }

    /// Determine whether to use Parsoid for this read view, based on site
    /// configuration, the user's preference, enablement hooks and the
    /// request's query string.
    pub fn should_use_parsoid(
        &self,
        user: &UserIdentity,
        request: &dyn QueryParams,
        page: &PageIdentity,
    ) -> bool {
        if !self.is_content_model_allowed(page) {
            debug!(
                "Parsoid not used for {}: content model '{}' is not migrated",
                page,
                page.content_model()
            );
            return false;
        }

        let preference = self.preferences.read_view_preference(user);
        let opt_in = preference.apply(self.is_parsoid_default_for(page));

        // Hooks may override the opt-in state, e.g. for an experiment
        let opt_in = self.hooks.run(user, request, page, opt_in);

        if !self.config.enable_query_string {
            // Query string ignored so render modes don't fragment the cache
            debug!(
                "Parsoid decision for {}: {} (preference {}, query string disabled)",
                page, opt_in, preference
            );
            return opt_in;
        }

        let decision = fuzzy_bool(request.get(USE_PARSOID_PARAM), opt_in);
        debug!(
            "Parsoid decision for {}: {} (preference {}, opt-in {})",
            page, decision, preference, opt_in
        );
        decision
    }

    /// Same decision as [`should_use_parsoid`](Self::should_use_parsoid),
    /// as an engine selector.
    pub fn engine_for(
        &self,
        user: &UserIdentity,
        request: &dyn QueryParams,
        page: &PageIdentity,
    ) -> RenderEngine {
        RenderEngine::from_use_parsoid(self.should_use_parsoid(user, request, page))
    }

    /// Determine whether Parsoid is used by default on this page, based on
    /// site configuration only. User preferences, hooks and the query string
    /// are not consulted.
    pub fn is_parsoid_default_for(&self, page: &PageIdentity) -> bool {
        let mut enabled = self.config.default_enabled_for(page);

        if enabled && self.showing_mobile_view() && !self.config.mobile_enabled_for(page) {
            enabled = false;
        }

        // Only hash when a partial rollout is configured
        if enabled && !rollout::admits(self.config.enable_parsoid_percentage, page) {
            enabled = false;
        }

        enabled
    }

    /// Whether the current request is served as a mobile view.
    pub fn showing_mobile_view(&self) -> bool {
        self.mobile_context
            .as_ref()
            .is_some_and(|m| m.should_display_mobile_view())
    }

    /// Whether the page's content model takes part in the migration:
    /// wikitext, or any model on the configured allow-list.
    pub fn is_content_model_allowed(&self, page: &PageIdentity) -> bool {
        self.config.is_content_model_allowed(page.content_model())
    }
}
