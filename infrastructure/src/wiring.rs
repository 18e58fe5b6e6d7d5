//! Service wiring
//!
//! Builds the site configuration and the application services from the
//! configured adapters. Hosts create one [`ServiceWiring`] at startup and
//! ask it for an oracle or a use case per request.

use crate::config::{ConfigError, ConfigLoader};
use crate::mobile::HostnameMobileDetector;
use crate::pages::InMemoryPageStore;
use crate::preferences::InMemoryPreferenceStore;
use parser_migration_application::{
    CompareRendersUseCase, ContentRenderer, ContentTransformer, EnablementHooks,
    FetchComparisonUseCase, IdentityTransform, PageLookup, ParsoidOracle,
    PreviewSideBySideUseCase, UserPreferenceStore,
};
use parser_migration_domain::{SiteConfiguration, Severity};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Load, convert and validate the site configuration.
///
/// Error-level issues make the configuration unusable; warnings are logged.
pub fn load_site_configuration(
    config_path: Option<&Path>,
) -> Result<SiteConfiguration, ConfigError> {
    let file_config = ConfigLoader::load(config_path)?;
    validate_site_configuration(file_config.to_site_configuration())
}

/// Validate an already built configuration, logging warnings.
pub fn validate_site_configuration(
    config: SiteConfiguration,
) -> Result<SiteConfiguration, ConfigError> {
    let (errors, warnings): (Vec<_>, Vec<_>) = config
        .validate()
        .into_iter()
        .partition(|issue| issue.severity == Severity::Error);

    for issue in &warnings {
        warn!("{}", issue);
    }
    if !errors.is_empty() {
        return Err(ConfigError::Invalid { issues: errors });
    }

    info!(
        "Parsoid defaults: articles={} talk={} mobile={} percentage={}",
        config.enable_parsoid_article_pages,
        config.enable_parsoid_discussion_tools,
        config.enable_parsoid_mobile_frontend,
        config.enable_parsoid_percentage
    );
    Ok(config)
}

/// Shared services for one site.
#[derive(Clone)]
pub struct ServiceWiring {
    config: Arc<SiteConfiguration>,
    preferences: Arc<dyn UserPreferenceStore>,
    hooks: EnablementHooks,
    renderer: Arc<dyn ContentRenderer>,
    transformer: Arc<dyn ContentTransformer>,
    pages: Arc<dyn PageLookup>,
}

impl ServiceWiring {
    /// Wire services with in-memory stores and no pre-save transform.
    pub fn new(config: SiteConfiguration, renderer: Arc<dyn ContentRenderer>) -> Self {
        Self {
            config: Arc::new(config),
            preferences: Arc::new(InMemoryPreferenceStore::new()),
            hooks: EnablementHooks::new(),
            renderer,
            transformer: Arc::new(IdentityTransform),
            pages: Arc::new(InMemoryPageStore::new()),
        }
    }

    /// Load configuration from the usual sources and wire services.
    pub fn from_config_sources(
        config_path: Option<&Path>,
        renderer: Arc<dyn ContentRenderer>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(load_site_configuration(config_path)?, renderer))
    }

    pub fn with_preferences(mut self, preferences: Arc<dyn UserPreferenceStore>) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_hooks(mut self, hooks: EnablementHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_transformer(mut self, transformer: Arc<dyn ContentTransformer>) -> Self {
        self.transformer = transformer;
        self
    }

    pub fn with_page_lookup(mut self, pages: Arc<dyn PageLookup>) -> Self {
        self.pages = pages;
        self
    }

    pub fn config(&self) -> &SiteConfiguration {
        &self.config
    }

    pub fn preferences(&self) -> Arc<dyn UserPreferenceStore> {
        Arc::clone(&self.preferences)
    }

    /// Oracle for requests without mobile detection.
    pub fn oracle(&self) -> ParsoidOracle {
        ParsoidOracle::new(Arc::clone(&self.config), Arc::clone(&self.preferences))
            .with_hooks(self.hooks.clone())
    }

    /// Oracle for a request served on `host`, with mobile detection.
    pub fn oracle_for_host(&self, host: &str) -> ParsoidOracle {
        self.oracle()
            .with_mobile_context(Arc::new(HostnameMobileDetector::new(host)))
    }

    pub fn compare_renders(&self) -> CompareRendersUseCase {
        CompareRendersUseCase::new(Arc::clone(&self.renderer))
    }

    pub fn preview_side_by_side(&self) -> PreviewSideBySideUseCase {
        PreviewSideBySideUseCase::new(Arc::clone(&self.transformer), self.compare_renders())
    }

    pub fn fetch_comparison(&self) -> FetchComparisonUseCase {
        FetchComparisonUseCase::new(Arc::clone(&self.pages), self.compare_renders())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use figment::Jail;
    use parser_migration_application::{NoQueryParams, RenderError};
    use parser_migration_domain::{
        Content, NS_MAIN, PageIdentity, PreferenceKey, RenderOptions, RenderedOutput,
        UserIdentity,
    };

    struct TagRenderer;

    #[async_trait]
    impl ContentRenderer for TagRenderer {
        async fn render(
            &self,
            content: &Content,
            _page: &PageIdentity,
            options: &RenderOptions,
            _user: &UserIdentity,
        ) -> Result<RenderedOutput, RenderError> {
            Ok(RenderedOutput::new(
                options.engine(),
                format!("<{}>{}", options.engine(), content.text),
            ))
        }
    }

    fn articles_on() -> SiteConfiguration {
        SiteConfiguration {
            enable_parsoid_article_pages: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_percentage_is_fatal() {
        let config = SiteConfiguration {
            enable_parsoid_percentage: 150,
            ..Default::default()
        };
        let err = validate_site_configuration(config).unwrap_err();
        assert_eq!(err.issues().len(), 1);
    }

    #[test]
    fn test_warnings_are_not_fatal() {
        let config = SiteConfiguration {
            enable_parsoid_percentage: 50,
            allowed_content_models: vec!["wikitext".to_string()],
            ..Default::default()
        };
        assert!(validate_site_configuration(config).is_ok());
    }

    #[test]
    fn test_load_site_configuration_from_project_file() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file(
                "parser-migration.toml",
                "[parsoid]\narticle_pages = true\n[content_models]\nallowed = [\"proofread-page\"]\n",
            )?;

            let config = load_site_configuration(None).unwrap();
            assert!(config.enable_parsoid_article_pages);
            assert!(config.is_content_model_allowed("proofread-page"));
            Ok(())
        });
    }

    #[test]
    fn test_load_site_configuration_rejects_bad_percentage() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.set_env("PARSER_MIGRATION_PARSOID__PERCENTAGE", "101");

            let err = load_site_configuration(None).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { .. }));
            Ok(())
        });
    }

    #[test]
    fn test_oracle_uses_wired_preferences() {
        let preferences = Arc::new(InMemoryPreferenceStore::new());
        let wiring = ServiceWiring::new(articles_on(), Arc::new(TagRenderer))
            .with_preferences(preferences.clone());
        let page = PageIdentity::new(NS_MAIN, "Sandbox").unwrap();
        let user = UserIdentity::new(3, "Reader");

        assert!(wiring.oracle().should_use_parsoid(&user, &NoQueryParams, &page));

        preferences.set_option(&user, PreferenceKey::ReadViews, "2");
        assert!(!wiring.oracle().should_use_parsoid(&user, &NoQueryParams, &page));
    }

    #[test]
    fn test_mobile_host_disables_default() {
        let wiring = ServiceWiring::new(articles_on(), Arc::new(TagRenderer));
        let page = PageIdentity::new(NS_MAIN, "Sandbox").unwrap();
        let user = UserIdentity::anonymous("192.0.2.1");

        assert!(
            wiring
                .oracle_for_host("en.wikipedia.org")
                .should_use_parsoid(&user, &NoQueryParams, &page)
        );
        assert!(
            !wiring
                .oracle_for_host("en.m.wikipedia.org")
                .should_use_parsoid(&user, &NoQueryParams, &page)
        );
    }

    #[tokio::test]
    async fn test_fetch_comparison_through_wired_store() {
        let pages = Arc::new(InMemoryPageStore::new());
        pages.insert(
            PageIdentity::new(NS_MAIN, "Sandbox").unwrap(),
            Content::wikitext("x"),
        );
        let wiring = ServiceWiring::new(SiteConfiguration::default(), Arc::new(TagRenderer))
            .with_page_lookup(pages);

        let result = wiring
            .fetch_comparison()
            .execute(
                parser_migration_application::FetchComparisonInput::new(NS_MAIN, "Sandbox"),
                &RenderOptions::new(),
                &UserIdentity::anonymous("192.0.2.1"),
            )
            .await
            .unwrap();

        assert_eq!(result.outputs[0].html, "<legacy>x");
        assert_eq!(result.outputs[1].html, "<parsoid>x");
    }

    #[tokio::test]
    async fn test_preview_renders_both_engines() {
        let wiring = ServiceWiring::new(SiteConfiguration::default(), Arc::new(TagRenderer));
        let page = PageIdentity::new(NS_MAIN, "Sandbox").unwrap();

        let outputs = wiring
            .preview_side_by_side()
            .execute(
                &Content::wikitext("y"),
                &page,
                &RenderOptions::new(),
                &UserIdentity::new(1, "Editor"),
            )
            .await
            .unwrap();

        assert_eq!(outputs.legacy.html, "<legacy>y");
        assert_eq!(outputs.primary().html, "<parsoid>y");
    }
}
