//! Toolbox links for switching parsers on article views.
//!
//! Two links may be produced:
//!
//! - the side-by-side edit tool (`action=parsermigration-edit`), for users
//!   who enabled it in their preferences;
//! - a toggle that reloads the page with `useparsoid` flipped from the
//!   current decision.
//!
//! Nothing is shown on non-article views or when the query string is
//! ignored, since the toggle would have no effect there.

use crate::request::LinkBuilder;
use parser_migration_application::{ParsoidOracle, QueryParams, USE_PARSOID_PARAM};
use parser_migration_domain::{PageIdentity, ReadViewPreference, UserIdentity};
use serde::Serialize;
use tracing::{debug, warn};

/// Name of the side-by-side edit action
pub const EDIT_ACTION: &str = "parsermigration-edit";

/// Toolbox key of the toggle link
pub const TOGGLE_KEY: &str = "parsermigration";

/// Toolbox key of the edit tool link
pub const EDIT_TOOL_KEY: &str = "parsermigration-edit";

/// The view the sidebar is built for.
pub struct SidebarContext<'a> {
    pub user: &'a UserIdentity,
    pub request: &'a dyn QueryParams,
    pub page: &'a PageIdentity,
    /// Article, talk or history view (not a special page)
    pub is_article_related: bool,
}

/// One toolbox entry. `message_key` is resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    pub key: &'static str,
    pub href: String,
    pub message_key: &'static str,
}

/// Builds the parser toolbox links.
#[derive(Clone)]
pub struct SidebarToggleHook {
    oracle: ParsoidOracle,
    links: LinkBuilder,
}

impl SidebarToggleHook {
    pub fn new(oracle: ParsoidOracle, links: LinkBuilder) -> Self {
        Self { oracle, links }
    }

    pub fn on_sidebar_before_output(&self, context: &SidebarContext<'_>) -> Vec<SidebarLink> {
        if !context.is_article_related || !self.oracle.config().enable_query_string {
            return Vec::new();
        }

        let preferences = self.oracle.preferences();
        let edit_tool = preferences.editor_tool_enabled(context.user);
        let always = preferences.read_view_preference(context.user) == ReadViewPreference::AlwaysParsoid;

        let mut toolbox = Vec::new();
        if edit_tool {
            toolbox.extend(self.link(
                context.page,
                EDIT_TOOL_KEY,
                &[("action", EDIT_ACTION)],
                "parsermigration-toolbox-label",
            ));
        }

        let show_toggle = edit_tool || always || self.oracle.is_parsoid_default_for(context.page);
        if show_toggle {
            let using_parsoid = self
                .oracle
                .should_use_parsoid(context.user, context.request, context.page);
            let (flip, label) = if using_parsoid {
                ("0", "parsermigration-use-legacy-parser-toolbox-label")
            } else {
                ("1", "parsermigration-use-parsoid-toolbox-label")
            };
            debug!(
                "Parser toggle for {}: currently {}",
                context.page,
                if using_parsoid { "Parsoid" } else { "legacy" }
            );
            toolbox.extend(self.link(context.page, TOGGLE_KEY, &[(USE_PARSOID_PARAM, flip)], label));
        }

        toolbox
    }

    fn link(
        &self,
        page: &PageIdentity,
        key: &'static str,
        params: &[(&str, &str)],
        message_key: &'static str,
    ) -> Option<SidebarLink> {
        let Some(href) = self.links.local_url(page, params) else {
            warn!("No local URL for {} (unknown namespace)", page);
            return None;
        };
        Some(SidebarLink {
            key,
            href,
            message_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parser_migration_application::{NoQueryParams, UserPreferenceStore};
    use parser_migration_domain::{NS_MAIN, PreferenceKey, SiteConfiguration};
    use std::collections::HashMap;
    use std::sync::Arc;

    struct Prefs {
        read_views: &'static str,
        edit_tool: &'static str,
    }

    impl UserPreferenceStore for Prefs {
        fn get_option(&self, _user: &UserIdentity, key: PreferenceKey) -> Option<String> {
            Some(
                match key {
                    PreferenceKey::ReadViews => self.read_views,
                    PreferenceKey::EditorTool => self.edit_tool,
                }
                .to_string(),
            )
        }
    }

    fn hook(config: SiteConfiguration, read_views: &'static str, edit_tool: &'static str) -> SidebarToggleHook {
        let oracle = ParsoidOracle::new(
            Arc::new(config),
            Arc::new(Prefs {
                read_views,
                edit_tool,
            }),
        );
        SidebarToggleHook::new(oracle, LinkBuilder::default())
    }

    fn build(hook: &SidebarToggleHook, request: &dyn QueryParams, article: bool) -> Vec<SidebarLink> {
        let user = UserIdentity::new(5, "Reader");
        let page = PageIdentity::new(NS_MAIN, "Sandbox").unwrap();
        hook.on_sidebar_before_output(&SidebarContext {
            user: &user,
            request,
            page: &page,
            is_article_related: article,
        })
    }

    fn articles_on() -> SiteConfiguration {
        SiteConfiguration {
            enable_parsoid_article_pages: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_nothing_on_non_article_views() {
        let hook = hook(articles_on(), "1", "1");
        assert!(build(&hook, &NoQueryParams, false).is_empty());
    }

    #[test]
    fn test_nothing_when_query_string_disabled() {
        let config = SiteConfiguration {
            enable_query_string: false,
            ..articles_on()
        };
        let hook = hook(config, "1", "1");
        assert!(build(&hook, &NoQueryParams, true).is_empty());
    }

    #[test]
    fn test_no_toggle_without_reason() {
        let hook = hook(SiteConfiguration::default(), "0", "0");
        assert!(build(&hook, &NoQueryParams, true).is_empty());
    }

    #[test]
    fn test_default_parsoid_page_offers_legacy() {
        let hook = hook(articles_on(), "0", "0");
        let links = build(&hook, &NoQueryParams, true);

        assert_eq!(
            links,
            vec![SidebarLink {
                key: TOGGLE_KEY,
                href: "/w/index.php?title=Sandbox&useparsoid=0".to_string(),
                message_key: "parsermigration-use-legacy-parser-toolbox-label",
            }]
        );
    }

    #[test]
    fn test_toggle_flips_query_override() {
        let hook = hook(articles_on(), "0", "0");
        let request = HashMap::from([("useparsoid".to_string(), "0".to_string())]);
        let links = build(&hook, &request, true);

        assert_eq!(links[0].href, "/w/index.php?title=Sandbox&useparsoid=1");
        assert_eq!(links[0].message_key, "parsermigration-use-parsoid-toolbox-label");
    }

    #[test]
    fn test_always_preference_shows_toggle() {
        let hook = hook(SiteConfiguration::default(), "1", "0");
        let links = build(&hook, &NoQueryParams, true);

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].key, TOGGLE_KEY);
        assert!(links[0].href.ends_with("useparsoid=0"));
    }

    #[test]
    fn test_edit_tool_adds_both_links() {
        let hook = hook(SiteConfiguration::default(), "0", "1");
        let links = build(&hook, &NoQueryParams, true);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].key, EDIT_TOOL_KEY);
        assert_eq!(
            links[0].href,
            "/w/index.php?title=Sandbox&action=parsermigration-edit"
        );
        assert_eq!(links[0].message_key, "parsermigration-toolbox-label");
        assert_eq!(links[1].message_key, "parsermigration-use-parsoid-toolbox-label");
    }
}
