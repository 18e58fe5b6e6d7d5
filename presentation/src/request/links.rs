//! Local URLs for pages, in `index.php?title=...` form.

use parser_migration_domain::PageIdentity;
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Canonical names of the core namespaces
const CANONICAL_NAMESPACES: [(i32, &str); 15] = [
    (1, "Talk"),
    (2, "User"),
    (3, "User_talk"),
    (4, "Project"),
    (5, "Project_talk"),
    (6, "File"),
    (7, "File_talk"),
    (8, "MediaWiki"),
    (9, "MediaWiki_talk"),
    (10, "Template"),
    (11, "Template_talk"),
    (12, "Help"),
    (13, "Help_talk"),
    (14, "Category"),
    (15, "Category_talk"),
];

/// Builds local URLs with extra query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    script: String,
    namespaces: BTreeMap<i32, String>,
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new("/w/index.php")
    }
}

impl LinkBuilder {
    /// Builder for a wiki whose entry point is `script`.
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            namespaces: CANONICAL_NAMESPACES
                .iter()
                .map(|(ns, name)| (*ns, name.to_string()))
                .collect(),
        }
    }

    /// Register (or rename) a namespace.
    pub fn with_namespace(mut self, namespace: i32, name: impl Into<String>) -> Self {
        self.namespaces.insert(namespace, name.into());
        self
    }

    /// Title with namespace prefix, or `None` for an unknown namespace.
    pub fn prefixed_title(&self, page: &PageIdentity) -> Option<String> {
        if page.namespace() == 0 {
            return Some(page.db_key().to_string());
        }
        self.namespaces
            .get(&page.namespace())
            .map(|name| format!("{}:{}", name, page.db_key()))
    }

    /// Split a prefixed title (`Talk:Foo`) into namespace and title text.
    ///
    /// Prefixes match case-insensitively with spaces or underscores; an
    /// unknown prefix is part of a main-namespace title.
    pub fn split_title<'t>(&self, prefixed: &'t str) -> (i32, &'t str) {
        if let Some((prefix, rest)) = prefixed.split_once(':') {
            let wanted = prefix.trim().replace(' ', "_");
            if let Some((ns, _)) = self
                .namespaces
                .iter()
                .find(|(_, name)| name.eq_ignore_ascii_case(&wanted))
            {
                return (*ns, rest);
            }
        }
        (0, prefixed)
    }

    /// Local URL for `page` with `params` appended after the title.
    pub fn local_url(&self, page: &PageIdentity, params: &[(&str, &str)]) -> Option<String> {
        let title = self.prefixed_title(page)?;
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("title", &title);
        for (name, value) in params {
            query.append_pair(name, value);
        }
        Some(format!("{}?{}", self.script, query.finish()))
    }
}
