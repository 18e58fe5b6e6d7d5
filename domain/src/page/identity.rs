//! Page identity snapshot.
//!
//! A [`PageIdentity`] carries everything the migration policy needs to know
//! about a page: namespace, DB key, content model, and the talk/redirect
//! flags. It is built per request and never mutated.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content model tag for wikitext pages.
pub const CONTENT_MODEL_WIKITEXT: &str = "wikitext";

/// Main (article) namespace.
pub const NS_MAIN: i32 = 0;

/// Talk namespace paired with [`NS_MAIN`].
pub const NS_TALK: i32 = 1;

/// Whether a namespace number is a talk namespace.
///
/// Talk namespaces are the odd, positive numbers; special and media
/// namespaces (negative) are never talk namespaces.
pub fn is_talk_namespace(namespace: i32) -> bool {
    namespace > NS_MAIN && namespace % 2 == 1
}

/// Identity of the page a decision or render is made for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageIdentity {
    namespace: i32,
    db_key: String,
    content_model: String,
    is_talk: bool,
    is_redirect: bool,
}

impl PageIdentity {
    /// Create a wikitext page from a namespace and human-readable title.
    ///
    /// The title is normalised to its DB key form: surrounding whitespace
    /// trimmed, runs of spaces/underscores collapsed to one underscore, and
    /// the first letter upper-cased.
    pub fn new(namespace: i32, title: &str) -> Result<Self, DomainError> {
        let db_key = normalize_db_key(title)
            .ok_or_else(|| DomainError::InvalidTitle(title.to_string()))?;
        Ok(Self {
            namespace,
            db_key,
            content_model: CONTENT_MODEL_WIKITEXT.to_string(),
            is_talk: is_talk_namespace(namespace),
            is_redirect: false,
        })
    }

    // ==================== Builder Methods ====================

    pub fn with_content_model(mut self, model: impl Into<String>) -> Self {
        self.content_model = model.into();
        self
    }

    pub fn with_redirect(mut self, is_redirect: bool) -> Self {
        self.is_redirect = is_redirect;
        self
    }

    /// Override the talk flag derived from the namespace.
    pub fn with_talk_page(mut self, is_talk: bool) -> Self {
        self.is_talk = is_talk;
        self
    }

    // ==================== Accessors ====================

    pub fn namespace(&self) -> i32 {
        self.namespace
    }

    pub fn db_key(&self) -> &str {
        &self.db_key
    }

    /// Title text with underscores shown as spaces.
    pub fn text(&self) -> String {
        self.db_key.replace('_', " ")
    }

    pub fn content_model(&self) -> &str {
        &self.content_model
    }

    pub fn has_content_model(&self, model: &str) -> bool {
        self.content_model == model
    }

    pub fn is_talk_page(&self) -> bool {
        self.is_talk
    }

    pub fn is_redirect(&self) -> bool {
        self.is_redirect
    }

    /// Key hashed for rollout bucketing: `"{namespace}:{db_key}"`.
    pub fn rollout_key(&self) -> String {
        format!("{}:{}", self.namespace, self.db_key)
    }
}

impl fmt::Display for PageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.db_key)
    }
}

fn normalize_db_key(title: &str) -> Option<String> {
    let collapsed = title
        .split(|c: char| c == ' ' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    let mut chars = collapsed.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_key_normalisation() {
        let page = PageIdentity::new(NS_MAIN, "Main Page").unwrap();
        assert_eq!(page.db_key(), "Main_Page");
        assert_eq!(page.text(), "Main Page");

        let page = PageIdentity::new(NS_MAIN, "  main__page ").unwrap();
        assert_eq!(page.db_key(), "Main_page");
    }

    #[test]
    fn test_empty_title_is_error() {
        assert_eq!(
            PageIdentity::new(NS_MAIN, " _ "),
            Err(DomainError::InvalidTitle(" _ ".to_string()))
        );
    }

    #[test]
    fn test_talk_flag_from_namespace() {
        assert!(!PageIdentity::new(NS_MAIN, "A").unwrap().is_talk_page());
        assert!(PageIdentity::new(NS_TALK, "A").unwrap().is_talk_page());
        assert!(PageIdentity::new(3, "A").unwrap().is_talk_page());
        assert!(!PageIdentity::new(4, "A").unwrap().is_talk_page());
        assert!(!PageIdentity::new(-1, "A").unwrap().is_talk_page());
    }

    #[test]
    fn test_talk_flag_override() {
        let page = PageIdentity::new(NS_MAIN, "Forum").unwrap().with_talk_page(true);
        assert!(page.is_talk_page());
    }

    #[test]
    fn test_content_model_defaults_to_wikitext() {
        let page = PageIdentity::new(NS_MAIN, "A").unwrap();
        assert!(page.has_content_model(CONTENT_MODEL_WIKITEXT));

        let page = page.with_content_model("json");
        assert_eq!(page.content_model(), "json");
        assert!(!page.has_content_model(CONTENT_MODEL_WIKITEXT));
    }

    #[test]
    fn test_rollout_key() {
        let page = PageIdentity::new(NS_TALK, "Page 1").unwrap();
        assert_eq!(page.rollout_key(), "1:Page_1");
        assert_eq!(page.to_string(), "1:Page_1");
    }
}
