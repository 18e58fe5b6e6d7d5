//! In-memory page store.
//!
//! Keeps pages, their latest content and redirect targets keyed by
//! `namespace:db_key`. Useful for embedding hosts with a small fixed page
//! set and for exercising the comparison API.

use async_trait::async_trait;
use parser_migration_application::{LookupError, PageLookup};
use parser_migration_domain::{Content, PageIdentity};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
struct StoredPage {
    page: PageIdentity,
    content: Option<Content>,
    redirect_target: Option<PageIdentity>,
}

/// Thread-safe in-memory [`PageLookup`].
#[derive(Debug, Default)]
pub struct InMemoryPageStore {
    pages: RwLock<HashMap<String, StoredPage>>,
}

impl InMemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a page with its latest content.
    ///
    /// Returns `false` (and stores nothing) if the store lock is poisoned.
    pub fn insert(&self, page: PageIdentity, content: Content) -> bool {
        self.store(StoredPage {
            page,
            content: Some(content),
            redirect_target: None,
        })
    }

    /// Insert a redirect page pointing at `target`.
    pub fn insert_redirect(
        &self,
        page: PageIdentity,
        content: Content,
        target: PageIdentity,
    ) -> bool {
        self.store(StoredPage {
            page: page.with_redirect(true),
            content: Some(content),
            redirect_target: Some(target),
        })
    }

    /// Insert a page whose revision content cannot be loaded.
    pub fn insert_without_content(&self, page: PageIdentity) -> bool {
        self.store(StoredPage {
            page,
            content: None,
            redirect_target: None,
        })
    }

    pub fn len(&self) -> usize {
        self.pages.read().map(|pages| pages.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn store(&self, stored: StoredPage) -> bool {
        match self.pages.write() {
            Ok(mut pages) => {
                debug!("Storing page {}", stored.page);
                pages.insert(stored.page.rollout_key(), stored);
                true
            }
            Err(_) => {
                warn!("Page store lock poisoned; {} not saved", stored.page);
                false
            }
        }
    }

    fn get(&self, key: &str) -> Result<Option<StoredPage>, LookupError> {
        let pages = self
            .pages
            .read()
            .map_err(|_| LookupError::Backend("page store lock poisoned".to_string()))?;
        Ok(pages.get(key).cloned())
    }
}

#[async_trait]
impl PageLookup for InMemoryPageStore {
    async fn find_page(&self, namespace: i32, title: &str) -> Result<PageIdentity, LookupError> {
        let probe = PageIdentity::new(namespace, title)
            .map_err(|_| LookupError::MissingTitle(title.to_string()))?;
        self.get(&probe.rollout_key())?
            .map(|stored| stored.page)
            .ok_or_else(|| LookupError::MissingTitle(title.to_string()))
    }

    async fn redirect_target(
        &self,
        page: &PageIdentity,
    ) -> Result<Option<PageIdentity>, LookupError> {
        let Some(stored) = self.get(&page.rollout_key())? else {
            return Ok(None);
        };
        let Some(target) = stored.redirect_target else {
            return Ok(None);
        };
        // Prefer the stored identity so the target's content model is kept
        Ok(Some(
            self.get(&target.rollout_key())?
                .map(|t| t.page)
                .unwrap_or(target),
        ))
    }

    async fn latest_content(&self, page: &PageIdentity) -> Result<Content, LookupError> {
        self.get(&page.rollout_key())?
            .and_then(|stored| stored.content)
            .ok_or_else(|| LookupError::MissingContent(page.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parser_migration_domain::{NS_MAIN, NS_TALK};

    fn page(namespace: i32, title: &str) -> PageIdentity {
        PageIdentity::new(namespace, title).unwrap()
    }

    #[tokio::test]
    async fn test_find_page_normalizes_title() {
        let store = InMemoryPageStore::new();
        store.insert(page(NS_MAIN, "Main Page"), Content::wikitext("hi"));

        let found = store.find_page(NS_MAIN, "main_Page").await.unwrap();
        assert_eq!(found.db_key(), "Main_Page");
    }

    #[tokio::test]
    async fn test_namespaces_are_distinct() {
        let store = InMemoryPageStore::new();
        store.insert(page(NS_MAIN, "Sandbox"), Content::wikitext("article"));

        let err = store.find_page(NS_TALK, "Sandbox").await.unwrap_err();
        assert_eq!(err, LookupError::MissingTitle("Sandbox".to_string()));
    }

    #[tokio::test]
    async fn test_latest_content() {
        let store = InMemoryPageStore::new();
        store.insert(page(NS_MAIN, "Sandbox"), Content::wikitext("''x''"));
        store.insert_without_content(page(NS_MAIN, "Broken"));

        let content = store.latest_content(&page(NS_MAIN, "Sandbox")).await.unwrap();
        assert_eq!(content.text, "''x''");

        let err = store
            .latest_content(&page(NS_MAIN, "Broken"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_redirect_target_resolves_stored_page() {
        let store = InMemoryPageStore::new();
        store.insert(
            page(NS_MAIN, "Target").with_content_model("proofread-page"),
            Content::new("proofread-page", "body"),
        );
        store.insert_redirect(
            page(NS_MAIN, "Alias"),
            Content::wikitext("#REDIRECT [[Target]]"),
            page(NS_MAIN, "Target"),
        );

        let alias = store.find_page(NS_MAIN, "Alias").await.unwrap();
        assert!(alias.is_redirect());

        let target = store.redirect_target(&alias).await.unwrap().unwrap();
        assert_eq!(target.content_model(), "proofread-page");
    }

    #[test]
    fn test_poisoned_lock_rejects_writes() {
        let store = std::sync::Arc::new(InMemoryPageStore::new());
        let poisoner = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.pages.write().unwrap();
            panic!("poison the page store lock");
        })
        .join();

        assert!(!store.insert(page(NS_MAIN, "Sandbox"), Content::wikitext("x")));
        assert!(!store.insert_without_content(page(NS_MAIN, "Broken")));
    }

    #[tokio::test]
    async fn test_non_redirect_has_no_target() {
        let store = InMemoryPageStore::new();
        store.insert(page(NS_MAIN, "Plain"), Content::wikitext("x"));

        assert_eq!(store.len(), 1);
        assert!(
            store
                .redirect_target(&page(NS_MAIN, "Plain"))
                .await
                .unwrap()
                .is_none()
        );
    }
}
