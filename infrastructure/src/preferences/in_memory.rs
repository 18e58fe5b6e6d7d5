//! In-memory user preference store.
//!
//! Holds options for registered users in a map, with optional site-wide
//! defaults. Anonymous users always read the defaults, matching how hosts
//! treat logged-out visitors.

use parser_migration_application::UserPreferenceStore;
use parser_migration_domain::{PreferenceKey, ReadViewPreference, UserIdentity};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{debug, warn};

/// Thread-safe in-memory [`UserPreferenceStore`].
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    options: RwLock<HashMap<(u64, PreferenceKey), String>>,
    defaults: HashMap<PreferenceKey, String>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default value returned for users who never set `key`.
    pub fn with_default(mut self, key: PreferenceKey, value: impl Into<String>) -> Self {
        self.defaults.insert(key, value.into());
        self
    }

    /// Store an option for a registered user.
    ///
    /// Returns `false` (and stores nothing) for anonymous users.
    pub fn set_option(&self, user: &UserIdentity, key: PreferenceKey, value: impl Into<String>) -> bool {
        if !user.is_registered() {
            debug!("Ignoring {} for anonymous user {}", key, user);
            return false;
        }
        match self.options.write() {
            Ok(mut options) => {
                options.insert((user.id, key), value.into());
                true
            }
            Err(_) => {
                warn!("Preference store lock poisoned; {} not saved", key);
                false
            }
        }
    }

    /// Store a read-view preference using its option code.
    pub fn set_read_view_preference(&self, user: &UserIdentity, preference: ReadViewPreference) -> bool {
        self.set_option(
            user,
            PreferenceKey::ReadViews,
            preference.option_value().to_string(),
        )
    }

    /// Remove a stored option, falling back to the default.
    ///
    /// Returns `false` if the store lock is poisoned.
    pub fn reset_option(&self, user: &UserIdentity, key: PreferenceKey) -> bool {
        match self.options.write() {
            Ok(mut options) => {
                options.remove(&(user.id, key));
                true
            }
            Err(_) => {
                warn!("Preference store lock poisoned; {} not reset", key);
                false
            }
        }
    }
}

impl UserPreferenceStore for InMemoryPreferenceStore {
    fn get_option(&self, user: &UserIdentity, key: PreferenceKey) -> Option<String> {
        let stored = if user.is_registered() {
            self.options
                .read()
                .ok()
                .and_then(|options| options.get(&(user.id, key)).cloned())
        } else {
            None
        };
        stored.or_else(|| self.defaults.get(&key).cloned())
    }
}
