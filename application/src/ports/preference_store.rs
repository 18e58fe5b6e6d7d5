//! User preference store port
//!
//! Read-only access to per-user options. Writing preferences belongs to the
//! host's preferences form, not to this crate.

use parser_migration_domain::{PreferenceKey, ReadViewPreference, UserIdentity};

/// Port for reading user options.
pub trait UserPreferenceStore: Send + Sync {
    /// Raw stored value of `key` for `user`, if set.
    fn get_option(&self, user: &UserIdentity, key: PreferenceKey) -> Option<String>;

    /// The user's read-view preference.
    fn read_view_preference(&self, user: &UserIdentity) -> ReadViewPreference {
        ReadViewPreference::from_option_value(
            self.get_option(user, PreferenceKey::ReadViews).as_deref(),
        )
    }

    /// Whether the user enabled the side-by-side edit tool.
    fn editor_tool_enabled(&self, user: &UserIdentity) -> bool {
        self.get_option(user, PreferenceKey::EditorTool)
            .as_deref()
            .and_then(parser_migration_domain::parse_bool)
            .unwrap_or(false)
    }
}

/// Store with no options set; every user gets the defaults.
pub struct NoPreferences;

impl UserPreferenceStore for NoPreferences {
    fn get_option(&self, _user: &UserIdentity, _key: PreferenceKey) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, &'static str);

    impl UserPreferenceStore for Fixed {
        fn get_option(&self, _user: &UserIdentity, key: PreferenceKey) -> Option<String> {
            match key {
                PreferenceKey::ReadViews => Some(self.0.to_string()),
                PreferenceKey::EditorTool => Some(self.1.to_string()),
            }
        }
    }

    #[test]
    fn test_no_preferences_defaults() {
        let user = UserIdentity::new(1, "Alice");
        assert_eq!(
            NoPreferences.read_view_preference(&user),
            ReadViewPreference::Default
        );
        assert!(!NoPreferences.editor_tool_enabled(&user));
    }

    #[test]
    fn test_default_methods_parse_stored_values() {
        let user = UserIdentity::new(1, "Alice");
        let store = Fixed("1", "1");
        assert_eq!(
            store.read_view_preference(&user),
            ReadViewPreference::AlwaysParsoid
        );
        assert!(store.editor_tool_enabled(&user));

        let store = Fixed("2", "0");
        assert_eq!(
            store.read_view_preference(&user),
            ReadViewPreference::NeverParsoid
        );
        assert!(!store.editor_tool_enabled(&user));
    }
}
