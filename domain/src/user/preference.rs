//! Read-view preference and preference keys.
//!
//! Defines [`ReadViewPreference`], the user's three-way choice for which
//! renderer serves page views:
//! - AlwaysParsoid: always use Parsoid read views
//! - Default: follow the site configuration
//! - NeverParsoid: always use the legacy parser
//!
//! The preference store persists the choice as an integer option value
//! (`1` / `0` / `2`); [`ReadViewPreference::from_option_value`] is the single
//! place those codes are interpreted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keys read from the user preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    /// Three-valued read-view preference
    ReadViews,
    /// Boolean toggle for the side-by-side edit tool
    EditorTool,
}

impl PreferenceKey {
    /// Option name as stored by the preference store.
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::ReadViews => "parsermigration-parsoid-readviews",
            PreferenceKey::EditorTool => "parsermigration",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's read-view choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadViewPreference {
    /// Always render read views with Parsoid
    AlwaysParsoid,
    /// Follow the site configuration
    #[default]
    Default,
    /// Never render read views with Parsoid
    NeverParsoid,
}

impl ReadViewPreference {
    /// All variants in the order they are offered to users.
    pub const ALL: [ReadViewPreference; 3] = [
        ReadViewPreference::AlwaysParsoid,
        ReadViewPreference::Default,
        ReadViewPreference::NeverParsoid,
    ];

    /// Integer code persisted by the preference store.
    pub fn option_value(&self) -> i64 {
        match self {
            ReadViewPreference::AlwaysParsoid => 1,
            ReadViewPreference::Default => 0,
            ReadViewPreference::NeverParsoid => 2,
        }
    }

    /// Interpret a stored option value.
    ///
    /// Missing, non-numeric and unknown codes all read as
    /// [`ReadViewPreference::Default`], matching how an unset option behaves.
    pub fn from_option_value(value: Option<&str>) -> Self {
        match value.map(str::trim).and_then(|v| v.parse::<i64>().ok()) {
            Some(1) => ReadViewPreference::AlwaysParsoid,
            Some(2) => ReadViewPreference::NeverParsoid,
            _ => ReadViewPreference::Default,
        }
    }

    /// Apply this preference to a config-derived opt-in state.
    pub fn apply(&self, opt_in: bool) -> bool {
        match self {
            ReadViewPreference::AlwaysParsoid => true,
            ReadViewPreference::Default => opt_in,
            ReadViewPreference::NeverParsoid => false,
        }
    }

    /// Message key labelling this option in the preferences form.
    pub fn message_key(&self) -> &'static str {
        match self {
            ReadViewPreference::AlwaysParsoid => "parsermigration-parsoid-readviews-always",
            ReadViewPreference::Default => "parsermigration-parsoid-readviews-default",
            ReadViewPreference::NeverParsoid => "parsermigration-parsoid-readviews-never",
        }
    }
}

impl fmt::Display for ReadViewPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadViewPreference::AlwaysParsoid => write!(f, "always-parsoid"),
            ReadViewPreference::Default => write!(f, "default"),
            ReadViewPreference::NeverParsoid => write!(f, "never-parsoid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_value_codes() {
        assert_eq!(ReadViewPreference::AlwaysParsoid.option_value(), 1);
        assert_eq!(ReadViewPreference::Default.option_value(), 0);
        assert_eq!(ReadViewPreference::NeverParsoid.option_value(), 2);
    }

    #[test]
    fn test_from_option_value() {
        assert_eq!(
            ReadViewPreference::from_option_value(Some("1")),
            ReadViewPreference::AlwaysParsoid
        );
        assert_eq!(
            ReadViewPreference::from_option_value(Some(" 2 ")),
            ReadViewPreference::NeverParsoid
        );
        assert_eq!(
            ReadViewPreference::from_option_value(Some("0")),
            ReadViewPreference::Default
        );
    }

    #[test]
    fn test_unknown_values_read_as_default() {
        for value in [None, Some(""), Some("7"), Some("-1"), Some("always")] {
            assert_eq!(
                ReadViewPreference::from_option_value(value),
                ReadViewPreference::Default,
                "value {:?}",
                value
            );
        }
    }

    #[test]
    fn test_round_trip_through_option_value() {
        for pref in ReadViewPreference::ALL {
            let stored = pref.option_value().to_string();
            assert_eq!(ReadViewPreference::from_option_value(Some(&stored)), pref);
        }
    }

    #[test]
    fn test_apply() {
        assert!(ReadViewPreference::AlwaysParsoid.apply(false));
        assert!(!ReadViewPreference::NeverParsoid.apply(true));
        assert!(ReadViewPreference::Default.apply(true));
        assert!(!ReadViewPreference::Default.apply(false));
    }

    #[test]
    fn test_preference_key_names() {
        assert_eq!(
            PreferenceKey::ReadViews.as_str(),
            "parsermigration-parsoid-readviews"
        );
        assert_eq!(PreferenceKey::EditorTool.to_string(), "parsermigration");
    }
}
