//! Preference definitions for the host's preferences form.

use parser_migration_domain::{PreferenceKey, ReadViewPreference};
use serde::Serialize;
use std::collections::BTreeMap;

/// Preferences tab section both options appear in
pub const PREFERENCE_SECTION: &str = "editing/developertools";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PreferenceKind {
    /// Drop-down; options are (message key, stored value) pairs
    Select {
        #[serde(rename = "options-messages", serialize_with = "as_map")]
        options: Vec<(&'static str, i64)>,
    },
    Toggle,
}

fn as_map<S: serde::Serializer>(options: &[(&'static str, i64)], s: S) -> Result<S::Ok, S::Error> {
    s.collect_map(options.iter().map(|(k, v)| (k, v)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceDefinition {
    #[serde(skip)]
    pub key: PreferenceKey,
    #[serde(flatten)]
    pub kind: PreferenceKind,
    #[serde(rename = "label-message")]
    pub label_message: &'static str,
    #[serde(rename = "help-message")]
    pub help_message: &'static str,
    pub section: &'static str,
}

/// The read-view selector and the edit tool toggle.
pub fn preference_definitions() -> Vec<PreferenceDefinition> {
    vec![
        PreferenceDefinition {
            key: PreferenceKey::ReadViews,
            kind: PreferenceKind::Select {
                options: ReadViewPreference::ALL
                    .iter()
                    .map(|p| (p.message_key(), p.option_value()))
                    .collect(),
            },
            label_message: "parsermigration-parsoid-readviews-selector-label",
            help_message: "parsermigration-parsoid-readviews-selector-help",
            section: PREFERENCE_SECTION,
        },
        PreferenceDefinition {
            key: PreferenceKey::EditorTool,
            kind: PreferenceKind::Toggle,
            label_message: "parsermigration-pref-label",
            help_message: "parsermigration-pref-help",
            section: PREFERENCE_SECTION,
        },
    ]
}

/// Add both definitions to the host's preference table, keyed by option name.
pub fn on_get_preferences(defaults: &mut BTreeMap<String, PreferenceDefinition>) {
    for definition in preference_definitions() {
        defaults.insert(definition.key.as_str().to_string(), definition);
    }
}
