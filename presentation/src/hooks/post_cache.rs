//! Client-side signals for Parsoid-rendered pages.

use parser_migration_domain::{RenderedOutput, SiteConfiguration};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Client module showing the one-time Parsoid notice
pub const NOTICE_MODULE: &str = "ext.parsermigration.notice";

/// JS config vars and modules added to a page output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientOutput {
    pub js_config_vars: BTreeMap<String, Value>,
    pub modules: Vec<String>,
}

impl ClientOutput {
    pub fn set_js_config_var(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.js_config_vars.insert(name.into(), value.into());
    }

    /// Add a module once.
    pub fn add_module(&mut self, module: &str) {
        if !self.modules.iter().any(|m| m == module) {
            self.modules.push(module.to_string());
        }
    }
}

/// Marks Parsoid output for client scripts and requests the user notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCacheTransformHook {
    notice_version: u32,
    notice_days: u32,
}

impl PostCacheTransformHook {
    pub fn new(config: &SiteConfiguration) -> Self {
        Self {
            notice_version: config.user_notice_version,
            notice_days: config.user_notice_days,
        }
    }

    pub fn on_post_cache_transform(&self, output: &RenderedOutput, client: &mut ClientOutput) {
        if !output.is_parsoid_content() {
            return;
        }
        client.set_js_config_var("parsermigration-parsoid", true);
        client.set_js_config_var("parsermigration-notice-version", self.notice_version);
        client.set_js_config_var("parsermigration-notice-days", self.notice_days);
        client.add_module(NOTICE_MODULE);
    }
}
