//! Mobile view detection from the request host.
//!
//! Wikis serve their mobile frontend from a sibling host with an `m` label
//! after the language code (`en.m.wikipedia.org`), or a leading `m.` on
//! single-site setups (`m.example.org`).

use parser_migration_application::MobileViewDetector;

/// Detects mobile views by looking for an `m` label in the request host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostnameMobileDetector {
    host: String,
}

impl HostnameMobileDetector {
    /// Build a detector for one request. A port suffix is ignored.
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn is_mobile_host(&self) -> bool {
        let host = self.host.split(':').next().unwrap_or_default();
        let labels: Vec<&str> = host.split('.').collect();
        // The final label is the TLD and never the mobile marker
        labels.len() > 2
            && labels[..labels.len() - 2]
                .iter()
                .any(|label| label.eq_ignore_ascii_case("m"))
    }
}

impl MobileViewDetector for HostnameMobileDetector {
    fn should_display_mobile_view(&self) -> bool {
        self.is_mobile_host()
    }
}

/// Fixed answer, for hosts that decide mobile views elsewhere (a cookie or
/// a `useformat` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticMobileView(pub bool);

impl MobileViewDetector for StaticMobileView {
    fn should_display_mobile_view(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_mobile_host() {
        assert!(HostnameMobileDetector::new("en.m.wikipedia.org").should_display_mobile_view());
        assert!(HostnameMobileDetector::new("de.M.wiktionary.org").should_display_mobile_view());
    }

    #[test]
    fn test_leading_mobile_label() {
        assert!(HostnameMobileDetector::new("m.example.org").should_display_mobile_view());
        assert!(HostnameMobileDetector::new("m.example.org:8080").should_display_mobile_view());
    }

    #[test]
    fn test_desktop_hosts() {
        for host in ["en.wikipedia.org", "example.org", "localhost", "mw.example.org", "example.m", ""] {
            assert!(
                !HostnameMobileDetector::new(host).should_display_mobile_view(),
                "{} should be desktop",
                host
            );
        }
    }

    #[test]
    fn test_static_view() {
        assert!(StaticMobileView(true).should_display_mobile_view());
        assert!(!StaticMobileView(false).should_display_mobile_view());
    }
}
