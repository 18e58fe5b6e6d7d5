//! Two-column preview markup: legacy output on the left, Parsoid on the
//! right.

use parser_migration_application::SideBySideOutputs;

/// Escape text for use in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the side-by-side table with localized column headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideBySidePreview {
    current_label: String,
    new_label: String,
}

impl Default for SideBySidePreview {
    fn default() -> Self {
        Self::new("Current", "New")
    }
}

impl SideBySidePreview {
    /// Labels are plain text (the host's `parsermigration-current` and
    /// `parsermigration-new` messages); they are escaped on output.
    pub fn new(current_label: impl Into<String>, new_label: impl Into<String>) -> Self {
        Self {
            current_label: current_label.into(),
            new_label: new_label.into(),
        }
    }

    pub fn render(&self, outputs: &SideBySideOutputs) -> String {
        format!(
            "<table class=\"mw-parsermigration-sxs\"><tbody><tr>\n\
             <th>{}</th>\n\
             <th>{}</th>\n\
             </tr><tr>\n\
             <td class=\"mw-parsermigration-left\">\n\n{}\n\n</td>\
             <td class=\"mw-parsermigration-right\">\n\n{}\n\n</td>\
             </tr></tbody></table>\n",
            escape_html(&self.current_label),
            escape_html(&self.new_label),
            outputs.legacy.html,
            outputs.parsoid.html,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parser_migration_domain::{RenderEngine, RenderedOutput};

    fn outputs() -> SideBySideOutputs {
        SideBySideOutputs {
            legacy: RenderedOutput::new(RenderEngine::Legacy, "<p>old</p>"),
            parsoid: RenderedOutput::new(RenderEngine::Parsoid, "<section><p>new</p></section>"),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_columns_in_engine_order() {
        let html = SideBySidePreview::default().render(&outputs());

        assert!(html.starts_with("<table class=\"mw-parsermigration-sxs\">"));
        let left = html.find("mw-parsermigration-left").unwrap();
        let right = html.find("mw-parsermigration-right").unwrap();
        let old = html.find("<p>old</p>").unwrap();
        let new = html.find("<p>new</p>").unwrap();
        assert!(left < old && old < right && right < new);
    }

    #[test]
    fn test_labels_are_escaped_but_outputs_are_not() {
        let html = SideBySidePreview::new("<b>Current</b>", "New & improved").render(&outputs());

        assert!(html.contains("<th>&lt;b&gt;Current&lt;/b&gt;</th>"));
        assert!(html.contains("<th>New &amp; improved</th>"));
        assert!(html.contains("<section><p>new</p></section>"));
    }
}
