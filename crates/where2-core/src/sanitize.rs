//! HTML sanitization.
//!
//! Wraps an `ammonia` allow-list tuned to the markup the pipeline emits.
//! Everything outside the list is dropped: `<script>` and `<style>` lose
//! their content as well, other unknown tags are unwrapped to their text.

use std::collections::{HashMap, HashSet};

use crate::config::{
    ALLOWED_STYLE_PROPERTIES, ALLOWED_TAGS, ALLOWED_URL_SCHEMES, LINK_REL,
};

/// Allow-list HTML sanitizer for rendered fragments.
pub struct Sanitizer {
    cleaner: ammonia::Builder<'static>,
}

impl Sanitizer {
    pub fn new() -> Self {
        let tag_attributes = HashMap::from([
            ("a", HashSet::from(["href", "style"])),
            ("div", HashSet::from(["style"])),
        ]);

        let mut cleaner = ammonia::Builder::default();
        cleaner
            .tags(ALLOWED_TAGS.iter().copied().collect())
            .tag_attributes(tag_attributes)
            .generic_attributes(HashSet::new())
            .url_schemes(ALLOWED_URL_SCHEMES.iter().copied().collect())
            .filter_style_properties(ALLOWED_STYLE_PROPERTIES.iter().copied().collect())
            .link_rel(Some(LINK_REL))
            .strip_comments(true);
        Self { cleaner }
    }

    /// Sanitize an HTML fragment.
    ///
    /// The result never contains script elements, event handler attributes
    /// or `javascript:` URLs.
    pub fn clean(&self, html: &str) -> String {
        self.cleaner.clean(html).to_string()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_script() {
        let clean = Sanitizer::new().clean("<script>alert('xss')</script>ok");
        assert!(!clean.contains("script"));
        assert!(!clean.contains("alert"));
        assert!(clean.contains("ok"));
    }

    #[test]
    fn test_strips_event_handlers() {
        let clean = Sanitizer::new().clean(r#"<strong onclick="steal()">hi</strong>"#);
        assert_eq!(clean, "<strong>hi</strong>");
    }

    #[test]
    fn test_strips_javascript_href() {
        let clean = Sanitizer::new().clean(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!clean.contains("javascript"));
        assert!(clean.contains(">x</a>"));
    }

    #[test]
    fn test_keeps_allowed_markup() {
        let sanitizer = Sanitizer::new();
        assert_eq!(sanitizer.clean("<h1>Title</h1>"), "<h1>Title</h1>");
        assert_eq!(sanitizer.clean("<h4>Sub</h4>"), "<h4>Sub</h4>");
        assert_eq!(
            sanitizer.clean("<strong>a</strong><em>b</em><br>"),
            "<strong>a</strong><em>b</em><br>"
        );

        let link = sanitizer.clean(r#"<a href="https://example.com">x</a>"#);
        assert!(link.contains(r#"href="https://example.com""#));
        assert!(link.contains(r#"rel="noopener noreferrer nofollow""#));
    }

    #[test]
    fn test_unwraps_disallowed_tags() {
        let clean = Sanitizer::new().clean("<h5>five</h5><img src=x onerror=alert(1)>");
        assert_eq!(clean, "five");
    }

    #[test]
    fn test_filters_style_properties() {
        let clean = Sanitizer::new()
            .clean(r#"<div style="overflow-wrap: anywhere; position: fixed">x</div>"#);
        assert!(clean.contains("overflow-wrap"));
        assert!(!clean.contains("position"));
    }

    #[test]
    fn test_idempotent() {
        let sanitizer = Sanitizer::new();
        let once = sanitizer.clean(
            r#"<h2>T</h2><br><a href="https://x.com" style="overflow-wrap: anywhere;">x</a> <em>e</em>"#,
        );
        assert_eq!(sanitizer.clean(&once), once);
    }
}
