//! Rendering entry points.
//!
//! A [`Renderer`] runs the markup pipeline, sanitizes the result and wraps
//! it in the line-wrapping container. The intermediate, unsanitized markup
//! never leaves this module.

use crate::config::CONTAINER_STYLE;
use crate::markup::to_markup;
use crate::options::RenderOptions;
use crate::sanitize::Sanitizer;

/// Converts author text into sanitized HTML.
///
/// Build one and reuse it; [`convert_to_html`] builds a default one per
/// call.
#[derive(Default)]
pub struct Renderer {
    options: RenderOptions,
    sanitizer: Sanitizer,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            sanitizer: Sanitizer::new(),
        }
    }

    /// Sanitized HTML for `text`, without the wrapping container.
    ///
    /// Absent or empty text yields an empty string.
    pub fn sanitized_body(&self, text: Option<&str>) -> String {
        match text {
            None | Some("") => String::new(),
            Some(text) => self.sanitizer.clean(&to_markup(text, &self.options)),
        }
    }

    /// Sanitized HTML for `text` inside the wrapping container.
    ///
    /// Absent or empty text yields an empty string, not an empty container.
    pub fn render(&self, text: Option<&str>) -> String {
        match text {
            None | Some("") => String::new(),
            _ => wrap(&self.sanitized_body(text)),
        }
    }
}

/// Wrap sanitized HTML in the container that lets long tokens break.
pub fn wrap(sanitized: &str) -> String {
    format!(r#"<div style="{CONTAINER_STYLE}">{sanitized}</div>"#)
}

/// Convert author text to a sanitized, wrapped HTML fragment using the
/// default [`RenderOptions`].
///
/// ```
/// use where2_core::convert_to_html;
///
/// assert_eq!(convert_to_html(None), "");
/// assert!(convert_to_html(Some("# Title")).contains("<h1>Title</h1>"));
/// ```
pub fn convert_to_html(text: Option<&str>) -> String {
    Renderer::default().render(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let renderer = Renderer::default();
        assert_eq!(renderer.render(None), "");
        assert_eq!(renderer.render(Some("")), "");
        assert_eq!(renderer.sanitized_body(None), "");
        assert_eq!(renderer.sanitized_body(Some("")), "");
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let out = Renderer::default().render(Some(" "));
        assert!(out.starts_with("<div style="));
        assert!(out.ends_with(" </div>"));
    }

    #[test]
    fn test_wrapped_in_container() {
        let out = Renderer::default().render(Some("hello"));
        assert_eq!(out, format!(r#"<div style="{CONTAINER_STYLE}">hello</div>"#));
        assert!(out.contains("overflow-wrap: anywhere"));
    }

    #[test]
    fn test_body_is_sanitized() {
        let body = Renderer::default().sanitized_body(Some("[x](javascript:alert(1))"));
        assert!(!body.contains("javascript"));
    }

    #[test]
    fn test_custom_options() {
        let renderer =
            Renderer::new(RenderOptions::default().with_mention_base_url("https://where2.example/"));
        let body = renderer.sanitized_body(Some("@carol"));
        assert!(body.contains(r#"href="https://where2.example/carol""#));
    }

    #[test]
    fn test_convert_to_html_matches_default_renderer() {
        let text = "# Hi\n**there** @dan";
        assert_eq!(convert_to_html(Some(text)), Renderer::default().render(Some(text)));
    }
}
