//! Rich-text display for author-supplied content.

use leptos::prelude::*;
use where2_core::Renderer;
use where2_core::config::CONTAINER_STYLE;

use crate::app::AppContext;

/// Renders author text as sanitized HTML.
///
/// Absent or empty text renders nothing. Only the sanitized fragment is
/// ever assigned to `inner_html`.
///
/// # Props
/// - `text`: The raw text to render (may be absent)
#[component]
pub fn RichText(#[prop(optional, into)] text: MaybeProp<String>) -> impl IntoView {
    let options = use_context::<AppContext>()
        .map(|ctx| ctx.render_options.get_value())
        .unwrap_or_default();
    // Built once per component instance
    let renderer = StoredValue::new_local(Renderer::new(options));

    let body = Memo::new(move |_| {
        let text = text.get();
        renderer.with_value(|renderer| visible_body(renderer, text.as_deref()))
    });

    view! {
        <Show when=move || body.with(Option::is_some)>
            <div
                class="rich-text"
                style=CONTAINER_STYLE
                inner_html=move || body.get().unwrap_or_default()
            />
        </Show>
    }
}

/// Sanitized body to display, or `None` when there is nothing to render.
fn visible_body(renderer: &Renderer, text: Option<&str>) -> Option<String> {
    let body = renderer.sanitized_body(text);
    (!body.is_empty()).then_some(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_empty_text_renders_nothing() {
        let renderer = Renderer::default();
        assert_eq!(visible_body(&renderer, None), None);
        assert_eq!(visible_body(&renderer, Some("")), None);
    }

    #[test]
    fn test_text_renders_sanitized_body() {
        let renderer = Renderer::default();
        assert_eq!(
            visible_body(&renderer, Some("**hi**<script>x()</script>")),
            Some("<strong>hi</strong>".to_string())
        );
    }

    #[test]
    fn test_whitespace_is_rendered() {
        assert_eq!(
            visible_body(&Renderer::default(), Some(" ")),
            Some(" ".to_string())
        );
    }
}
