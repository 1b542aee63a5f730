//! Content composer with live preview.
//!
//! Authors write descriptions in the textarea; the preview shows exactly
//! what detail pages will render.

use leptos::prelude::*;

use crate::components::RichText;
use crate::config::{SAMPLE_TEXT, composer};

/// Textarea editor paired with a [`RichText`] preview.
#[component]
pub fn Composer() -> impl IntoView {
    let (draft, set_draft) = signal(SAMPLE_TEXT.to_string());

    // Focus the editor on mount
    let input_ref = NodeRef::<leptos::html::Textarea>::new();
    Effect::new(move || {
        if let Some(el) = input_ref.get() {
            let _ = el.focus();
        }
    });

    view! {
        <section style="
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 1.5rem;
        ">
            <label style="display: flex; flex-direction: column; gap: 0.5rem;">
                <span style="font-weight: 600;">"Source"</span>
                <textarea
                    node_ref=input_ref
                    id=composer::INPUT_ID
                    rows=composer::INPUT_ROWS.to_string()
                    placeholder=composer::PLACEHOLDER
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    style="
                        font-family: monospace;
                        padding: 0.75rem;
                        resize: vertical;
                    "
                />
            </label>
            <div style="display: flex; flex-direction: column; gap: 0.5rem;">
                <span style="font-weight: 600;">"Preview"</span>
                <RichText text=draft />
            </div>
        </section>
    }
}
