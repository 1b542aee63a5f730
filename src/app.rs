//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use where2_core::RenderOptions;

use crate::components::Composer;
use crate::config::{APP_NAME, render_options};
use crate::utils::dom::reload_page;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and read by any component
/// rendering author text via `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Options every [`RichText`](crate::components::RichText) renders with.
    pub render_options: StoredValue<RenderOptions>,
}

impl AppContext {
    /// Creates a context with the bundled render options.
    pub fn new() -> Self {
        Self {
            render_options: StoredValue::new(render_options()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the content composer
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #c0392b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #555; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="text-align: left; color: #c0392b; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button on:click=move |_| reload_page()>
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <main style="max-width: 1100px; margin: 0 auto; padding: 2rem; font-family: sans-serif;">
                <h1>{APP_NAME}</h1>
                <Composer />
            </main>
        </ErrorBoundary>
    }
}
