//! DOM and Web API utility functions.

/// Log a warning to the browser console.
///
/// No-op outside the browser so native tests stay quiet.
pub fn console_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Reload the current page.
pub fn reload_page() {
    if let Some(window) = web_sys::window()
        && window.location().reload().is_err()
    {
        console_warn("Failed to reload page");
    }
}
