//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

use where2_core::RenderOptions;

use crate::utils::dom::console_warn;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Render options bundled with the client.
pub const RENDER_OPTIONS_JSON: &str = include_str!("../assets/render.json");

/// Initial composer content, showing every supported markup form.
pub const SAMPLE_TEXT: &str = include_str!("../assets/text/sample.md");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "Where2";

// =============================================================================
// Composer Configuration
// =============================================================================

/// Composer layout constants.
pub mod composer {
    /// DOM id of the composer textarea.
    pub const INPUT_ID: &str = "composer-input";
    /// Visible textarea rows.
    pub const INPUT_ROWS: u32 = 12;
    /// Textarea placeholder.
    pub const PLACEHOLDER: &str = "Write a description. Supports # headings, **bold**, *italics*, [links](https://...) and @mentions.";
}

// =============================================================================
// Rendering
// =============================================================================

/// Load the bundled render options.
///
/// Falls back to [`RenderOptions::default`] and logs a console warning when
/// the bundled document is invalid.
pub fn render_options() -> RenderOptions {
    match RenderOptions::from_json(RENDER_OPTIONS_JSON) {
        Ok(options) => options,
        Err(err) => {
            console_warn(&format!("Using default render options: {}", err));
            RenderOptions::default()
        }
    }
}
