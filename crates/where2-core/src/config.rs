//! Rendering configuration constants.
//!
//! Centralizes the inline styles and URL templates baked into rendered
//! fragments.

// =============================================================================
// Wrapping Styles
// =============================================================================

/// Style of the container wrapping every rendered fragment.
///
/// Long unbroken tokens (URLs, hashtags) must break instead of overflowing
/// the container.
pub const CONTAINER_STYLE: &str = "word-wrap: break-word; overflow-wrap: anywhere;";

/// Inline style applied to every generated anchor.
pub const LINK_STYLE: &str = "overflow-wrap: anywhere; word-break: break-all;";

/// CSS properties the sanitizer keeps inside `style` attributes.
pub const ALLOWED_STYLE_PROPERTIES: &[&str] = &["word-wrap", "overflow-wrap", "word-break"];

// =============================================================================
// Mentions
// =============================================================================

/// Profile URL prefix for `@handle` mentions.
pub const DEFAULT_MENTION_BASE_URL: &str = "https://www.instagram.com/";

// =============================================================================
// Sanitizer Policy
// =============================================================================

/// Tags allowed through the sanitizer.
pub const ALLOWED_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "strong", "em", "a", "br", "div"];

/// URL schemes allowed in `href` attributes.
pub const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// `rel` value forced onto every link.
pub const LINK_REL: &str = "noopener noreferrer nofollow";
