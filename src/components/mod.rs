//! UI components built with Leptos.
//!
//! - [`RichText`] - Sanitized rendering of author text
//! - [`Composer`] - Editor with live rich-text preview

mod composer;
mod rich_text;

pub use composer::Composer;
pub use rich_text::RichText;
