//! Rich-text rendering for Where2 content.
//!
//! Author text (listing descriptions, articles, discussion posts) is written
//! in a small Markdown-like dialect. This crate turns it into HTML that is
//! safe to inject into the document:
//!
//! - [`convert_to_html`] / [`Renderer`] - text to sanitized, wrapped HTML
//! - [`Sanitizer`] - allow-list HTML sanitizer
//! - [`RenderOptions`] - mention profile URL and bare-URL handling
//!
//! Rendering is pure: no I/O, no shared mutable state, and no failure mode.

pub mod config;
pub mod error;
mod markup;
mod options;
mod patterns;
mod render;
mod sanitize;
pub mod url;

pub use error::ConfigError;
pub use options::RenderOptions;
pub use render::{Renderer, convert_to_html, wrap};
pub use sanitize::Sanitizer;
