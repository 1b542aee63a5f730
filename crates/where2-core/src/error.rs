//! Error types for render configuration.
//!
//! Rendering itself never fails; only loading [`RenderOptions`] can.
//!
//! [`RenderOptions`]: crate::RenderOptions

use thiserror::Error;

use crate::url::UrlValidationError;

/// Errors raised while loading or validating render options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Options document is not valid JSON or has unknown fields.
    #[error("invalid render options: {0}")]
    Json(#[from] serde_json::Error),
    /// Mention profile URL failed validation.
    #[error("invalid mention base URL: {0}")]
    InvalidMentionBaseUrl(#[source] UrlValidationError),
}
