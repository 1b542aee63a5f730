//! Render options.

use serde::Deserialize;

use crate::config::DEFAULT_MENTION_BASE_URL;
use crate::error::ConfigError;
use crate::url::{UrlValidation, validate_profile_url};

/// Tunables for the markup pipeline.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use where2_core::RenderOptions;
///
/// let options = RenderOptions::from_json(r#"{ "trim_url_punctuation": false }"#).unwrap();
/// assert_eq!(options.mention_base_url, "https://www.instagram.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Prefix of profile links generated for `@handle` mentions.
    /// Always ends with `/` once validated.
    pub mention_base_url: String,
    /// Leave sentence punctuation trailing a bare URL outside the link.
    pub trim_url_punctuation: bool,
}

impl RenderOptions {
    /// Parse options from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        let url = options.mention_base_url.clone();
        Ok(options.with_mention_base_url(url))
    }

    /// Check that the mention profile URL is a usable link prefix.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match validate_profile_url(&self.mention_base_url) {
            UrlValidation::Valid(_) => Ok(()),
            UrlValidation::Invalid(err) => Err(ConfigError::InvalidMentionBaseUrl(err)),
        }
    }

    /// Replace the mention profile URL, trimming it and appending a
    /// trailing `/` when missing.
    pub fn with_mention_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into().trim().to_string();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.mention_base_url = url;
        self
    }

    /// Profile URL for a mentioned handle.
    pub fn mention_url(&self, handle: &str) -> String {
        format!("{}{}", self.mention_base_url, handle)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mention_base_url: DEFAULT_MENTION_BASE_URL.to_string(),
            trim_url_punctuation: true,
        }
    }
}
