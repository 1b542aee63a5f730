//! URL validation for configured profile links.

use thiserror::Error;

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// URL is usable as a link prefix
    Valid(String),
    /// URL is invalid or unsafe
    Invalid(UrlValidationError),
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlValidationError {
    /// URL is empty
    #[error("URL is empty")]
    Empty,
    /// URL doesn't start with http:// or https://
    #[error("URL must start with http:// or https://")]
    InvalidProtocol,
    /// URL has no host/domain
    #[error("URL has no host")]
    NoHost,
}

/// Validate a URL used as the prefix of generated profile links.
///
/// Checks:
/// 1. URL is not empty
/// 2. URL starts with http:// or https://
/// 3. URL has a valid host
pub fn validate_profile_url(url: &str) -> UrlValidation {
    let url = url.trim();

    if url.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    let url_lower = url.to_lowercase();
    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        return UrlValidation::Invalid(UrlValidationError::InvalidProtocol);
    }

    if extract_host(url).is_none() {
        return UrlValidation::Invalid(UrlValidationError::NoHost);
    }

    UrlValidation::Valid(url.to_string())
}

/// Extract host from a URL
fn extract_host(url: &str) -> Option<String> {
    let scheme_end = url.find("://")?;
    let without_protocol = &url[scheme_end + 3..];

    // Host part ends at the first '/', '?' or '#'
    let host_part = without_protocol
        .split(['/', '?', '#'])
        .next()?;

    // Drop userinfo and port
    let host_part = host_part.rsplit('@').next()?;
    let host = host_part.split(':').next()?;

    if host.is_empty() {
        return None;
    }

    Some(host.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(matches!(
            validate_profile_url("https://www.instagram.com/"),
            UrlValidation::Valid(_)
        ));
        assert!(matches!(
            validate_profile_url("  http://where2.example/users/  "),
            UrlValidation::Valid(ref url) if url == "http://where2.example/users/"
        ));
        assert!(matches!(
            validate_profile_url("HTTPS://Example.com/"),
            UrlValidation::Valid(_)
        ));
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(
            validate_profile_url(""),
            UrlValidation::Invalid(UrlValidationError::Empty)
        );
        assert_eq!(
            validate_profile_url("   "),
            UrlValidation::Invalid(UrlValidationError::Empty)
        );
        assert_eq!(
            validate_profile_url("javascript:alert(1)//"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_profile_url("ftp://example.com/"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_profile_url("https:///path"),
            UrlValidation::Invalid(UrlValidationError::NoHost)
        );
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("https://www.instagram.com/alice"),
            Some("www.instagram.com".to_string())
        );
        assert_eq!(
            extract_host("https://user@Example.com:8443/x"),
            Some("example.com".to_string())
        );
        assert_eq!(extract_host("https://"), None);
    }
}
