use crate::core::domain::error::ValidationError;
use std::fmt;

const ALLOWED_SCHEMES: [&str; 2] = ["https", "http"];
// RFC 7230 practical limit
const MAX_URL_LENGTH: usize = 2083;

/// A validated base URL of a VT endpoint.
///
/// The URL may already carry the access key as its last path element.
/// Operation paths are appended verbatim, so the stored form never ends
/// with a slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VtUrl(String);

impl VtUrl {
    /// Validates `url` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the URL is empty, too long, not http(s),
    /// has no host, or carries a query or fragment.
    pub fn new(url: impl AsRef<str>) -> Result<Self, ValidationError> {
        let url = url.as_ref();
        validate_url(url)?;
        Ok(Self::new_unchecked(url))
    }

    /// Creates a new URL without validation.
    pub(crate) fn new_unchecked(url: &str) -> Self {
        Self(url.trim_end_matches('/').to_string())
    }

    /// Returns a new URL with `key` appended as the last path element.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the key is empty or contains characters
    /// that would change the URL structure.
    pub fn with_access_key(&self, key: &str) -> Result<Self, ValidationError> {
        validate_access_key(key)?;
        Ok(Self(format!("{}/{}", self.0, key)))
    }

    /// Appends an operation path such as `/list` to the base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VtUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates a base URL.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme. Must be one of: {}",
            ALLOWED_SCHEMES.join(", ")
        )));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::Format("URL has no host".to_string()));
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ValidationError::ConstraintViolation(
            "URL cannot contain a query or fragment".to_string(),
        ));
    }

    Ok(())
}

/// Validates an access key used as a path element.
pub(crate) fn validate_access_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::Field {
            field: "access_key".to_string(),
            message: "Access key cannot be empty".to_string(),
        });
    }
    let forbidden = |c: char| c == '/' || c == '?' || c == '#' || c.is_whitespace();
    if key.chars().any(forbidden) {
        return Err(ValidationError::Format(
            "Access key cannot contain '/', '?', '#' or whitespace".to_string(),
        ));
    }
    Ok(())
}
