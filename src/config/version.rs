//! Magento REST API version handling.

use std::fmt;

use crate::error::ConfigError;

/// The REST API version segment used for the admin token endpoint.
///
/// Magento exposes its REST routes under a version segment, `V1` for every
/// currently shipping release. The version is configurable for forward
/// compatibility but defaults to [`ApiVersion::V1`].
///
/// Note that resource paths passed to the client (e.g. `/V1/products`)
/// carry their own version segment; the configured version applies to the
/// token endpoint only.
///
/// # Example
///
/// ```rust
/// use magento2_api::ApiVersion;
///
/// let version = ApiVersion::default();
/// assert_eq!(version.as_ref(), "V1");
/// assert_eq!(version.to_string(), "V1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiVersion(String);

/// The default API version for current Magento releases.
pub const DEFAULT_VERSION: &str = "V1";

impl ApiVersion {
    /// Creates an API version from a custom segment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the segment is empty or
    /// contains path or query delimiters.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if version.is_empty() || version.contains(&['/', '?', '#'][..]) {
            return Err(ConfigError::InvalidApiVersion { version });
        }
        Ok(Self(version))
    }

    /// Returns the `V1` version used by all current Magento releases.
    #[must_use]
    pub fn v1() -> Self {
        Self(DEFAULT_VERSION.to_string())
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::v1()
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
