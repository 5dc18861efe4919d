//! Configuration types for the Magento2 API client.
//!
//! This module provides the core configuration types used to initialize a
//! client for API communication with a Magento installation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Magento2Config`]: The configuration struct holding all client settings
//! - [`Magento2ConfigBuilder`]: A builder for constructing [`Magento2Config`]
//! - [`Location`]: The parsed base URL of the Magento site
//! - [`AdminUsername`] / [`AdminPassword`]: Validated admin credentials
//! - [`AccessToken`]: A validated pre-issued integration token
//! - [`ApiVersion`]: The REST API version segment (default `V1`)
//!
//! # Example
//!
//! ```rust
//! use magento2_api::{AdminPassword, AdminUsername, Credentials, Magento2Config};
//!
//! let config = Magento2Config::builder()
//!     .base_url("https://shop.example.com")
//!     .credentials(Credentials::admin(
//!         AdminUsername::new("admin").unwrap(),
//!         AdminPassword::new("s3cret").unwrap(),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri(), "https://shop.example.com");
//! ```

mod location;
mod newtypes;
mod version;

pub use location::{Location, Scheme};
pub use newtypes::{AccessToken, AdminPassword, AdminUsername};
pub use version::{ApiVersion, DEFAULT_VERSION};

use crate::auth::Credentials;
use crate::error::ConfigError;

/// The default port assumed when neither the base URL nor the options carry
/// an explicit one.
pub const DEFAULT_PORT: u16 = 80;

/// Configuration for a Magento2 API client.
///
/// Holds the parsed base URL, the credentials used to obtain a bearer token,
/// and the port/version options. Construction validates every field, so an
/// existing `Magento2Config` is always usable — no network activity happens
/// until the first request is issued.
///
/// # Thread Safety
///
/// `Magento2Config` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct Magento2Config {
    location: Location,
    credentials: Credentials,
    port: u16,
    api_version: ApiVersion,
}

// Verify Magento2Config is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Magento2Config>();
};

impl Magento2Config {
    /// Creates a new builder for constructing a `Magento2Config`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use magento2_api::{AccessToken, Credentials, Magento2Config};
    ///
    /// let config = Magento2Config::builder()
    ///     .base_url("https://shop.example.com")
    ///     .credentials(Credentials::Token(AccessToken::new("token").unwrap()))
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> Magento2ConfigBuilder {
        Magento2ConfigBuilder::new()
    }

    /// Returns the parsed base URL of the Magento site.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the credentials used to obtain a bearer token.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the configured port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the API version used for the token endpoint.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the base URI requests are issued against
    /// (e.g. `https://shop.example.com:8443`).
    ///
    /// An explicit port in the base URL takes precedence; otherwise a
    /// non-default `port` option is appended; otherwise the URI carries no
    /// port and the scheme default applies.
    #[must_use]
    pub fn base_uri(&self) -> String {
        let scheme = self.location.scheme();
        if self.location.port().is_some() {
            format!("{scheme}://{}", self.location.host())
        } else if self.port == DEFAULT_PORT {
            format!("{scheme}://{}", self.location.hostname())
        } else {
            format!("{scheme}://{}:{}", self.location.hostname(), self.port)
        }
    }
}

/// Builder for constructing [`Magento2Config`] instances.
///
/// Required fields are `base_url` and `credentials`. All other fields have
/// defaults matching a stock Magento install.
///
/// # Defaults
///
/// - `port`: 80 (only appended to the base URI when changed)
/// - `api_version`: `V1`
///
/// # Example
///
/// ```rust
/// use magento2_api::{ApiVersion, AccessToken, Credentials, Magento2Config};
///
/// let config = Magento2Config::builder()
///     .base_url("http://shop.example.com")
///     .credentials(Credentials::Token(AccessToken::new("token").unwrap()))
///     .port(8080)
///     .api_version(ApiVersion::v1())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_uri(), "http://shop.example.com:8080");
/// ```
#[derive(Debug, Default)]
pub struct Magento2ConfigBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    port: Option<u16>,
    api_version: Option<ApiVersion>,
}

impl Magento2ConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL of the Magento site (required).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the credentials used to obtain a bearer token (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the port appended to the base URI when the base URL has none.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the API version used for the token endpoint.
    #[must_use]
    pub fn api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = Some(api_version);
        self
    }

    /// Builds the [`Magento2Config`], validating all fields.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingBaseUrl`] if no base URL was provided
    /// - [`ConfigError::MissingCredentials`] if no credentials were provided
    /// - [`ConfigError::InvalidBaseUrl`] if the base URL does not parse
    pub fn build(self) -> Result<Magento2Config, ConfigError> {
        let base_url = self
            .base_url
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;
        let credentials = self.credentials.ok_or(ConfigError::MissingCredentials)?;

        let location = Location::parse(&base_url)?;

        Ok(Magento2Config {
            location,
            credentials,
            port: self.port.unwrap_or(DEFAULT_PORT),
            api_version: self.api_version.unwrap_or_default(),
        })
    }
}
