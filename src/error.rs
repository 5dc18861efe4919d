//! Error types for client configuration.
//!
//! This module contains the error type returned when a [`Magento2Config`]
//! cannot be constructed from the values provided.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation: a client can never be built from an incomplete or
//! malformed configuration, and no network activity happens before
//! construction succeeds.
//!
//! # Example
//!
//! ```rust
//! use magento2_api::{AdminUsername, ConfigError};
//!
//! let result = AdminUsername::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUsername)));
//! ```
//!
//! [`Magento2Config`]: crate::Magento2Config

use thiserror::Error;

/// Errors that can occur while building a client configuration.
///
/// Each variant corresponds to a missing or invalid constructor argument and
/// carries an actionable message. These errors are fatal: they are raised
/// synchronously at construction, before any request is issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL of the Magento site was not provided.
    #[error("`base_url` of the Magento site is required to initialize the client.")]
    MissingBaseUrl,

    /// No credentials (admin username/password or access token) were provided.
    #[error("Credentials are required to initialize the client. Provide an admin username/password pair or a pre-issued access token.")]
    MissingCredentials,

    /// The base URL could not be parsed into scheme, host, and path.
    #[error("Invalid base URL '{url}'. Expected an absolute URL such as 'https://shop.example.com' or 'http://shop.example.com:8080/store'.")]
    InvalidBaseUrl {
        /// The URL string that failed to parse.
        url: String,
    },

    /// Admin username cannot be empty.
    #[error("`admin_username` of the Magento site is required to initialize the client.")]
    EmptyUsername,

    /// Admin password cannot be empty.
    #[error("`admin_password` of the Magento site is required to initialize the client.")]
    EmptyPassword,

    /// A pre-issued access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Magento integration token.")]
    EmptyToken,

    /// The API version segment is invalid.
    #[error("Invalid API version '{version}'. Expected a non-empty path segment such as 'V1'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },
}
