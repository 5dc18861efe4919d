//! HTTP-specific error types for the Magento2 API client.
//!
//! This module contains error types for HTTP operations:
//!
//! - [`ApiResponseError`]: Non-success HTTP responses from the API
//! - [`HttpError`]: Unified error type encompassing all HTTP-level failures
//!
//! # Error Handling
//!
//! Every failure is surfaced to the caller as an `Err` — including error
//! responses whose bodies do not decode as the documented
//! `{message, parameters?}` shape, which carry the raw body text instead.
//! Nothing is logged-and-swallowed, and the client never retries on its own.
//!
//! # Example
//!
//! ```rust,ignore
//! use magento2_api::{HttpError, RestError};
//!
//! match client.get("/V1/products", None).await {
//!     Ok(body) => println!("Products: {body}"),
//!     Err(RestError::Http(HttpError::Response(e))) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(RestError::Http(HttpError::Network(e))) => {
//!         println!("Network error: {e}");
//!     }
//!     Err(other) => println!("{other}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Error payload returned by Magento for non-success responses.
///
/// Magento error bodies have the shape `{"message": "...", "parameters": ...}`
/// where `parameters` is an optional array or map of placeholder values for
/// the message template.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// The human-readable error message.
    pub message: String,
    /// Placeholder values referenced by the message template, if any.
    #[serde(default)]
    pub parameters: Option<serde_json::Value>,
}

/// Error returned when a request receives a non-success response.
///
/// When the response body decodes as the Magento `{message, parameters?}`
/// shape, `message` and `parameters` are taken from it; otherwise `message`
/// holds the raw body text and `parameters` is `None`.
///
/// # Example
///
/// ```rust
/// use magento2_api::ApiResponseError;
/// use serde_json::json;
///
/// let error = ApiResponseError {
///     code: 404,
///     message: "Not found".to_string(),
///     parameters: Some(json!([])),
/// };
///
/// assert!(error.to_string().contains("Not found"));
/// ```
#[derive(Debug, Error, Clone)]
#[error("{message}")]
pub struct ApiResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The error message (decoded, or raw body text).
    pub message: String,
    /// Placeholder values from the decoded error body, if any.
    pub parameters: Option<serde_json::Value>,
}

impl ApiResponseError {
    /// Builds an error from a status code and raw response body text,
    /// decoding the Magento error shape when possible.
    #[must_use]
    pub fn from_body(code: u16, body: &str) -> Self {
        serde_json::from_str::<ErrorBody>(body).map_or_else(
            |_| Self {
                code,
                message: body.to_string(),
                parameters: None,
            },
            |decoded| Self {
                code,
                message: decoded.message,
                parameters: decoded.parameters,
            },
        )
    }
}

/// Unified error type for all HTTP-level failures.
///
/// Use pattern matching to handle specific failure modes.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-success HTTP response from the API.
    #[error(transparent)]
    Response(#[from] ApiResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response whose body could not be decoded as JSON.
    #[error("Failed to decode response body as JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
