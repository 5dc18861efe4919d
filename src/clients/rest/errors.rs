//! REST-specific error types.

use thiserror::Error;

use crate::clients::errors::HttpError;
use crate::error::ConfigError;

/// Errors raised by the high-level REST client.
///
/// # Example
///
/// ```rust
/// use magento2_api::RestError;
///
/// let error = RestError::InvalidPath { path: String::new() };
/// assert!(error.to_string().contains("Invalid REST API path"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The resource path is empty or otherwise unusable.
    #[error("Invalid REST API path '{path}'. Expected a resource path beneath /rest, e.g. '/V1/products'.")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// Client construction failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level failure (API error response, network error, or
    /// undecodable success body).
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::ApiResponseError;

    #[test]
    fn test_invalid_path_message() {
        let error = RestError::InvalidPath {
            path: "??".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("Invalid REST API path"));
        assert!(message.contains("??"));
    }

    #[test]
    fn test_rest_error_wraps_http_errors() {
        let http_error = HttpError::Response(ApiResponseError {
            code: 404,
            message: "Not found".to_string(),
            parameters: None,
        });

        let rest_error = RestError::from(http_error);
        assert!(rest_error.to_string().contains("Not found"));
    }

    #[test]
    fn test_rest_error_wraps_config_errors() {
        let rest_error = RestError::from(ConfigError::MissingBaseUrl);
        assert!(rest_error.to_string().contains("base_url"));
    }
}
