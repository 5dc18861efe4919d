//! Low-level HTTP client for Magento API communication.
//!
//! This module provides the [`HttpClient`] type for sending individual
//! requests to a Magento installation. It handles URL construction, header
//! injection, JSON serialization, and response parsing; authentication and
//! the `/rest` path convention live in the higher-level
//! [`RestClient`](crate::RestClient).

use std::collections::HashMap;

use crate::clients::errors::{ApiResponseError, HttpError};
use crate::clients::http_request::{HttpMethod, RestRequest};
use crate::clients::http_response::HttpResponse;

/// Library version from Cargo.toml.
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to a Magento installation.
///
/// The client handles:
/// - URL construction from the configured base URI and request path
/// - Default headers including `User-Agent` and `Accept`
/// - `Authorization: Bearer` and `Content-Type` injection per request
/// - JSON body serialization and response parsing
///
/// There is no retry, timeout, or cancellation handling: each request is a
/// single exchange inheriting the platform connection defaults.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g. `https://shop.example.com:8443`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given base URI.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g. TLS
    /// initialization failure).
    #[must_use]
    pub fn new(base_uri: impl Into<String>) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Magento2 API Library v{LIB_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: base_uri.into(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request, optionally authenticated with a bearer token.
    ///
    /// The full URL is `{base_uri}{path}?{query}` with the query string
    /// percent-encoded in insertion order. A JSON body sets
    /// `Content-Type: application/json`; a bearer token sets
    /// `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A network or connection error occurs (`Network`)
    /// - A non-success status is received (`Response`), with the message and
    ///   parameters decoded from the Magento error body when possible, or the
    ///   raw body text otherwise
    /// - A success body cannot be parsed as JSON (`Decode`)
    pub async fn send(
        &self,
        request: &RestRequest,
        bearer: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        let url = format!("{}{}", self.base_uri, request.url_suffix());

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(token) = bearer {
            req_builder = req_builder.header("Authorization", format!("Bearer {token}"));
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(method = %request.method, url = %url, "dispatching request");

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let body_text = res.text().await.unwrap_or_default();

        if !(200..=299).contains(&code) {
            return Err(ApiResponseError::from_body(code, &body_text).into());
        }

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)?
        };

        Ok(HttpResponse::new(code, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = HttpClient::new("https://shop.example.com");
        assert_eq!(client.base_uri(), "https://shop.example.com");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new("https://shop.example.com");

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Magento2 API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new("https://shop.example.com");

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
