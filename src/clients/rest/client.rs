//! REST client for the Magento2 API.
//!
//! This module provides the [`RestClient`] type, the main entry point of the
//! crate. It composes the pieces from the lower layers: a token provider for
//! bearer authentication, the payload resolver for asynchronously supplied
//! body fields, and the low-level HTTP client for the wire exchange.

use serde_json::Value;

use crate::auth::{Credentials, TokenProvider};
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, Payload, RestRequest};
use crate::config::{
    AccessToken, AdminPassword, AdminUsername, ApiVersion, Magento2Config, DEFAULT_PORT,
};
use crate::error::ConfigError;

/// Optional client settings mirroring the original `{port, version}` options.
///
/// `port` is only appended to the base URI when the base URL carries no
/// explicit port and the value differs from the default 80; `version` selects
/// the token endpoint's version segment.
#[derive(Clone, Debug)]
pub struct ClientOptions {
    /// Port appended to the base URI when the base URL has none (default 80).
    pub port: u16,
    /// API version segment for the token endpoint (default `V1`).
    pub version: ApiVersion,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            version: ApiVersion::default(),
        }
    }
}

/// REST API client for a Magento2 installation.
///
/// Requests target `/rest{path}` on the configured base URI, carry a bearer
/// token obtained (and cached) by the [`TokenProvider`], and exchange JSON
/// bodies. Resource paths include their version segment, e.g. `/V1/products`.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`; concurrent requests on a shared client
/// coalesce on a single token fetch.
///
/// # Example
///
/// ```rust,ignore
/// use magento2_api::{ClientOptions, Payload, RestClient};
/// use serde_json::json;
///
/// let client = RestClient::with_admin(
///     "https://shop.example.com",
///     "admin",
///     "s3cret",
///     ClientOptions::default(),
/// )?;
///
/// // GET with query parameters
/// let products = client
///     .get("/V1/products", Some(vec![
///         ("searchCriteria[pageSize]".into(), "10".into()),
///     ]))
///     .await?;
///
/// // POST with a JSON body
/// let created = client
///     .post("/V1/products", json!({"product": {"sku": "new-sku"}}).into())
///     .await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The low-level HTTP client for the wire exchange.
    http_client: HttpClient,
    /// Lazily fetched, cached bearer token.
    token_provider: TokenProvider,
    /// Version segment for the token endpoint.
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client from a validated configuration.
    #[must_use]
    pub fn from_config(config: Magento2Config) -> Self {
        let http_client = HttpClient::new(config.base_uri());
        let api_version = config.api_version().clone();
        let token_provider = TokenProvider::new(config.credentials().clone());

        Self {
            http_client,
            token_provider,
            api_version,
        }
    }

    /// Creates a client that authenticates with an admin username/password
    /// pair, fetching a bearer token on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL does not parse or a credential
    /// is empty. No network activity occurs during construction.
    pub fn with_admin(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ConfigError> {
        let credentials = Credentials::admin(
            AdminUsername::new(username)?,
            AdminPassword::new(password)?,
        );
        Self::build(base_url, credentials, options)
    }

    /// Creates a client that authenticates with a pre-issued integration
    /// token; the token endpoint is never called.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL does not parse or the token is
    /// empty.
    pub fn with_token(
        base_url: impl Into<String>,
        token: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ConfigError> {
        let credentials = Credentials::Token(AccessToken::new(token)?);
        Self::build(base_url, credentials, options)
    }

    fn build(
        base_url: impl Into<String>,
        credentials: Credentials,
        options: ClientOptions,
    ) -> Result<Self, ConfigError> {
        let config = Magento2Config::builder()
            .base_url(base_url)
            .credentials(credentials)
            .port(options.port)
            .api_version(options.version)
            .build()?;
        Ok(Self::from_config(config))
    }

    /// Returns the base URI requests are issued against.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Returns the API version used for the token endpoint.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Sends a GET request to the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path, or
    /// [`RestError::Http`] for HTTP-level failures.
    pub async fn get(
        &self,
        path: &str,
        query: Option<Vec<(String, String)>>,
    ) -> Result<Value, RestError> {
        self.request(HttpMethod::Get, path, query, Payload::empty())
            .await
    }

    /// Sends a POST request with the given payload.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path, or
    /// [`RestError::Http`] for HTTP-level failures.
    pub async fn post(&self, path: &str, payload: Payload) -> Result<Value, RestError> {
        self.request(HttpMethod::Post, path, None, payload).await
    }

    /// Sends a PUT request with the given payload.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path, or
    /// [`RestError::Http`] for HTTP-level failures.
    pub async fn put(&self, path: &str, payload: Payload) -> Result<Value, RestError> {
        self.request(HttpMethod::Put, path, None, payload).await
    }

    /// Sends a DELETE request to the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path, or
    /// [`RestError::Http`] for HTTP-level failures.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<Vec<(String, String)>>,
    ) -> Result<Value, RestError> {
        self.request(HttpMethod::Delete, path, query, Payload::empty())
            .await
    }

    /// Sends a request to `/rest{path}` and returns the parsed JSON body.
    ///
    /// The flow is: resolve any pending payload fields, obtain the bearer
    /// token (fetching it on first use), then dispatch the request with the
    /// percent-encoded query string appended in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path;
    /// [`RestError::Http`] for a non-success response (carrying the decoded
    /// Magento error message and parameters, or the raw body), a network
    /// failure, or an undecodable success body. Token-fetch failures surface
    /// the same way. Nothing is retried.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<Vec<(String, String)>>,
        payload: Payload,
    ) -> Result<Value, RestError> {
        let path = normalize_path(path)?;

        // Materialize the body before anything touches the network, so a
        // request is never sent with an unresolved placeholder.
        let body = payload.resolve().await;

        let token = self
            .token_provider
            .bearer_token(&self.http_client, &self.api_version)
            .await?;

        let mut builder = RestRequest::builder(method, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = self.http_client.send(&builder.build(), Some(token)).await?;
        Ok(response.body)
    }
}

/// Prefixes a resource path with `/rest`, normalizing leading slashes.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(format!("/rest/{trimmed}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> RestClient {
        RestClient::with_token(
            "https://shop.example.com",
            "test-token",
            ClientOptions::default(),
        )
        .unwrap()
    }

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_prefixes_rest() {
        assert_eq!(normalize_path("/V1/products").unwrap(), "/rest/V1/products");
    }

    #[test]
    fn test_normalize_path_handles_missing_leading_slash() {
        assert_eq!(normalize_path("V1/products").unwrap(), "/rest/V1/products");
    }

    #[test]
    fn test_normalize_path_collapses_extra_slashes() {
        assert_eq!(normalize_path("//V1/products").unwrap(), "/rest/V1/products");
    }

    #[test]
    fn test_normalize_path_rejects_empty() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
    }

    #[test]
    fn test_normalize_path_rejects_only_slashes() {
        assert!(matches!(
            normalize_path("///"),
            Err(RestError::InvalidPath { .. })
        ));
    }

    // === Construction Tests ===

    #[test]
    fn test_with_token_builds_client() {
        let client = test_client();
        assert_eq!(client.base_uri(), "https://shop.example.com");
        assert_eq!(client.api_version().as_ref(), "V1");
    }

    #[test]
    fn test_with_admin_rejects_empty_username() {
        let result = RestClient::with_admin(
            "https://shop.example.com",
            "",
            "s3cret",
            ClientOptions::default(),
        );
        assert!(matches!(result, Err(ConfigError::EmptyUsername)));
    }

    #[test]
    fn test_with_admin_rejects_empty_password() {
        let result = RestClient::with_admin(
            "https://shop.example.com",
            "admin",
            "",
            ClientOptions::default(),
        );
        assert!(matches!(result, Err(ConfigError::EmptyPassword)));
    }

    #[test]
    fn test_with_token_rejects_empty_token() {
        let result =
            RestClient::with_token("https://shop.example.com", "", ClientOptions::default());
        assert!(matches!(result, Err(ConfigError::EmptyToken)));
    }

    #[test]
    fn test_with_admin_rejects_invalid_base_url() {
        let result =
            RestClient::with_admin("not a url", "admin", "s3cret", ClientOptions::default());
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_options_apply_port_and_version() {
        let options = ClientOptions {
            port: 8080,
            version: ApiVersion::new("V2").unwrap(),
        };
        let client =
            RestClient::with_token("http://shop.example.com", "token", options).unwrap();

        assert_eq!(client.base_uri(), "http://shop.example.com:8080");
        assert_eq!(client.api_version().as_ref(), "V2");
    }

    #[test]
    fn test_default_options() {
        let options = ClientOptions::default();
        assert_eq!(options.port, DEFAULT_PORT);
        assert_eq!(options.version.as_ref(), "V1");
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
