//! Admin token acquisition and caching.
//!
//! Magento authenticates REST calls with a bearer token obtained from the
//! admin token endpoint (`POST /rest/{version}/integration/admin/token`).
//! The [`TokenProvider`] fetches that token lazily on first use and caches
//! it for the lifetime of the client — there is no expiry tracking or
//! refresh; a token is treated as valid once fetched.
//!
//! Concurrent first callers coalesce: the cache is a [`tokio::sync::OnceCell`],
//! so at most one fetch is in flight and every caller awaits its outcome. A
//! failed fetch leaves the cache empty; the provider itself never retries.

use tokio::sync::OnceCell;

use crate::auth::Credentials;
use crate::clients::{HttpClient, HttpError, HttpMethod, RestRequest};
use crate::config::ApiVersion;

/// Lazily fetches and caches the bearer token for a client instance.
///
/// Constructed from [`Credentials`]: a pre-issued token populates the cache
/// immediately and the token endpoint is never called; an admin
/// username/password pair triggers a single fetch on first use.
pub struct TokenProvider {
    credentials: Credentials,
    cache: OnceCell<String>,
}

impl TokenProvider {
    /// Creates a provider for the given credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        let cache = match &credentials {
            Credentials::Token(token) => OnceCell::new_with(Some(token.as_ref().to_string())),
            Credentials::Admin { .. } => OnceCell::new(),
        };
        Self { credentials, cache }
    }

    /// Returns `true` when a token is already cached (no fetch needed).
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cache.initialized()
    }

    /// Returns the bearer token, fetching it from the admin token endpoint
    /// on first use.
    ///
    /// Concurrent callers racing on an empty cache share a single fetch.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the token request fails:
    /// - `Response` for a non-success status (message and parameters from the
    ///   Magento error body when decodable)
    /// - `Network` for socket or connection failures
    /// - `Decode` if a success body is not a JSON string
    ///
    /// The error is surfaced to the caller and the fetch is not retried.
    pub async fn bearer_token(
        &self,
        http: &HttpClient,
        version: &ApiVersion,
    ) -> Result<&str, HttpError> {
        self.cache
            .get_or_try_init(|| self.fetch_token(http, version))
            .await
            .map(String::as_str)
    }

    /// Requests a fresh token with the admin username/password pair.
    async fn fetch_token(&self, http: &HttpClient, version: &ApiVersion) -> Result<String, HttpError> {
        let (username, password) = match &self.credentials {
            Credentials::Admin { username, password } => (username, password),
            // Token credentials pre-populate the cache, so get_or_try_init
            // never reaches here for them.
            Credentials::Token(token) => return Ok(token.as_ref().to_string()),
        };

        tracing::debug!(username = username.as_ref(), "requesting admin token");

        let path = format!("/rest/{version}/integration/admin/token");
        let request = RestRequest::builder(HttpMethod::Post, path)
            .body(serde_json::json!({
                "username": username.as_ref(),
                "password": password.as_ref(),
            }))
            .build();

        let response = http.send(&request, None).await?;

        // A successful token response body is a bare JSON string.
        Ok(serde_json::from_value(response.body)?)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("credentials", &self.credentials)
            .field("cached", &self.is_cached())
            .finish()
    }
}
