//! HTTP request types for the Magento2 API client.
//!
//! This module provides the [`RestRequest`] type and its builder for
//! constructing requests sent to a Magento installation.

use std::fmt;

/// HTTP methods supported by the Magento REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// An HTTP request to be sent to a Magento installation.
///
/// The `path` is absolute (it already includes the `/rest` prefix added by
/// the REST client, or the full token endpoint path). Query parameters are
/// kept as ordered pairs: the query string preserves insertion order, with
/// keys and values percent-encoded.
///
/// Use [`RestRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use magento2_api::clients::{HttpMethod, RestRequest};
///
/// let request = RestRequest::builder(HttpMethod::Get, "/rest/V1/products")
///     .query_param("searchCriteria[pageSize]", "10")
///     .build();
///
/// assert_eq!(
///     request.url_suffix(),
///     "/rest/V1/products?searchCriteria%5BpageSize%5D=10"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct RestRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute path for this request (e.g. `/rest/V1/products`).
    pub path: String,
    /// Ordered query parameters to append to the path.
    pub query: Vec<(String, String)>,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

impl RestRequest {
    /// Creates a new builder for constructing a `RestRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> RestRequestBuilder {
        RestRequestBuilder::new(method, path)
    }

    /// Returns the percent-encoded query string (without the leading `?`),
    /// preserving the insertion order of the parameters.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns the path plus query string, ready to append to a base URI.
    #[must_use]
    pub fn url_suffix(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }
}

/// Builder for constructing [`RestRequest`] instances.
#[derive(Debug)]
pub struct RestRequestBuilder {
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl RestRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Appends a single query parameter, preserving insertion order.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends all query parameters from an ordered list.
    #[must_use]
    pub fn query(mut self, query: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(query);
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`RestRequest`].
    #[must_use]
    pub fn build(self) -> RestRequest {
        RestRequest {
            method: self.method,
            path: self.path,
            query: self.query,
            body: self.body,
        }
    }
}
