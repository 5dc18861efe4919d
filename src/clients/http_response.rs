//! HTTP response types for the Magento2 API client.

/// A parsed response from a Magento installation.
///
/// Successful responses carry their body as parsed JSON; an empty body is
/// represented as an empty JSON object.
///
/// # Example
///
/// ```rust
/// use magento2_api::clients::HttpResponse;
/// use serde_json::json;
///
/// let response = HttpResponse::new(200, json!({"foo": "bar"}));
/// assert!(response.is_ok());
/// assert_eq!(response.body["foo"], "bar");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The response body parsed as JSON.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response from a status code and parsed body.
    #[must_use]
    pub const fn new(code: u16, body: serde_json::Value) -> Self {
        Self { code, body }
    }

    /// Returns `true` when the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }
}
