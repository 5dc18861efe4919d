//! # Magento2 API Rust Client
//!
//! A Rust client for the Magento2 REST API, providing type-safe
//! configuration, bearer-token authentication, and an async HTTP client for
//! Magento integrations.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`Magento2Config`] and [`Magento2ConfigBuilder`]
//! - Validated newtypes for credentials, with secrets masked in debug output
//! - Base-URL parsing via [`Location`], with a warning for non-TLS installs
//! - Lazy admin-token acquisition with per-client caching via [`auth::TokenProvider`]
//! - Request payloads with asynchronously supplied fields via [`Payload`]
//! - An async REST client via [`RestClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use magento2_api::{ClientOptions, RestClient};
//!
//! // Admin credentials: a bearer token is fetched on the first request
//! // and cached for the lifetime of the client.
//! let client = RestClient::with_admin(
//!     "https://shop.example.com",
//!     "admin",
//!     "s3cret",
//!     ClientOptions::default(),
//! )
//! .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use magento2_api::{ClientOptions, Payload, RestClient};
//! use serde_json::json;
//!
//! let client = RestClient::with_admin(
//!     "https://shop.example.com",
//!     "admin",
//!     "s3cret",
//!     ClientOptions::default(),
//! )?;
//!
//! // GET /rest/V1/products?searchCriteria%5BpageSize%5D=10
//! let products = client
//!     .get(
//!         "/V1/products",
//!         Some(vec![("searchCriteria[pageSize]".into(), "10".into())]),
//!     )
//!     .await?;
//!
//! // POST /rest/V1/products with a JSON body
//! let created = client
//!     .post("/V1/products", json!({"product": {"sku": "new-sku"}}).into())
//!     .await?;
//! ```
//!
//! ## Pending Payload Fields
//!
//! A request body may reference values still being produced by earlier
//! requests. Tag those fields as pending and the client awaits them before
//! anything is sent:
//!
//! ```rust,ignore
//! use magento2_api::Payload;
//! use serde_json::json;
//!
//! let payload = Payload::object()
//!     .insert("qty", 1)
//!     .insert_pending("productId", async move {
//!         // e.g. extracted from a create-product response still in flight
//!         lookup_product_id().await
//!     });
//!
//! let result = client.post("/V1/carts/mine/items", payload).await?;
//! ```
//!
//! Only top-level object keys and array elements are inspected; pending
//! values cannot be nested deeper.
//!
//! ## Pre-Issued Tokens
//!
//! Magento integrations configured with a static access token skip the token
//! endpoint entirely:
//!
//! ```rust
//! use magento2_api::{ClientOptions, RestClient};
//!
//! let client = RestClient::with_token(
//!     "https://shop.example.com",
//!     "q0u66k8h42yaevtchv09uyy3y9gaj2ap",
//!     ClientOptions::default(),
//! )
//! .unwrap();
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the cached token is owned by its client instance
//! - **Fail-fast validation**: configuration errors surface at construction,
//!   before any network activity
//! - **Single calling convention**: every operation is an async `Result`;
//!   there is no separate callback API
//! - **Nothing swallowed**: every failure — including error responses whose
//!   bodies do not decode — reaches the caller as an `Err`
//! - **Thread-safe**: clients are `Send + Sync`; concurrent first requests
//!   share one token fetch

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{Credentials, TokenProvider};
pub use config::{
    AccessToken, AdminPassword, AdminUsername, ApiVersion, Location, Magento2Config,
    Magento2ConfigBuilder, Scheme, DEFAULT_PORT, DEFAULT_VERSION,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiResponseError, ClientOptions, HttpClient, HttpError, HttpMethod, HttpResponse, Payload,
    PayloadField, PendingValue, RestClient, RestError, RestRequest, RestRequestBuilder,
};
