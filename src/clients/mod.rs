//! HTTP client types for Magento API communication.
//!
//! This module provides the layered client machinery:
//!
//! - [`HttpClient`]: the low-level async client owning the connection pool
//! - [`RestRequest`] / [`HttpResponse`]: the request and response types
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Payload`]: request bodies whose top-level fields may be pending
//!   asynchronous values
//! - [`rest::RestClient`]: the high-level REST client and crate entry point
//!
//! # Example
//!
//! ```rust,ignore
//! use magento2_api::{ClientOptions, RestClient};
//!
//! let client = RestClient::with_admin(
//!     "https://shop.example.com",
//!     "admin",
//!     "s3cret",
//!     ClientOptions::default(),
//! )?;
//!
//! let products = client.get("/V1/products", None).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod payload;
pub mod rest;

pub use errors::{ApiResponseError, ErrorBody, HttpError};
pub use http_client::{HttpClient, LIB_VERSION};
pub use http_request::{HttpMethod, RestRequest, RestRequestBuilder};
pub use http_response::HttpResponse;
pub use payload::{Payload, PayloadField, PendingValue};

// Re-export REST client types at the clients module level
pub use rest::{ClientOptions, RestClient, RestError};
