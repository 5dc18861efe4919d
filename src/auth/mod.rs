//! Authentication types for the Magento2 API client.
//!
//! Magento's REST API authenticates with a bearer token. This module holds
//! the [`Credentials`] a client is constructed with and the [`TokenProvider`]
//! that turns them into a cached bearer token:
//!
//! - [`Credentials::Admin`]: a username/password pair, exchanged for a token
//!   at `POST /rest/{version}/integration/admin/token` on first use
//! - [`Credentials::Token`]: a pre-issued integration token, used directly
//!
//! The token is cached for the lifetime of the client; there is no expiry
//! tracking, refresh, or invalidation.

mod credentials;
mod token;

pub use credentials::Credentials;
pub use token::TokenProvider;
