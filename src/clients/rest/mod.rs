//! High-level REST client for the Magento2 API.
//!
//! The [`RestClient`] is the crate's main entry point: it prefixes resource
//! paths with `/rest`, attaches the cached bearer token, resolves pending
//! payload fields before dispatch, and delivers parsed JSON bodies or typed
//! errors.

mod client;
mod errors;

pub use client::{ClientOptions, RestClient};
pub use errors::RestError;
