//! Base URL parsing for Magento installations.
//!
//! This module provides the [`Location`] type, the parsed form of the base
//! URL a client is constructed with. Parsing is intentionally shape-based: a
//! single anchored regular expression splits an absolute URL into its
//! components rather than pulling in a general-purpose URL library.
//!
//! # Example
//!
//! ```rust
//! use magento2_api::{Location, Scheme};
//!
//! let location = Location::parse("https://shop.example.com:8443/store?a=1#top").unwrap();
//! assert_eq!(location.scheme(), Scheme::Https);
//! assert_eq!(location.hostname(), "shop.example.com");
//! assert_eq!(location.port(), Some(8443));
//! assert_eq!(location.pathname(), "/store");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::error::ConfigError;

/// Anchored pattern splitting an absolute URL into scheme, host, hostname,
/// port, pathname, search, and fragment captures.
static LOCATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(http|https)?://(([^:/?#]*)(?::([0-9]+))?)(/?[^?#]*)(\?[^#]*|)(#.*|)$")
        .expect("LOCATION_REGEX is a valid regex pattern")
});

/// URL scheme of a Magento installation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    /// Plain-text HTTP.
    Http,
    /// TLS-protected HTTPS.
    Https,
}

impl Scheme {
    /// Returns `true` for schemes that protect credentials in transit.
    #[must_use]
    pub const fn is_secure(self) -> bool {
        matches!(self, Self::Https)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http => write!(f, "http"),
            Self::Https => write!(f, "https"),
        }
    }
}

/// Structured components of an absolute base URL.
///
/// A `Location` is produced by [`Location::parse`] and holds the pieces
/// needed to build request URLs: scheme, authority, and path, plus the query
/// and fragment components for completeness.
///
/// URLs without a scheme default to [`Scheme::Http`]. URLs without a host
/// are rejected with [`ConfigError::InvalidBaseUrl`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    href: String,
    scheme: Scheme,
    host: String,
    hostname: String,
    port: Option<u16>,
    pathname: String,
    search: Option<String>,
    fragment: Option<String>,
}

impl Location {
    /// Parses an absolute URL string into its components.
    ///
    /// Emits a `tracing` warning when the scheme is not `https`; live Magento
    /// installs should be served over TLS since the admin credentials travel
    /// in request bodies.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the string does not match
    /// the expected URL shape, has an empty host, or carries a port outside
    /// the 16-bit range.
    pub fn parse(href: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidBaseUrl {
            url: href.to_string(),
        };

        let captures = LOCATION_REGEX.captures(href).ok_or_else(invalid)?;

        let hostname = captures.get(3).map_or("", |m| m.as_str());
        if hostname.is_empty() {
            return Err(invalid());
        }

        let scheme = match captures.get(1).map(|m| m.as_str()) {
            Some("https") => Scheme::Https,
            _ => Scheme::Http,
        };
        if !scheme.is_secure() {
            tracing::warn!(url = href, "live Magento installs should have https protocol");
        }

        let port = match captures.get(4) {
            Some(m) => Some(m.as_str().parse::<u16>().map_err(|_| invalid())?),
            None => None,
        };

        let non_empty = |m: Option<regex::Match<'_>>| {
            m.map(|m| m.as_str()).filter(|s| !s.is_empty()).map(String::from)
        };

        Ok(Self {
            href: href.to_string(),
            scheme,
            host: captures.get(2).map_or("", |m| m.as_str()).to_string(),
            hostname: hostname.to_string(),
            port,
            pathname: captures.get(5).map_or("", |m| m.as_str()).to_string(),
            search: non_empty(captures.get(6)),
            fragment: non_empty(captures.get(7)),
        })
    }

    /// Returns the original URL string this location was parsed from.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns the URL scheme.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Returns the authority as written, including any explicit port
    /// (e.g. `shop.example.com:8080`).
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the hostname without a port.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Returns the explicit port, if the URL carried one.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the path component (may be empty).
    #[must_use]
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Returns the query component including the leading `?`, if present.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the fragment component including the leading `#`, if present.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_https_url_with_port_and_path() {
        let location = Location::parse("https://shop.example.com:8443/store").unwrap();

        assert_eq!(location.scheme(), Scheme::Https);
        assert_eq!(location.host(), "shop.example.com:8443");
        assert_eq!(location.hostname(), "shop.example.com");
        assert_eq!(location.port(), Some(8443));
        assert_eq!(location.pathname(), "/store");
    }

    #[test]
    fn test_parse_http_url_without_port() {
        let location = Location::parse("http://shop.example.com").unwrap();

        assert_eq!(location.scheme(), Scheme::Http);
        assert_eq!(location.hostname(), "shop.example.com");
        assert_eq!(location.port(), None);
        assert_eq!(location.pathname(), "");
    }

    #[test]
    fn test_parse_captures_search_and_fragment() {
        let location = Location::parse("https://shop.example.com/store?a=1&b=2#section").unwrap();

        assert_eq!(location.search(), Some("?a=1&b=2"));
        assert_eq!(location.fragment(), Some("#section"));
    }

    #[test]
    fn test_parse_empty_search_and_fragment_are_none() {
        let location = Location::parse("https://shop.example.com/store").unwrap();

        assert_eq!(location.search(), None);
        assert_eq!(location.fragment(), None);
    }

    #[test]
    fn test_parse_missing_scheme_defaults_to_http() {
        let location = Location::parse("://shop.example.com").unwrap();

        assert_eq!(location.scheme(), Scheme::Http);
        assert_eq!(location.hostname(), "shop.example.com");
    }

    #[test]
    fn test_parse_rejects_url_without_host() {
        let result = Location::parse("https:///path-only");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_parse_rejects_non_url_input() {
        let result = Location::parse("definitely not a url");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBaseUrl { url }) if url == "definitely not a url"
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_port() {
        let result = Location::parse("https://shop.example.com:99999");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_parse_ip_address_host() {
        let location = Location::parse("http://127.0.0.1:8080").unwrap();

        assert_eq!(location.hostname(), "127.0.0.1");
        assert_eq!(location.port(), Some(8080));
        assert_eq!(location.host(), "127.0.0.1:8080");
    }

    #[test]
    fn test_scheme_display() {
        assert_eq!(Scheme::Http.to_string(), "http");
        assert_eq!(Scheme::Https.to_string(), "https");
    }

    #[test]
    fn test_scheme_is_secure() {
        assert!(Scheme::Https.is_secure());
        assert!(!Scheme::Http.is_secure());
    }
}
