//! Credential types for authenticating against a Magento installation.

use crate::config::{AccessToken, AdminPassword, AdminUsername};

/// Credentials used to obtain (or stand in for) a bearer token.
///
/// A client is constructed either with an admin username/password pair, in
/// which case a token is fetched lazily from the admin token endpoint on the
/// first request, or with a pre-issued integration token, in which case the
/// token endpoint is never called.
///
/// # Security
///
/// Both variants hold masked newtypes ([`AdminPassword`], [`AccessToken`]),
/// so `Debug` output never leaks secret material.
///
/// # Example
///
/// ```rust
/// use magento2_api::{AccessToken, AdminPassword, AdminUsername, Credentials};
///
/// let admin = Credentials::admin(
///     AdminUsername::new("admin").unwrap(),
///     AdminPassword::new("s3cret").unwrap(),
/// );
/// assert!(admin.requires_token_fetch());
///
/// let token = Credentials::Token(AccessToken::new("pre-issued").unwrap());
/// assert!(!token.requires_token_fetch());
/// ```
#[derive(Clone, Debug)]
pub enum Credentials {
    /// Admin username/password pair; a bearer token is fetched on first use.
    Admin {
        /// The Magento admin username.
        username: AdminUsername,
        /// The Magento admin password.
        password: AdminPassword,
    },

    /// Pre-issued integration token used directly as the bearer token.
    Token(AccessToken),
}

impl Credentials {
    /// Creates admin credentials from a username/password pair.
    #[must_use]
    pub const fn admin(username: AdminUsername, password: AdminPassword) -> Self {
        Self::Admin { username, password }
    }

    /// Returns `true` when these credentials require a live token fetch.
    #[must_use]
    pub const fn requires_token_fetch(&self) -> bool {
        matches!(self, Self::Admin { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_credentials() -> Credentials {
        Credentials::admin(
            AdminUsername::new("admin").unwrap(),
            AdminPassword::new("s3cret").unwrap(),
        )
    }

    #[test]
    fn test_admin_credentials_require_fetch() {
        assert!(admin_credentials().requires_token_fetch());
    }

    #[test]
    fn test_static_token_does_not_require_fetch() {
        let credentials = Credentials::Token(AccessToken::new("pre-issued").unwrap());
        assert!(!credentials.requires_token_fetch());
    }

    #[test]
    fn test_debug_output_masks_secrets() {
        let debug = format!("{:?}", admin_credentials());
        assert!(debug.contains("AdminPassword(*****)"));
        assert!(!debug.contains("s3cret"));

        let debug = format!("{:?}", Credentials::Token(AccessToken::new("tok").unwrap()));
        assert!(debug.contains("AccessToken(*****)"));
        assert!(!debug.contains("tok)"));
    }
}
