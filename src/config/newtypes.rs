//! Validated newtype wrappers for credential values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages, and secret values mask themselves in debug output.

use std::fmt;

use crate::error::ConfigError;

/// A validated Magento admin username.
///
/// This newtype ensures the username is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use magento2_api::AdminUsername;
///
/// let username = AdminUsername::new("admin").unwrap();
/// assert_eq!(username.as_ref(), "admin");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminUsername(String);

impl AdminUsername {
    /// Creates a new validated admin username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for AdminUsername {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Magento admin password.
///
/// This newtype ensures the password is non-empty and masks its value in
/// debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation displays `AdminPassword(*****)` instead of
/// the actual password.
///
/// # Example
///
/// ```rust
/// use magento2_api::AdminPassword;
///
/// let password = AdminPassword::new("s3cret").unwrap();
/// assert_eq!(format!("{:?}", password), "AdminPassword(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AdminPassword(String);

impl AdminPassword {
    /// Creates a new validated admin password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for AdminPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminPassword(*****)")
    }
}

/// A validated, pre-issued Magento access token.
///
/// Magento integrations can be configured with a static token instead of an
/// admin username/password pair; a client constructed with one never calls
/// the token endpoint.
///
/// # Security
///
/// The `Debug` implementation displays `AccessToken(*****)` instead of
/// the actual token.
///
/// # Example
///
/// ```rust
/// use magento2_api::AccessToken;
///
/// let token = AccessToken::new("q0u66k8h42yaevtchv09uyy3y9gaj2ap").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self(token))
    }

    /// Consumes the wrapper and returns the raw token string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_username_accepts_non_empty() {
        let username = AdminUsername::new("admin").unwrap();
        assert_eq!(username.as_ref(), "admin");
    }

    #[test]
    fn test_admin_username_rejects_empty() {
        assert!(matches!(
            AdminUsername::new(""),
            Err(ConfigError::EmptyUsername)
        ));
    }

    #[test]
    fn test_admin_password_rejects_empty() {
        assert!(matches!(
            AdminPassword::new(""),
            Err(ConfigError::EmptyPassword)
        ));
    }

    #[test]
    fn test_admin_password_debug_is_masked() {
        let password = AdminPassword::new("super-secret").unwrap();
        let debug = format!("{password:?}");

        assert_eq!(debug, "AdminPassword(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_access_token_rejects_empty() {
        assert!(matches!(AccessToken::new(""), Err(ConfigError::EmptyToken)));
    }

    #[test]
    fn test_access_token_debug_is_masked() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug = format!("{token:?}");

        assert_eq!(debug, "AccessToken(*****)");
        assert!(!debug.contains("super-secret-token"));
    }

    #[test]
    fn test_access_token_into_inner() {
        let token = AccessToken::new("my-token").unwrap();
        assert_eq!(token.into_inner(), "my-token");
    }
}
