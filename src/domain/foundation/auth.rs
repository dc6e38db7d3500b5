//! Authentication types for the domain layer.
//!
//! These types represent a user identity verified against the credential
//! store. They have **no provider dependencies** - any credential backend
//! can populate them via the `CredentialVerifier` port.

use super::UserId;
use thiserror::Error;

/// A user identity verified by the credential store.
///
/// This is a **domain type**: the credential adapter maps whatever its
/// backend returns into this struct.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the credential store.
    pub id: UserId,

    /// User's email address.
    pub email: String,

    /// Display name if available.
    pub display_name: Option<String>,

    /// Whether the user's email has been verified.
    pub email_verified: bool,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// Typically called by a `CredentialVerifier` adapter after a
    /// successful verification.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        display_name: Option<String>,
        email_verified: bool,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
            email_verified,
        }
    }

    /// Returns the user's display name, or email as fallback.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Authentication errors surfaced by credential verification.
///
/// These are **domain-centric**: they describe what went wrong from the
/// application's perspective, not the credential backend's. The same
/// variant is returned for an unknown identifier and a wrong secret so
/// callers cannot probe which accounts exist.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The identifier/secret pair did not verify.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account exists but sign-in is administratively disabled.
    #[error("Account disabled")]
    AccountDisabled,

    /// A presented refresh token did not match any live session.
    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    /// The credential store is unavailable (network, config, etc.).
    #[error("Credential service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if the caller should re-authenticate from scratch.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials | AuthError::InvalidRefreshToken
        )
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[test]
    fn authenticated_user_new_creates_user() {
        let user = AuthenticatedUser::new(
            test_user_id(),
            "test@example.com",
            Some("Test User".to_string()),
            true,
        );

        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.display_name, Some("Test User".to_string()));
        assert!(user.email_verified);
    }

    #[test]
    fn display_name_or_email_falls_back_to_email() {
        let user = AuthenticatedUser::new(test_user_id(), "test@example.com", None, true);
        assert_eq!(user.display_name_or_email(), "test@example.com");
    }

    #[test]
    fn invalid_credentials_requires_reauthentication() {
        assert!(AuthError::InvalidCredentials.requires_reauthentication());
        assert!(AuthError::InvalidRefreshToken.requires_reauthentication());
        assert!(!AuthError::AccountDisabled.requires_reauthentication());
    }

    #[test]
    fn service_unavailable_is_transient() {
        assert!(AuthError::service_unavailable("timeout").is_transient());
        assert!(!AuthError::InvalidCredentials.is_transient());
    }
}
