//! Credential verifier port.
//!
//! Sign-in delegates credential verification to this port; the password
//! store, hashing scheme, and lockout policy all live behind it. The core
//! only learns whether the pair verified and, if so, who the user is.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::foundation::{AuthenticatedUser, AuthError};

/// Verifies an identifier/secret pair against the credential store.
///
/// # Contract
///
/// Implementations must:
/// - Return the verified user on success
/// - Return `AuthError::InvalidCredentials` for an unknown identifier AND
///   for a wrong secret (indistinguishable to the caller)
/// - Return `AuthError::ServiceUnavailable` for transient backend errors
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify a credential pair.
    ///
    /// `identifier` is typically an email or username; `secret` never
    /// travels as a bare `String`.
    async fn verify(
        &self,
        identifier: &str,
        secret: &SecretString,
    ) -> Result<AuthenticatedUser, AuthError>;
}
