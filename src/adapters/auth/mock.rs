//! Mock credential adapter for testing.
//!
//! Implements the `CredentialVerifier` port against an in-memory account
//! table, avoiding the need for a real credential store in tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::CredentialVerifier;

/// Mock credential verifier for testing.
///
/// Stores identifier/secret pairs and the user each resolves to. Unknown
/// identifiers and wrong secrets both return `InvalidCredentials`, like a
/// real implementation would.
#[derive(Default)]
pub struct MockCredentialVerifier {
    accounts: RwLock<HashMap<String, (String, AuthenticatedUser)>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockCredentialVerifier {
    /// Creates a new empty mock verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account with the given identifier and secret.
    pub fn with_account(
        self,
        identifier: impl Into<String>,
        secret: impl Into<String>,
        user: AuthenticatedUser,
    ) -> Self {
        self.accounts
            .write()
            .unwrap()
            .insert(identifier.into(), (secret.into(), user));
        self
    }

    /// Adds an account with a simple test user derived from the user id.
    pub fn with_test_account(
        self,
        identifier: impl Into<String>,
        secret: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        let user_id = user_id.into();
        let user = AuthenticatedUser::new(
            UserId::new(&user_id).unwrap(),
            format!("{}@test.example.com", user_id),
            Some(format!("Test User {}", user_id)),
            true,
        );
        self.with_account(identifier, secret, user)
    }

    /// Forces all verifications to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }
}

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(
        &self,
        identifier: &str,
        secret: &SecretString,
    ) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        let accounts = self.accounts.read().unwrap();
        match accounts.get(identifier) {
            Some((expected, user)) if expected == secret.expose_secret() => Ok(user.clone()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}
