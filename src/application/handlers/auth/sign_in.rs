//! SignInHandler - Command handler for establishing sessions.

use std::sync::Arc;

use secrecy::SecretString;

use crate::config::SessionConfig;
use crate::domain::foundation::{
    CommandMetadata, Device, DomainError, SessionId, Timestamp, UserId,
};
use crate::domain::session::{NewSession, RefreshTokenDigest, Session, SessionError};
use crate::ports::{CredentialVerifier, SessionRepository, TokenHasher};

/// Command to sign a user in and establish a session.
#[derive(Debug, Clone)]
pub struct SignInCommand {
    /// Credential identifier (email or username).
    pub identifier: String,
    /// Credential secret.
    pub secret: SecretString,
    /// Raw refresh token issued for this session; only its digest is stored.
    pub refresh_token: SecretString,
    /// Raw device string, validated against the recognized set.
    pub device: String,
    /// Opaque client instance identifier.
    pub device_id: String,
    /// Advisory user-agent string.
    pub user_agent: String,
    /// Advisory IP literal.
    pub ip: String,
}

/// Public data of a freshly established session.
///
/// Deliberately excludes the refresh token and its digest.
#[derive(Debug, Clone)]
pub struct SignInResult {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub device: Device,
    pub expires_at: Timestamp,
}

/// Handler for the sign-in command.
pub struct SignInHandler {
    credential_verifier: Arc<dyn CredentialVerifier>,
    token_hasher: Arc<dyn TokenHasher>,
    repository: Arc<dyn SessionRepository>,
    session_config: SessionConfig,
}

impl SignInHandler {
    pub fn new(
        credential_verifier: Arc<dyn CredentialVerifier>,
        token_hasher: Arc<dyn TokenHasher>,
        repository: Arc<dyn SessionRepository>,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            credential_verifier,
            token_hasher,
            repository,
            session_config,
        }
    }

    pub async fn handle(
        &self,
        cmd: SignInCommand,
        metadata: CommandMetadata,
    ) -> Result<SignInResult, SessionError> {
        // 1. Delegate credential verification; nothing is constructed on failure
        let user = match self
            .credential_verifier
            .verify(&cmd.identifier, &cmd.secret)
            .await
        {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(
                    identifier = %cmd.identifier,
                    correlation_id = %metadata.correlation_id(),
                    error = %err,
                    "credential verification failed"
                );
                return Err(err.into());
            }
        };

        // 2. Digest the refresh token; the raw token goes no further
        let digest = RefreshTokenDigest::new(self.token_hasher.digest(&cmd.refresh_token))
            .map_err(DomainError::from)?;

        // 3. Construct the session aggregate (stages SessionCreated)
        let expires_at = Timestamp::now().plus_hours(self.session_config.refresh_ttl_hours);
        let mut session = Session::create(NewSession {
            id: None,
            user_id: user.id.clone(),
            refresh_token_digest: digest,
            device: cmd.device,
            device_id: cmd.device_id,
            user_agent: cmd.user_agent,
            ip: cmd.ip,
            expires_at,
        })?;

        // 4. Persist; the repository drains and publishes the staged events
        self.repository.save(&mut session).await?;

        tracing::info!(
            session_id = %session.id(),
            user_id = %session.user_id(),
            device = %session.device(),
            correlation_id = %metadata.correlation_id(),
            "session established"
        );

        Ok(SignInResult {
            session_id: *session.id(),
            user_id: user.id,
            device: session.device(),
            expires_at,
        })
    }
}
