//! RefreshSessionHandler - Command handler for refresh-token rotation.
//!
//! Rotation is a replacement, not a mutation: the old session is revoked
//! and a new one is created carrying the new token's digest and the same
//! device binding. Both transitions are recorded by the usual events, so
//! the audit trail shows exactly which session superseded which.

use std::sync::Arc;

use secrecy::SecretString;

use crate::config::SessionConfig;
use crate::domain::foundation::{
    CommandMetadata, Device, DomainError, SessionId, Timestamp, UserId,
};
use crate::domain::session::{NewSession, RefreshTokenDigest, Session, SessionError};
use crate::ports::{SessionRepository, TokenHasher};

/// Command to rotate a session's refresh token.
#[derive(Debug, Clone)]
pub struct RefreshSessionCommand {
    /// Session the client claims to hold.
    pub session_id: SessionId,
    /// Raw refresh token presented by the client.
    pub presented_token: SecretString,
    /// Raw replacement token issued for the new session.
    pub replacement_token: SecretString,
}

/// Public data of the replacement session.
#[derive(Debug, Clone)]
pub struct RefreshSessionResult {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub device: Device,
    pub expires_at: Timestamp,
}

/// Handler for the refresh command.
pub struct RefreshSessionHandler {
    token_hasher: Arc<dyn TokenHasher>,
    repository: Arc<dyn SessionRepository>,
    session_config: SessionConfig,
}

impl RefreshSessionHandler {
    pub fn new(
        token_hasher: Arc<dyn TokenHasher>,
        repository: Arc<dyn SessionRepository>,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            token_hasher,
            repository,
            session_config,
        }
    }

    pub async fn handle(
        &self,
        cmd: RefreshSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<RefreshSessionResult, SessionError> {
        // 1. Load; an unknown session id reads the same as a bad token
        let mut current = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionError::InvalidRefreshToken)?;

        // 2. Match the presented token against the stored digest
        let presented = RefreshTokenDigest::new(self.token_hasher.digest(&cmd.presented_token))
            .map_err(DomainError::from)?;
        if !current.matches_refresh_token(&presented) {
            tracing::warn!(
                session_id = %cmd.session_id,
                correlation_id = %metadata.correlation_id(),
                "refresh rejected: token digest mismatch"
            );
            return Err(SessionError::InvalidRefreshToken);
        }

        // 3. Reject dead sessions. A revoked session seeing its token again
        //    is a reuse signal worth logging loudly.
        if current.is_revoked() {
            tracing::warn!(
                session_id = %cmd.session_id,
                user_id = %current.user_id(),
                correlation_id = %metadata.correlation_id(),
                "refresh rejected: token presented for a revoked session"
            );
            return Err(SessionError::Revoked);
        }
        if current.is_expired() {
            return Err(SessionError::Expired);
        }

        // 4. Build the replacement with the same device binding
        let replacement_digest =
            RefreshTokenDigest::new(self.token_hasher.digest(&cmd.replacement_token))
                .map_err(DomainError::from)?;
        let expires_at = Timestamp::now().plus_hours(self.session_config.refresh_ttl_hours);
        let mut replacement = Session::create(NewSession {
            id: None,
            user_id: current.user_id().clone(),
            refresh_token_digest: replacement_digest,
            device: current.device().as_str().to_string(),
            device_id: current.device_id().to_string(),
            user_agent: current.user_agent().to_string(),
            ip: current.ip().to_string(),
            expires_at,
        })?;

        // 5. Retire the old session, then persist both
        current.revoke();
        self.repository.update(&mut current).await?;
        self.repository.save(&mut replacement).await?;

        tracing::info!(
            old_session_id = %cmd.session_id,
            new_session_id = %replacement.id(),
            user_id = %replacement.user_id(),
            correlation_id = %metadata.correlation_id(),
            "session rotated"
        );

        Ok(RefreshSessionResult {
            session_id: *replacement.id(),
            user_id: replacement.user_id().clone(),
            device: replacement.device(),
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use secrecy::ExposeSecret;
    use std::sync::Mutex;

    struct MockTokenHasher;

    impl TokenHasher for MockTokenHasher {
        fn digest(&self, raw_token: &SecretString) -> String {
            format!("digest:{}", raw_token.expose_secret())
        }
    }

    struct MockSessionRepository {
        sessions: Mutex<Vec<Session>>,
        drained_event_types: Mutex<Vec<&'static str>>,
    }

    impl MockSessionRepository {
        fn with_session(session: Session) -> Self {
            Self {
                sessions: Mutex::new(vec![session]),
                drained_event_types: Mutex::new(Vec::new()),
            }
        }

        fn stored_session(&self, id: &SessionId) -> Option<Session> {
            self.sessions
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id() == id)
                .cloned()
        }

        fn session_count(&self) -> usize {
            self.sessions.lock().unwrap().len()
        }

        fn drained_event_types(&self) -> Vec<&'static str> {
            self.drained_event_types.lock().unwrap().clone()
        }

        fn drain(&self, session: &mut Session) {
            for event in session.take_uncommitted_events() {
                self.drained_event_types.lock().unwrap().push(event.event_type());
            }
        }
    }

    #[async_trait]
    impl SessionRepository for MockSessionRepository {
        async fn save(&self, session: &mut Session) -> Result<(), DomainError> {
            self.sessions.lock().unwrap().push(session.clone());
            self.drain(session);
            Ok(())
        }

        async fn update(&self, session: &mut Session) -> Result<(), DomainError> {
            let mut sessions = self.sessions.lock().unwrap();
            if let Some(pos) = sessions.iter().position(|s| s.id() == session.id()) {
                sessions[pos] = session.clone();
            }
            drop(sessions);
            self.drain(session);
            Ok(())
        }

        async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
            Ok(self
                .sessions
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id() == id)
                .cloned())
        }

        async fn find_by_user_id(&self, _user_id: &UserId) -> Result<Vec<Session>, DomainError> {
            Ok(vec![])
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    fn stored_session() -> Session {
        let mut session = Session::create(NewSession {
            id: None,
            user_id: test_user_id(),
            refresh_token_digest: RefreshTokenDigest::new("digest:old-token").unwrap(),
            device: "mobile".to_string(),
            device_id: "phone-1".to_string(),
            user_agent: "TestAgent/1.0".to_string(),
            ip: "10.0.0.1".to_string(),
            expires_at: Timestamp::now().plus_hours(24),
        })
        .unwrap();
        session.take_uncommitted_events();
        session
    }

    /// An already-expired session can only come out of storage, never out
    /// of the factory.
    fn expired_session() -> Session {
        Session::reconstitute(
            SessionId::new(),
            test_user_id(),
            RefreshTokenDigest::new("digest:old-token").unwrap(),
            Device::Mobile,
            "phone-1".to_string(),
            "TestAgent/1.0".to_string(),
            "10.0.0.1".to_string(),
            Timestamp::now().plus_hours(-48),
            Timestamp::now().plus_hours(-48),
            Timestamp::now().plus_hours(-24),
            None,
        )
    }

    fn handler_with(repo: Arc<MockSessionRepository>) -> RefreshSessionHandler {
        RefreshSessionHandler::new(
            Arc::new(MockTokenHasher),
            repo,
            SessionConfig {
                refresh_ttl_hours: 24,
            },
        )
    }

    fn test_command(session_id: SessionId) -> RefreshSessionCommand {
        RefreshSessionCommand {
            session_id,
            presented_token: SecretString::new("old-token".to_string()),
            replacement_token: SecretString::new("new-token".to_string()),
        }
    }

    #[tokio::test]
    async fn rotation_replaces_the_session() {
        let session = stored_session();
        let old_id = *session.id();
        let repo = Arc::new(MockSessionRepository::with_session(session));
        let handler = handler_with(repo.clone());

        let result = handler
            .handle(test_command(old_id), CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_ne!(result.session_id, old_id);
        assert_eq!(result.user_id, test_user_id());
        assert_eq!(result.device, Device::Mobile);

        let old = repo.stored_session(&old_id).unwrap();
        assert!(old.is_revoked());

        let new = repo.stored_session(&result.session_id).unwrap();
        assert!(new.is_active());
        assert_eq!(new.refresh_token_digest().as_str(), "digest:new-token");
        assert_eq!(new.device_id(), "phone-1");
    }

    #[tokio::test]
    async fn rotation_emits_revoked_then_created() {
        let session = stored_session();
        let old_id = *session.id();
        let repo = Arc::new(MockSessionRepository::with_session(session));
        let handler = handler_with(repo.clone());

        handler
            .handle(test_command(old_id), CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_eq!(
            repo.drained_event_types(),
            vec!["session.revoked.v1", "session.created.v1"]
        );
    }

    #[tokio::test]
    async fn fails_for_unknown_session() {
        let repo = Arc::new(MockSessionRepository::with_session(stored_session()));
        let handler = handler_with(repo);

        let result = handler
            .handle(
                test_command(SessionId::new()),
                CommandMetadata::test_fixture(),
            )
            .await;

        assert!(matches!(result, Err(SessionError::InvalidRefreshToken)));
    }

    #[tokio::test]
    async fn fails_for_mismatched_token() {
        let session = stored_session();
        let old_id = *session.id();
        let repo = Arc::new(MockSessionRepository::with_session(session));
        let handler = handler_with(repo.clone());

        let cmd = RefreshSessionCommand {
            presented_token: SecretString::new("stolen-guess".to_string()),
            ..test_command(old_id)
        };

        let result = handler.handle(cmd, CommandMetadata::test_fixture()).await;

        assert!(matches!(result, Err(SessionError::InvalidRefreshToken)));
        assert!(!repo.stored_session(&old_id).unwrap().is_revoked());
        assert_eq!(repo.session_count(), 1);
    }

    #[tokio::test]
    async fn fails_for_revoked_session() {
        let mut session = stored_session();
        session.revoke();
        session.take_uncommitted_events();
        let old_id = *session.id();
        let repo = Arc::new(MockSessionRepository::with_session(session));
        let handler = handler_with(repo.clone());

        let result = handler
            .handle(test_command(old_id), CommandMetadata::test_fixture())
            .await;

        assert!(matches!(result, Err(SessionError::Revoked)));
        assert_eq!(repo.session_count(), 1);
    }

    #[tokio::test]
    async fn fails_for_expired_session() {
        let session = expired_session();
        let old_id = *session.id();
        let repo = Arc::new(MockSessionRepository::with_session(session));
        let handler = handler_with(repo.clone());

        let result = handler
            .handle(test_command(old_id), CommandMetadata::test_fixture())
            .await;

        assert!(matches!(result, Err(SessionError::Expired)));
        assert_eq!(repo.session_count(), 1);
    }
}
